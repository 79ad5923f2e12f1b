//! Raw metric reports → ordered time series

pub mod metric_extraction;
pub mod model_kind;
pub mod series_builder;
