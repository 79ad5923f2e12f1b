pub mod common;
pub mod drift;
pub mod layout;
pub mod metric;
pub mod performance;
pub mod render;
