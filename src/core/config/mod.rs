//! Environment-driven configuration

pub mod chart_style;
pub mod dashboard_config;
