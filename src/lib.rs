//! Whitebox monitoring dashboard: turns drift and performance reports of a
//! deployed model into chart-ready series, annotations and panel layouts.

pub mod api;
pub mod app_state;
pub mod core;
pub mod debug;
pub mod domain;
pub mod errors;
pub mod routes;
