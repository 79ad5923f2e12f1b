//! Types and errors shared by the drift and performance pipelines

pub mod error;
pub mod model;
