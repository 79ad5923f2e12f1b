//! Drift view: scores over time annotated with detected drift

pub mod drift_classifier;
pub mod dto;
pub mod service;
