//! Performance view: per-metric scores over time with their mean

pub mod dto;
pub mod performance_summarizer;
pub mod service;
