//! Core library functions for the filtered subgraph analyzer

pub mod error;
pub mod graph;
pub mod partition;
pub mod peel;
pub mod stats;
pub mod storage;
pub mod viz;

pub use anyhow::{Result, anyhow};
pub use error::AnalysisError;
