//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics and the sinks that receive them
//! - Error types and result types

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{
    format_diagnostics, Diagnostic, DiagnosticKind, DiagnosticLevel, DiagnosticSink, Diagnostics,
    LogSink,
};
pub use error::{NotATableReason, TableError, TableResult};
