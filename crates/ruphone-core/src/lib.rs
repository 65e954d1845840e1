//! Core library for Russian phone number extraction.
//!
//! This crate provides:
//! - The phone number pattern and canonical `+7(CCC)EEE-AA-BB` formatting
//! - A line-oriented extractor with order-preserving deduplication
//! - A narrow diagnostic sink so callers decide where reports go
//! - Configuration for locating the input file

pub mod error;
pub mod models;
pub mod phone;
pub mod sink;

pub use error::{ErrorKind, ExtractError, Result, RuphoneError};
pub use models::config::{RuphoneConfig, executable_dir};
pub use phone::{Extraction, PhoneExtractor, RawMatch, find_numbers, format_number, scan_line};
pub use sink::{Diagnostic, DiagnosticSink, Level, MemorySink, NullSink, TracingSink};
