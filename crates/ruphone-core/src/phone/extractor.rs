//! File-backed phone number extractor.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::UniqueNumbers;
use crate::error::ExtractError;
use crate::sink::{DiagnosticSink, TracingSink};

/// Outcome of one extraction run.
#[derive(Debug)]
pub enum Extraction {
    /// Every line was scanned.
    Complete(Vec<String>),
    /// The run stopped early; `partial` holds what was found before that.
    Failed {
        partial: Vec<String>,
        error: ExtractError,
    },
}

impl Extraction {
    /// Numbers found, whether or not the run finished.
    pub fn numbers(&self) -> &[String] {
        match self {
            Self::Complete(numbers) => numbers,
            Self::Failed { partial, .. } => partial,
        }
    }

    pub fn into_numbers(self) -> Vec<String> {
        match self {
            Self::Complete(numbers) => numbers,
            Self::Failed { partial, .. } => partial,
        }
    }

    pub fn error(&self) -> Option<&ExtractError> {
        match self {
            Self::Complete(_) => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Extracts unique canonical phone numbers from a text file.
pub struct PhoneExtractor<S = TracingSink> {
    path: PathBuf,
    sink: S,
}

impl PhoneExtractor {
    /// Create an extractor reporting through `tracing`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sink: TracingSink,
        }
    }
}

impl<S: DiagnosticSink> PhoneExtractor<S> {
    /// Replace the diagnostic sink.
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> PhoneExtractor<T> {
        PhoneExtractor {
            path: self.path,
            sink,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scan the configured file.
    ///
    /// Failures are reported to the sink and returned inside
    /// [`Extraction::Failed`]; this never panics or returns early with `Err`.
    pub fn extract(&self) -> Extraction {
        debug!("Opening {}", self.path.display());

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(source) => {
                let error = ExtractError::SourceNotFound {
                    path: self.path.clone(),
                    source,
                };
                self.sink.error(&error.to_string());
                return Extraction::Failed {
                    partial: Vec::new(),
                    error,
                };
            }
        };

        // `file` is dropped on return from here, whichever branch is taken.
        self.extract_from_reader(BufReader::new(file))
    }

    /// Scan any line-oriented reader. Errors are attributed to this
    /// extractor's path.
    pub fn extract_from_reader<R: BufRead>(&self, reader: R) -> Extraction {
        let mut numbers = UniqueNumbers::default();

        for (index, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    let error = ExtractError::Processing {
                        path: self.path.clone(),
                        line: index + 1,
                        source,
                    };
                    self.sink.exception("failed to process file", &error);
                    return Extraction::Failed {
                        partial: numbers.into_vec(),
                        error,
                    };
                }
            };

            numbers.scan(&line);
        }

        self.sink
            .info(&format!("found {} unique numbers", numbers.len()));

        Extraction::Complete(numbers.into_vec())
    }
}
