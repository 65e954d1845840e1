//! Configuration for locating the text source.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, RuphoneError};

/// Default name of the input file looked up next to the executable.
pub const DEFAULT_INPUT_FILE_NAME: &str = "input.txt";

/// Main configuration for ruphone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuphoneConfig {
    /// Explicit path of the file to scan.
    pub input: Option<PathBuf>,

    /// File name used when no explicit input is given.
    pub input_file_name: String,
}

impl Default for RuphoneConfig {
    fn default() -> Self {
        Self {
            input: None,
            input_file_name: DEFAULT_INPUT_FILE_NAME.to_string(),
        }
    }
}

impl RuphoneConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| RuphoneError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Path to scan: the explicit `input`, else `input_file_name` inside `base_dir`.
    pub fn resolve_input(&self, base_dir: &Path) -> PathBuf {
        match &self.input {
            Some(input) => input.clone(),
            None => base_dir.join(&self.input_file_name),
        }
    }
}

/// Directory holding the running executable, or `.` if it cannot be determined.
pub fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.canonicalize().ok())
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
