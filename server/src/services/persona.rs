//! Persona block prepended to every chat prompt.
//!
//! The built-in text is compiled from `server/persona.txt`. `PERSONA_PATH`
//! replaces it at startup; the result is loaded once and shared read-only.

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const BUILTIN_PERSONA: &str = include_str!("../../persona.txt");

#[derive(Debug, thiserror::Error)]
pub enum PersonaError {
    #[error("failed to read persona file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("persona file {0} is empty")]
    Empty(PathBuf),
}

/// Where the active persona text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonaSource {
    Builtin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Persona {
    pub text: Arc<str>,
    pub source: PersonaSource,
}

impl Persona {
    #[must_use]
    pub fn builtin() -> Self {
        Self { text: Arc::from(BUILTIN_PERSONA.trim_end()), source: PersonaSource::Builtin }
    }

    /// Load the persona named by `PERSONA_PATH`, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns an error if `PERSONA_PATH` is set but unreadable or blank.
    pub fn from_env() -> Result<Self, PersonaError> {
        match std::env::var_os("PERSONA_PATH") {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::builtin()),
        }
    }

    /// Load persona text from a file. Trailing whitespace is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds only whitespace.
    pub fn from_file(path: &Path) -> Result<Self, PersonaError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PersonaError::Read { path: path.to_path_buf(), source })?;
        let text = raw.trim_end();
        if text.trim().is_empty() {
            return Err(PersonaError::Empty(path.to_path_buf()));
        }
        Ok(Self { text: Arc::from(text), source: PersonaSource::File(path.to_path_buf()) })
    }
}

#[cfg(test)]
#[path = "persona_test.rs"]
mod tests;
