//! Purpose: Error modeling shared by the round-trip verifier and fixture helpers.
//! Exports: `Error`, `ErrorKind`, `Stage`.
//! Role: Single error shape so test diagnostics read the same across modules.
//! Invariants: Stage labels are stable text; consuming suites match on them.
//! Invariants: Underlying serde/io failures stay reachable via `source()`.

use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Mismatch,
    Serialize,
    Parse,
    Io,
}

/// Which half of the round-trip check a mismatch came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    Forward,
    Reparse,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Forward => "conversion back to JSON",
            Stage::Reparse => "conversion from roundtrip string",
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    path: Option<PathBuf>,
    stage: Option<Stage>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            path: None,
            stage: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(stage) = self.stage {
            write!(f, " [{}]", stage.label())?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind, Stage};

    #[test]
    fn stage_labels_are_stable() {
        let cases = [
            (Stage::Forward, "conversion back to JSON"),
            (Stage::Reparse, "conversion from roundtrip string"),
        ];

        for (stage, label) in cases {
            assert_eq!(stage.label(), label);
        }
    }

    #[test]
    fn display_carries_stage_message_and_path() {
        let err = Error::new(ErrorKind::Mismatch)
            .with_stage(Stage::Forward)
            .with_message("expected 1, got 2")
            .with_path("/tmp/sample.json");
        let rendered = err.to_string();
        assert!(rendered.contains("Mismatch"));
        assert!(rendered.contains("conversion back to JSON"));
        assert!(rendered.contains("expected 1, got 2"));
        assert!(rendered.contains("/tmp/sample.json"));
    }

    #[test]
    fn source_chain_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::new(ErrorKind::Io).with_source(io);
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("gone"));
    }
}
