/// Error types for building and packaging Word documents.
use std::path::PathBuf;
use thiserror::Error;

/// Result type for document building and packaging.
pub type Result<T> = std::result::Result<T, DocxError>;

/// Boxed underlying cause of a packaging failure.
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for document building and packaging.
///
/// None of these are retried internally. Each variant names the part or
/// file involved so a failure can be diagnosed without inspecting internals.
#[derive(Error, Debug)]
pub enum DocxError {
    /// The image decoded, but its format is not JPEG, PNG or GIF
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The bytes could not be parsed as any known image
    #[error("Failed to decode image: {0}")]
    DecodeFailure(String),

    /// The XML encoder rejected an object graph
    #[error("Failed to serialize {part}: {message}")]
    Serialization { part: String, message: String },

    /// Writing a package part failed; the output container is incomplete
    #[error("Failed to write package part {part}: {source}")]
    Packaging {
        part: String,
        #[source]
        source: BoxedSource,
    },

    /// Reading an input file failed
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocxError {
    /// Wrap any underlying failure as a packaging failure for `part`.
    pub(crate) fn packaging(part: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        DocxError::Packaging {
            part: part.into(),
            source: source.into(),
        }
    }

    /// Whether this error comes from the package writing stage.
    pub fn is_packaging(&self) -> bool {
        matches!(self, DocxError::Packaging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_packaging_keeps_source_and_part() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = DocxError::packaging("word/document.xml", io);

        assert!(err.is_packaging());
        assert!(err.to_string().contains("word/document.xml"));
        assert!(err.to_string().contains("disk full"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_serialization_failure_can_be_wrapped() {
        let inner = DocxError::Serialization {
            part: "word/document.xml".to_string(),
            message: "bad name".to_string(),
        };
        let err = DocxError::packaging("word/document.xml", inner);
        let source = err.source().unwrap();
        assert!(source.to_string().contains("bad name"));
    }
}
