use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::front_matter::FrontMatterError;

/// Common result type for quire operations
pub type SiteResult<T> = Result<T, SiteError>;

/// Error types for a site build
#[derive(Debug, Error)]
pub enum SiteError {
    /// The content root (or another required directory) does not exist
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A path that must be a directory points at something else
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The OS refused access to a path
    #[error("permission denied: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other filesystem failure
    #[error("filesystem error at {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A source file has malformed or incomplete front matter
    #[error("invalid content in {}: {source}", .path.display())]
    InvalidContent {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    /// A source file is not valid UTF-8
    #[error("invalid UTF-8 in {}", .0.display())]
    InvalidUtf8(PathBuf),

    /// A section was given a second index page
    #[error("section '{section}' already has an index page")]
    SectionIndexAlreadyExists { section: String },

    /// The mandatory base template is missing
    #[error("required template not found: {}", .0.display())]
    RequiredTemplateNotFound(PathBuf),

    /// A template has malformed block nesting
    #[error("template syntax error in {}: {message}", .path.display())]
    TemplateSyntax { path: PathBuf, message: String },

    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl SiteError {
    /// Classify an IO error raised while touching `path`
    pub fn io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => SiteError::PermissionDenied {
                path: path.to_path_buf(),
                source,
            },
            _ => SiteError::FileSystem {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Classify a walkdir error, keeping the path it failed on
    pub fn walk(fallback: &Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(fallback).to_path_buf();
        match err.into_io_error() {
            Some(source) => SiteError::io(&path, source),
            None => SiteError::FileSystem {
                path,
                source: io::Error::new(io::ErrorKind::Other, "filesystem loop detected"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_classification() {
        let denied = SiteError::io(
            Path::new("content/secret"),
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(matches!(denied, SiteError::PermissionDenied { .. }));

        let other = SiteError::io(
            Path::new("content/broken"),
            io::Error::new(io::ErrorKind::Other, "disk on fire"),
        );
        assert!(matches!(other, SiteError::FileSystem { .. }));
        assert!(other.to_string().contains("content/broken"));
    }

    #[test]
    fn test_display_names_the_section() {
        let err = SiteError::SectionIndexAlreadyExists {
            section: "posts".to_string(),
        };
        assert_eq!(err.to_string(), "section 'posts' already has an index page");
    }
}
