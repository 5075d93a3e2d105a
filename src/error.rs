// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Document(String),
    Export(ExportError),
}

/// Reasons an export to the photo library can fail.
/// Each maps to a localized notification message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The user refused access to the photo library.
    PermissionDenied,

    /// No export directory could be determined on this platform.
    NoDestination,

    /// The filtered image could not be encoded.
    EncodingFailed(String),

    /// Writing the file failed.
    WriteFailed(String),
}

impl ExportError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ExportError::PermissionDenied => "notification-export-permission-denied",
            ExportError::NoDestination => "notification-export-no-destination",
            ExportError::EncodingFailed(_) => "notification-export-encoding-error",
            ExportError::WriteFailed(_) => "notification-export-write-error",
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::PermissionDenied => write!(f, "Photo library access denied"),
            ExportError::NoDestination => write!(f, "No export directory available"),
            ExportError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
            ExportError::WriteFailed(msg) => write!(f, "Write failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Document(e) => write!(f, "Document Error: {}", e),
            Error::Export(e) => write!(f, "Export Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ExportError> for Error {
    fn from(err: ExportError) -> Self {
        Error::Export(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn export_error_wraps_into_error() {
        let err: Error = ExportError::PermissionDenied.into();
        assert!(matches!(err, Error::Export(ExportError::PermissionDenied)));
        assert_eq!(format!("{}", err), "Export Error: Photo library access denied");
    }

    #[test]
    fn export_error_i18n_keys_are_distinct() {
        let keys = [
            ExportError::PermissionDenied.i18n_key(),
            ExportError::NoDestination.i18n_key(),
            ExportError::EncodingFailed(String::new()).i18n_key(),
            ExportError::WriteFailed(String::new()).i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
