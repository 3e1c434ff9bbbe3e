//! Error kinds for symviz operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to tell a bad option apart from a bad input
/// file or a failed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid configuration, such as an unknown backend or direction
    ConfigInvalid,

    // =========================================================================
    // Symbol graph errors
    // =========================================================================
    /// The symbol JSON could not be decoded
    DeserializationFailed,

    /// A rendered document could not be serialized
    SerializationFailed,

    /// The input is well-formed JSON but not in the expected layout
    InvalidFormat,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether the error comes from a user-supplied option rather than data.
    pub fn is_config(&self) -> bool {
        matches!(self, ErrorKind::ConfigInvalid)
    }
}
