use thiserror::Error;

/// Failures shared by every codec in the workspace.
///
/// `UnrecognizedFormat` is the dominant variant: structural mismatch of any
/// kind (wrong opcode pattern, wrong prefix, wrong length, foreign chain).
/// `ChecksumMismatch` is kept distinct for diagnostics; callers that do not
/// care may treat both identically.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unrecognized address format")]
    UnrecognizedFormat,

    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// CashAddr strings must be uniformly upper or uniformly lower case.
    /// Raised before any checksum work.
    #[error("mixed-case address")]
    InvalidCase,
}
