use std::{fmt, io};

/// Everything that can go wrong constructing, loading, or saving a [`Filter`](crate::Filter).
///
/// Mirrors the C original's `hibp_status_t`, minus `HIBP_OK` (success is `Ok` in Rust).
#[derive(Debug)]
pub enum BloomError {
    /// Buffer allocation failed.
    NoMem,
    /// The on-disk magic header didn't match.
    VersionMismatch,
    /// Unexpected EOF or an underlying stream error during load/save.
    Io(Option<io::Error>),
    /// The buffer was read in full, but its checksum doesn't match.
    Checksum,
    /// `k` or `b` exceeds an implementation limit.
    TooBig,
    /// `k == 0`, `b == 0`, or some other malformed parameter/input.
    ParamError,
}

impl fmt::Display for BloomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMem => write!(f, "allocation failed"),
            Self::VersionMismatch => write!(f, "version header does not match"),
            Self::Io(Some(e)) => write!(f, "io error: {e}"),
            Self::Io(None) => write!(f, "io error (unexpected eof)"),
            Self::Checksum => write!(f, "buffer checksum mismatch"),
            Self::TooBig => write!(f, "parameter exceeds implementation limit"),
            Self::ParamError => write!(f, "invalid parameter"),
        }
    }
}

impl std::error::Error for BloomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(Some(e)) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BloomError {
    fn from(e: io::Error) -> Self {
        Self::Io(Some(e))
    }
}
