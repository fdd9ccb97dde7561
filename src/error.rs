//! Error taxonomy for the id3 pipeline.
//!
//! Three kinds only, matching the exit-code contract of the CLI: a bad
//! command-line shape is a [`Id3Error::Usage`], a malformed file is an
//! [`Id3Error::InvalidInput`], and anything touching the filesystem that
//! fails is an [`Id3Error::Io`].

use std::fmt;

#[derive(Debug)]
pub enum Id3Error {
    InvalidInput(String),
    Usage(String),
    Io(std::io::Error),
}

impl Id3Error {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Id3Error::InvalidInput(msg.into())
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        Id3Error::Usage(msg.into())
    }

    /// Process exit code per the CLI's documented contract: 1 for usage and
    /// I/O failures, 22 (EINVAL) for malformed input files.
    pub fn exit_code(&self) -> i32 {
        match self {
            Id3Error::InvalidInput(_) => 22,
            Id3Error::Usage(_) => 1,
            Id3Error::Io(_) => 1,
        }
    }
}

impl fmt::Display for Id3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id3Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Id3Error::Usage(msg) => write!(f, "{msg}"),
            Id3Error::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for Id3Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Id3Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Id3Error {
    fn from(err: std::io::Error) -> Self {
        Id3Error::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Id3Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_invalid_input_exit_code_einval() {
        assert_eq!(Id3Error::invalid("bad token").exit_code(), 22);
    }

    #[test]
    fn is_usage_exit_code_one() {
        assert_eq!(Id3Error::usage("bad shape").exit_code(), 1);
    }

    #[test]
    fn is_io_exit_code_one() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        assert_eq!(Id3Error::from(io).exit_code(), 1);
    }
}
