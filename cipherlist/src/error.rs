//! Error types used throughout cipherlist.

use alloc::string::String;
use core::fmt;

/// cipherlist reports configuration and decoding errors using this type.
///
/// A configuration call that returns an `Error` has not changed any state:
/// the list that was active before the call is still active afterwards.
#[non_exhaustive]
#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// A cipher rule string could not be parsed.
    InvalidRule(RuleError),

    /// A TLS1.3 ciphersuite list named something that is not a TLS1.3
    /// ciphersuite.  The argument is the offending token.
    UnknownCipherSuiteName(String),

    /// Bytes on the wire could not be decoded.
    InvalidMessage(InvalidMessage),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRule(err) => write!(f, "invalid cipher rule: {err}"),
            Self::UnknownCipherSuiteName(name) => {
                write!(f, "unknown TLS1.3 ciphersuite name {name:?}")
            }
            Self::InvalidMessage(typ) => write!(f, "received corrupt message of type {typ:?}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<RuleError> for Error {
    #[inline]
    fn from(e: RuleError) -> Self {
        Self::InvalidRule(e)
    }
}

impl From<InvalidMessage> for Error {
    #[inline]
    fn from(e: InvalidMessage) -> Self {
        Self::InvalidMessage(e)
    }
}

/// The ways a cipher rule string can be malformed.
#[non_exhaustive]
#[derive(Debug, PartialEq, Clone)]
pub enum RuleError {
    /// A clause used a keyword that is neither a known alias nor the
    /// name of a cipher suite.
    UnknownKeyword(String),

    /// A clause started with `@` but did not name a known command.
    UnknownCommand(String),

    /// A clause, or one of its `+`-joined parts, was empty.  For example
    /// `!` on its own, or `ECDHE++AES`.
    MissingKeyword,

    /// `DEFAULT` may only appear as the first clause.
    MisplacedDefault,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKeyword(word) => write!(f, "unknown keyword {word:?}"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command {cmd:?}"),
            Self::MissingKeyword => write!(f, "clause is missing a keyword"),
            Self::MisplacedDefault => write!(f, "DEFAULT must be the first clause"),
        }
    }
}

/// A corrupt cipher suite encoding that resulted in an error.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidMessage {
    /// Message is shorter than the expected length
    MessageTooShort,
    /// Missing data for the named value
    MissingData(&'static str),
    /// A cipher suite vector had a length that is not a multiple of two.
    OddCipherSuiteListLength,
}
