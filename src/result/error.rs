//! The two error taxonomies of an executed operation.
//!
//! Transport errors and protocol errors exist side by side and are never
//! merged: a transport error means no usable reply exists at all, a protocol
//! error is a reply (nil or error kind) the server actually sent. The
//! [CommandError] wrapper keeps both inspectable behind one type so callers
//! have a single error check.

use crate::reply::ErrorReply;
use core::fmt;
use core::num::{ParseFloatError, ParseIntError};
use core::str::Utf8Error;

/// Failure reported by the connection layer before a complete reply arrived.
///
/// Never representable as a reply value; carried only by
/// [CommandResult](crate::result::CommandResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// No response within the expected time frame
    Timeout,
    /// Low level network error
    TcpError,
    /// Received data violating the RESP protocol
    ProtocolViolation,
    /// Reply buffer overflow in the connection layer
    BufferOverflow,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            TransportError::Timeout => "timeout waiting for reply",
            TransportError::TcpError => "low level network error",
            TransportError::ProtocolViolation => "received data violating the RESP protocol",
            TransportError::BufferOverflow => "reply buffer overflow",
        };
        f.write_str(message)
    }
}

impl core::error::Error for TransportError {}

/// Unified error returned by every typed accessor of
/// [CommandResult](crate::result::CommandResult) and [Reply](crate::reply::Reply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The operation failed in the transport layer, no reply exists
    Transport(TransportError),
    /// The server answered with an error or nil reply
    Reply(ErrorReply),
    /// Reply text was requested as UTF-8 but is not valid UTF-8
    InvalidUtf8(Utf8Error),
    /// Reply text could not be parsed as a decimal integer
    ParseInt(ParseIntError),
    /// Reply text could not be parsed as a decimal double
    ParseFloat(ParseFloatError),
}

impl CommandError {
    /// True if the server answered with a nil reply.
    ///
    /// Nil replies (missing key, expired value) are routinely expected, so
    /// callers usually branch on this before treating the error as a
    /// failure.
    pub fn is_nil(&self) -> bool {
        matches!(self, CommandError::Reply(ErrorReply::Nil))
    }

    /// The protocol-level error reply, if this error carries one.
    pub fn as_error_reply(&self) -> Option<&ErrorReply> {
        match self {
            CommandError::Reply(error) => Some(error),
            _ => None,
        }
    }

    /// The transport failure, if this error carries one.
    pub fn as_transport_error(&self) -> Option<&TransportError> {
        match self {
            CommandError::Transport(error) => Some(error),
            _ => None,
        }
    }
}

impl From<TransportError> for CommandError {
    fn from(error: TransportError) -> Self {
        CommandError::Transport(error)
    }
}

impl From<ErrorReply> for CommandError {
    fn from(error: ErrorReply) -> Self {
        CommandError::Reply(error)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Transport(error) => write!(f, "transport failure: {}", error),
            CommandError::Reply(error) => fmt::Display::fmt(error, f),
            CommandError::InvalidUtf8(error) => write!(f, "reply text is not valid UTF-8: {}", error),
            CommandError::ParseInt(error) => write!(f, "reply text is not an integer: {}", error),
            CommandError::ParseFloat(error) => write!(f, "reply text is not a double: {}", error),
        }
    }
}

impl core::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            CommandError::Transport(error) => Some(error),
            CommandError::Reply(error) => Some(error),
            CommandError::InvalidUtf8(error) => Some(error),
            CommandError::ParseInt(error) => Some(error),
            CommandError::ParseFloat(error) => Some(error),
        }
    }
}
