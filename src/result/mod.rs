//! The result of one executed Redis operation.
//!
//! A [CommandResult] is produced once by the transport layer and consumed by
//! one caller path. It owns the reply value and at most one transport error,
//! and every typed accessor first routes through [error](CommandResult::error),
//! so the caller never has to check transport and protocol failures
//! separately.
//!
//! ```
//! use redis_reply::reply::Reply;
//! use redis_reply::result::{CommandResult, TransportError};
//!
//! let result = CommandResult::from_reply(Reply::integer(7));
//! assert_eq!(7, result.to_int64().unwrap());
//!
//! let result = CommandResult::from_transport_error(TransportError::Timeout);
//! assert!(result.error().unwrap().as_transport_error().is_some());
//! ```

pub use error::{CommandError, TransportError};

pub(crate) mod error;

#[cfg(test)]
pub(crate) mod tests;

use crate::reply::{ErrorReply, Reply};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use bytes::Bytes;

/// Reply of one operation paired with an optional transport failure.
///
/// Accessors are read-only and repeatable; the result is immutable after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    reply: Reply,
    error: Option<TransportError>,
}

impl CommandResult {
    /// Wraps a decoded reply. Used by the transport layer once a complete
    /// frame arrived.
    pub fn from_reply(reply: Reply) -> Self {
        CommandResult { reply, error: None }
    }

    /// Wraps a transport failure. No reply exists in this case.
    pub fn from_transport_error(error: TransportError) -> Self {
        CommandResult {
            reply: Reply::nil(),
            error: Some(error),
        }
    }

    /// The single error check: the transport error if present, else the
    /// reply's classified error, else `None`.
    ///
    /// The transport level is checked first; a connection failure must not
    /// be masked by inspecting the placeholder reply value.
    pub fn error(&self) -> Option<CommandError> {
        if let Some(error) = self.error {
            return Some(CommandError::Transport(error));
        }
        self.reply.as_error().map(CommandError::Reply)
    }

    /// The protocol-level error reply, if the server answered with one.
    ///
    /// `None` when a transport error is present: a transport-failed result
    /// holds no meaningful reply. Distinguishes "server said no" from
    /// "network said no".
    pub fn error_reply(&self) -> Option<ErrorReply> {
        if self.error.is_some() {
            return None;
        }
        self.reply.as_error()
    }

    /// The transport failure, if any.
    pub fn transport_error(&self) -> Option<&TransportError> {
        self.error.as_ref()
    }

    /// Extracts the reply, or the unified error if the operation failed at
    /// either level.
    pub fn to_reply(self) -> Result<Reply, CommandError> {
        match self.error() {
            Some(error) => Err(error),
            None => Ok(self.reply),
        }
    }

    /// Delegates to [Reply::to_bytes] after the unified error check.
    pub fn to_bytes(&self) -> Result<Bytes, CommandError> {
        self.check()?;
        self.reply.to_bytes()
    }

    /// Delegates to [Reply::as_string] after the unified error check.
    pub fn as_string(&self) -> Result<String, CommandError> {
        self.check()?;
        self.reply.as_string()
    }

    /// Delegates to [Reply::as_int64] after the unified error check.
    pub fn as_int64(&self) -> Result<i64, CommandError> {
        self.check()?;
        self.reply.as_int64()
    }

    /// Delegates to [Reply::as_double] after the unified error check.
    pub fn as_double(&self) -> Result<f64, CommandError> {
        self.check()?;
        self.reply.as_double()
    }

    /// Delegates to [Reply::to_int64] after the unified error check.
    pub fn to_int64(&self) -> Result<i64, CommandError> {
        self.check()?;
        self.reply.to_int64()
    }

    /// Delegates to [Reply::to_bool] after the unified error check.
    pub fn to_bool(&self) -> Result<bool, CommandError> {
        self.check()?;
        self.reply.to_bool()
    }

    /// Delegates to [Reply::to_double] after the unified error check.
    pub fn to_double(&self) -> Result<f64, CommandError> {
        self.check()?;
        self.reply.to_double()
    }

    /// Delegates to [Reply::to_array] after the unified error check.
    pub fn to_array(&self) -> Result<&[Reply], CommandError> {
        self.check()?;
        self.reply.to_array()
    }

    /// Delegates to [Reply::to_map] after the unified error check.
    pub fn to_map(&self) -> Result<BTreeMap<Bytes, Reply>, CommandError> {
        self.check()?;
        self.reply.to_map()
    }

    /// Delegates to [Reply::as_map] after the unified error check.
    pub fn as_map(&self) -> Result<BTreeMap<Bytes, Reply>, CommandError> {
        self.check()?;
        self.reply.as_map()
    }

    /// Delegates to [Reply::as_bytes_vec] after the unified error check.
    pub fn as_bytes_vec(&self) -> Result<Vec<Bytes>, CommandError> {
        self.check()?;
        self.reply.as_bytes_vec()
    }

    /// Delegates to [Reply::as_bytes_map] after the unified error check.
    pub fn as_bytes_map(&self) -> Result<BTreeMap<Bytes, Bytes>, CommandError> {
        self.check()?;
        self.reply.as_bytes_map()
    }

    /// Delegates to [Reply::is_cache_hit]. Always succeeds.
    pub fn is_cache_hit(&self) -> bool {
        self.reply.is_cache_hit()
    }

    fn check(&self) -> Result<(), CommandError> {
        match self.error() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
