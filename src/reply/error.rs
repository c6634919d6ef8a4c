//! Typed view of error and nil replies.

use alloc::string::String;
use bytes::Bytes;
use core::fmt;
use core::str;

/// Fixed message used when a nil reply is surfaced as an error.
const NIL_MESSAGE: &str = "redis nil reply";

/// An error or nil reply, viewed as a typed error.
///
/// Produced by [Reply::as_error](crate::reply::Reply::as_error). The message
/// is a shallow clone of the reply payload, byte-for-byte what the server
/// sent; downstream prefix matching depends on that.
///
/// ```
/// use redis_reply::reply::Reply;
///
/// let reply = Reply::error("MOVED 1024 127.0.0.1:7001");
/// let error = reply.as_error().unwrap();
/// assert_eq!(Some("127.0.0.1:7001"), error.is_moved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorReply {
    /// The server replied with nil.
    Nil,
    /// The server replied with an error message.
    Message(Bytes),
}

impl ErrorReply {
    /// True if the server replied with nil.
    pub fn is_nil(&self) -> bool {
        matches!(self, ErrorReply::Nil)
    }

    /// The verbatim server message. Empty for a nil reply.
    pub fn message(&self) -> &[u8] {
        match self {
            ErrorReply::Nil => &[],
            ErrorReply::Message(message) => message,
        }
    }

    /// Checks for a `MOVED` redirect and returns the target address.
    ///
    /// The address is the third whitespace-separated token, e.g.
    /// `127.0.0.1:7001` in `MOVED 1024 127.0.0.1:7001`. A cluster routing
    /// layer re-issues the operation against that node. Returns `None` for a
    /// malformed redirect (missing token or non-UTF-8 text).
    pub fn is_moved(&self) -> Option<&str> {
        self.redirect_address("MOVED")
    }

    /// Checks for an `ASK` redirect and returns the target address.
    ///
    /// Same token rule as [is_moved](ErrorReply::is_moved); an ASK redirect
    /// is valid for one operation only, during slot migration.
    pub fn is_ask(&self) -> Option<&str> {
        self.redirect_address("ASK")
    }

    /// True for a `TRYAGAIN` reply: retry the same operation against the
    /// same node, typically after a short delay. Prefix match only.
    pub fn is_try_again(&self) -> bool {
        self.message().starts_with(b"TRYAGAIN")
    }

    /// True for a `NOSCRIPT` reply: the script must be loaded again before
    /// the operation is retried.
    pub fn is_no_script(&self) -> bool {
        self.message().starts_with(b"NOSCRIPT")
    }

    fn redirect_address(&self, prefix: &str) -> Option<&str> {
        let text = str::from_utf8(self.message()).ok()?;
        if !text.starts_with(prefix) {
            return None;
        }
        text.split_whitespace().nth(2)
    }
}

impl fmt::Display for ErrorReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorReply::Nil => f.write_str(NIL_MESSAGE),
            ErrorReply::Message(message) => f.write_str(&String::from_utf8_lossy(message)),
        }
    }
}

impl core::error::Error for ErrorReply {}
