//! The reply value model.
//!
//! [Reply] is the in-memory target of frame decoding: a tagged union holding
//! exactly one of the RESP2/RESP3 reply shapes, plus optional out-of-band
//! attributes and a cache-origin marker. [ErrorReply] re-interprets an error
//! or nil reply as a typed error and classifies the server error classes a
//! routing layer has to handle (MOVED, ASK, TRYAGAIN, NOSCRIPT).
//!
//! `From` conversions from [Resp2Frame](redis_protocol::resp2::types::Frame)
//! and [Resp3Frame](redis_protocol::resp3::types::Frame) are provided, so a
//! connection layer built on redis-protocol can produce replies without any
//! manual mapping.

pub use error::ErrorReply;
pub use value::{Reply, ReplyKind};

pub(crate) mod error;
pub(crate) mod frame;
pub(crate) mod value;

#[cfg(test)]
pub(crate) mod tests;
