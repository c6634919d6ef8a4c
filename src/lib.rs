//! In-memory reply model for RESP2/RESP3 Redis clients.
//!
//! This crate is the canonical representation of one Redis server reply and
//! of the result of one executed operation. It performs no network I/O and
//! encodes no commands; a connection layer decodes wire frames (for example
//! with [redis-protocol](<https://docs.rs/redis-protocol/>), for which
//! `From` conversions are provided) and hands the resulting [Reply] to its
//! callers wrapped in a [CommandResult].
//!
//! This crate consists of two parts:
//! * [reply module](crate::reply) for the reply value itself (kind tags,
//!   typed accessors, error classification, size estimation)
//! * [result module](crate::result) for pairing a reply with an optional
//!   transport failure, so callers have a single place to check errors
//!
//! ```
//! use redis_reply::reply::Reply;
//! use redis_reply::result::CommandResult;
//!
//! let reply = Reply::array(vec![
//!     Reply::bulk_string("foo"),
//!     Reply::bulk_string("bar"),
//! ]);
//!
//! let result = CommandResult::from_reply(reply);
//! let values = result.as_bytes_vec().unwrap();
//! assert_eq!("foo", values[0]);
//! assert_eq!("bar", values[1]);
//! ```
#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "strict", deny(warnings))]

extern crate alloc;

/// # Reply value model
///
/// A [Reply](crate::reply::Reply) is a closed tagged union over the eleven
/// RESP2/RESP3 reply shapes (see [ReplyKind](crate::reply::ReplyKind)), with
/// optional out-of-band attributes and a cache-origin marker.
///
/// Typed access follows a strict contract: reading a reply with an accessor
/// its kind can never satisfy is a precondition violation and panics, while
/// nil and error replies are ordinary data surfaced as
/// [ErrorReply](crate::reply::ErrorReply). See
/// [Reply](crate::reply::Reply) for details.
pub mod reply;

/// # Operation result
///
/// A [CommandResult](crate::result::CommandResult) owns one reply and at most
/// one [TransportError](crate::result::TransportError). Its accessors check
/// the transport level first, so a connection failure is never masked by a
/// stale reply value, and callers never have to distinguish "network said no"
/// from "server said no" by hand.
pub mod result;

pub use reply::{ErrorReply, Reply, ReplyKind};
pub use result::{CommandError, CommandResult, TransportError};
