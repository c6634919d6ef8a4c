//! Bridge from decoded RESP frames to reply values.
//!
//! Decoding bytes off the wire is the job of
//! [redis-protocol](<https://docs.rs/redis-protocol/>); this module maps its
//! frames onto the kind table of [Reply]. Frame shapes without a kind of
//! their own collapse onto string kinds: big numbers, verbatim strings and
//! chunked strings all become bulk strings. RESP3 frame attributes become
//! the reply's attribute map.
//!
//! Conversion never marks a reply as cache-originated; only the cache
//! collaborator does that.

use crate::reply::Reply;
use alloc::string::ToString;
use alloc::vec::Vec;
use redis_protocol::resp2::types::Frame as Resp2Frame;
use redis_protocol::resp3::types::{Frame as Resp3Frame, FrameMap};

impl From<Resp2Frame> for Reply {
    fn from(frame: Resp2Frame) -> Self {
        match frame {
            Resp2Frame::SimpleString(data) => Reply::simple_string(data),
            Resp2Frame::Error(message) => Reply::error(message.to_string()),
            Resp2Frame::Integer(value) => Reply::integer(value),
            Resp2Frame::BulkString(data) => Reply::bulk_string(data),
            Resp2Frame::Array(data) => Reply::array(convert_all_resp2(data)),
            Resp2Frame::Null => Reply::nil(),
        }
    }
}

impl From<Resp3Frame> for Reply {
    fn from(frame: Resp3Frame) -> Self {
        match frame {
            Resp3Frame::BlobString { data, attributes } => {
                with_attributes(Reply::bulk_string(data), attributes)
            }
            Resp3Frame::SimpleString { data, attributes } => {
                with_attributes(Reply::simple_string(data), attributes)
            }
            Resp3Frame::BlobError { data, attributes } => {
                with_attributes(Reply::error(data), attributes)
            }
            Resp3Frame::SimpleError { data, attributes } => {
                with_attributes(Reply::error(data.to_string()), attributes)
            }
            Resp3Frame::Number { data, attributes } => {
                with_attributes(Reply::integer(data), attributes)
            }
            Resp3Frame::Boolean { data, attributes } => {
                with_attributes(Reply::boolean(data), attributes)
            }
            Resp3Frame::Double { data, attributes } => {
                with_attributes(Reply::double(data.to_string()), attributes)
            }
            Resp3Frame::BigNumber { data, attributes } => {
                with_attributes(Reply::bulk_string(data), attributes)
            }
            Resp3Frame::VerbatimString { data, attributes, .. } => {
                with_attributes(Reply::bulk_string(data), attributes)
            }
            Resp3Frame::Null => Reply::nil(),
            Resp3Frame::Array { data, attributes } => {
                with_attributes(Reply::array(convert_all_resp3(data)), attributes)
            }
            Resp3Frame::Set { data, attributes } => with_attributes(
                Reply::set(data.into_iter().map(Reply::from).collect()),
                attributes,
            ),
            Resp3Frame::Map { data, attributes } => {
                with_attributes(map_reply(data), attributes)
            }
            Resp3Frame::Push { data, attributes } => {
                with_attributes(Reply::push(convert_all_resp3(data)), attributes)
            }
            // Request-only frame, a server never sends it as a reply
            Resp3Frame::Hello { .. } => Reply::nil(),
            Resp3Frame::ChunkedString(data) => Reply::bulk_string(data),
        }
    }
}

fn convert_all_resp2(frames: Vec<Resp2Frame>) -> Vec<Reply> {
    frames.into_iter().map(Reply::from).collect()
}

fn convert_all_resp3(frames: Vec<Resp3Frame>) -> Vec<Reply> {
    frames.into_iter().map(Reply::from).collect()
}

fn map_reply(map: FrameMap) -> Reply {
    Reply::map(
        map.into_iter()
            .map(|(key, value)| (Reply::from(key), Reply::from(value)))
            .collect(),
    )
}

fn with_attributes(reply: Reply, attributes: Option<FrameMap>) -> Reply {
    match attributes {
        Some(attributes) => reply.with_attributes(map_reply(attributes)),
        None => reply,
    }
}
