use crate::reply::{Reply, ReplyKind};
use alloc::vec;
use bytes::Bytes;
use redis_protocol::resp2::types::Frame as Resp2Frame;
use redis_protocol::resp3::types::{Frame as Resp3Frame, FrameMap};

#[test]
fn test_resp2_simple_string() {
    let reply = Reply::from(Resp2Frame::SimpleString("OK".into()));

    assert_eq!(ReplyKind::SimpleString, reply.kind());
    assert_eq!(Bytes::from_static(b"OK"), reply.to_bytes().unwrap());
}

#[test]
fn test_resp2_bulk_string() {
    let reply = Reply::from(Resp2Frame::BulkString("payload".into()));

    assert_eq!(ReplyKind::BulkString, reply.kind());
}

#[test]
fn test_resp2_error() {
    let reply = Reply::from(Resp2Frame::Error("ERR boom".into()));

    assert_eq!(ReplyKind::Error, reply.kind());
    assert_eq!(&b"ERR boom"[..], reply.as_error().unwrap().message());
}

#[test]
fn test_resp2_integer() {
    let reply = Reply::from(Resp2Frame::Integer(99));

    assert_eq!(99, reply.to_int64().unwrap());
}

#[test]
fn test_resp2_null() {
    assert!(Reply::from(Resp2Frame::Null).is_nil());
}

#[test]
fn test_resp2_nested_array() {
    let frame = Resp2Frame::Array(vec![
        Resp2Frame::BulkString("a".into()),
        Resp2Frame::Array(vec![Resp2Frame::Integer(1)]),
    ]);

    let reply = Reply::from(frame);
    let elements = reply.to_array().unwrap();
    assert_eq!(2, elements.len());
    assert_eq!(1, elements[1].to_array().unwrap()[0].to_int64().unwrap());
}

#[test]
fn test_resp3_blob_string() {
    let frame = Resp3Frame::BlobString {
        data: "blob".into(),
        attributes: None,
    };

    let reply = Reply::from(frame);
    assert_eq!(ReplyKind::BulkString, reply.kind());
    assert_eq!(Bytes::from_static(b"blob"), reply.to_bytes().unwrap());
}

#[test]
fn test_resp3_simple_error() {
    let frame = Resp3Frame::SimpleError {
        data: "TRYAGAIN later".into(),
        attributes: None,
    };

    let reply = Reply::from(frame);
    assert!(reply.as_error().unwrap().is_try_again());
}

#[test]
fn test_resp3_boolean() {
    let frame = Resp3Frame::Boolean {
        data: true,
        attributes: None,
    };

    assert!(Reply::from(frame).to_bool().unwrap());
}

#[test]
fn test_resp3_double_keeps_decimal_text() {
    let frame = Resp3Frame::Double {
        data: 2.5,
        attributes: None,
    };

    let reply = Reply::from(frame);
    assert_eq!(ReplyKind::Double, reply.kind());
    assert_eq!(2.5, reply.to_double().unwrap());
}

#[test]
fn test_resp3_big_number_becomes_bulk_string() {
    let frame = Resp3Frame::BigNumber {
        data: "123456789012345678901234567890".into(),
        attributes: None,
    };

    let reply = Reply::from(frame);
    assert_eq!(ReplyKind::BulkString, reply.kind());
    assert_eq!(
        Bytes::from_static(b"123456789012345678901234567890"),
        reply.to_bytes().unwrap()
    );
}

#[test]
fn test_resp3_map() {
    let mut data = FrameMap::new();
    data.insert(
        Resp3Frame::BlobString {
            data: "field".into(),
            attributes: None,
        },
        Resp3Frame::Number {
            data: 5,
            attributes: None,
        },
    );
    let frame = Resp3Frame::Map {
        data,
        attributes: None,
    };

    let reply = Reply::from(frame);
    assert_eq!(ReplyKind::Map, reply.kind());
    let map = reply.to_map().unwrap();
    assert_eq!(5, map[&Bytes::from_static(b"field")].to_int64().unwrap());
}

#[test]
fn test_resp3_push() {
    let frame = Resp3Frame::Push {
        data: vec![Resp3Frame::SimpleString {
            data: "message".into(),
            attributes: None,
        }],
        attributes: None,
    };

    assert_eq!(ReplyKind::Push, Reply::from(frame).kind());
}

#[test]
fn test_resp3_attributes_are_attached() {
    let mut attributes = FrameMap::new();
    attributes.insert(
        Resp3Frame::SimpleString {
            data: "ttl".into(),
            attributes: None,
        },
        Resp3Frame::Number {
            data: 120,
            attributes: None,
        },
    );
    let frame = Resp3Frame::BlobString {
        data: "value".into(),
        attributes: Some(attributes),
    };

    let reply = Reply::from(frame);
    assert_eq!(ReplyKind::BulkString, reply.kind());
    let attributes = reply.attributes().unwrap().to_map().unwrap();
    assert_eq!(120, attributes[&Bytes::from_static(b"ttl")].to_int64().unwrap());
}

#[test]
fn test_resp3_null() {
    assert!(Reply::from(Resp3Frame::Null).is_nil());
}

#[test]
fn test_conversion_never_marks_cache_origin() {
    let reply = Reply::from(Resp2Frame::BulkString("fresh".into()));

    assert!(!reply.is_cache_hit());
}
