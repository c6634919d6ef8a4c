use crate::reply::{ErrorReply, Reply};
use crate::result::{CommandError, CommandResult, TransportError};
use alloc::string::ToString;
use alloc::vec;
use bytes::Bytes;

#[test]
fn test_accessors_delegate_on_success() {
    assert_eq!(
        7,
        CommandResult::from_reply(Reply::integer(7)).to_int64().unwrap()
    );
    assert!(CommandResult::from_reply(Reply::boolean(true)).to_bool().unwrap());
    assert_eq!(
        Bytes::from_static(b"hello"),
        CommandResult::from_reply(Reply::bulk_string("hello")).to_bytes().unwrap()
    );
    assert_eq!(
        "hello",
        CommandResult::from_reply(Reply::bulk_string("hello")).as_string().unwrap()
    );
    assert_eq!(
        1.5,
        CommandResult::from_reply(Reply::double("1.5")).to_double().unwrap()
    );
    assert_eq!(
        12,
        CommandResult::from_reply(Reply::bulk_string("12")).as_int64().unwrap()
    );
}

#[test]
fn test_transport_error_short_circuits_every_accessor() {
    let result = CommandResult::from_transport_error(TransportError::Timeout);

    // The placeholder reply must never be consulted
    assert_eq!(
        CommandError::Transport(TransportError::Timeout),
        result.to_int64().unwrap_err()
    );
    assert_eq!(
        CommandError::Transport(TransportError::Timeout),
        result.to_bytes().unwrap_err()
    );
    assert_eq!(
        CommandError::Transport(TransportError::Timeout),
        result.to_array().unwrap_err()
    );
    assert_eq!(
        CommandError::Transport(TransportError::Timeout),
        result.to_map().unwrap_err()
    );
}

#[test]
fn test_transport_error_masks_error_reply() {
    let result = CommandResult::from_transport_error(TransportError::TcpError);

    assert_eq!(None, result.error_reply());
    assert_eq!(Some(&TransportError::TcpError), result.transport_error());
}

#[test]
fn test_nil_reply_error() {
    let result = CommandResult::from_reply(Reply::nil());

    let error = result.error().unwrap();
    assert!(error.is_nil());
    assert_eq!("redis nil reply", error.to_string());
    assert!(!result.is_cache_hit());
}

#[test]
fn test_error_reply_distinguished_from_transport() {
    let result = CommandResult::from_reply(Reply::error("ERR boom"));

    assert_eq!(
        Some(ErrorReply::Message(Bytes::from_static(b"ERR boom"))),
        result.error_reply()
    );
    assert_eq!(None, result.transport_error());
}

#[test]
fn test_no_error_on_plain_reply() {
    let result = CommandResult::from_reply(Reply::simple_string("OK"));

    assert_eq!(None, result.error());
    assert_eq!(None, result.error_reply());
    assert_eq!(None, result.transport_error());
}

#[test]
fn test_to_reply_extracts_value() {
    let reply = Reply::array(vec![Reply::integer(1)]);

    let extracted = CommandResult::from_reply(reply.clone()).to_reply().unwrap();
    assert_eq!(reply, extracted);
}

#[test]
fn test_to_reply_surfaces_transport_error() {
    let result = CommandResult::from_transport_error(TransportError::ProtocolViolation);

    assert_eq!(
        CommandError::Transport(TransportError::ProtocolViolation),
        result.to_reply().unwrap_err()
    );
}

#[test]
fn test_collection_accessors_delegate() {
    let result = CommandResult::from_reply(Reply::array(vec![
        Reply::bulk_string("k"),
        Reply::bulk_string("v"),
    ]));

    assert_eq!(2, result.to_array().unwrap().len());
    assert_eq!(
        Bytes::from_static(b"v"),
        result.as_bytes_map().unwrap()[&Bytes::from_static(b"k")]
    );
    assert_eq!(
        Bytes::from_static(b"v"),
        result.as_map().unwrap()[&Bytes::from_static(b"k")].to_bytes().unwrap()
    );
    assert_eq!(
        vec![Bytes::from_static(b"k"), Bytes::from_static(b"v")],
        result.as_bytes_vec().unwrap()
    );
}

#[test]
fn test_is_cache_hit_reflects_marked_reply() {
    let mut reply = Reply::bulk_string("cached");
    reply.mark_cache_hit();

    assert!(CommandResult::from_reply(reply).is_cache_hit());
}

#[test]
fn test_errors_are_repeatable() {
    let result = CommandResult::from_reply(Reply::nil());

    // Conversions are read-only, checking twice yields the same error
    assert!(result.to_int64().unwrap_err().is_nil());
    assert!(result.to_bool().unwrap_err().is_nil());
}
