//! Reply value and its conversion contract.
//!
//! Shape mismatches fall into two classes which are deliberately kept apart:
//! * *structural impossibility*: the caller used an accessor the kind of this
//!   reply can never satisfy (e.g. [to_int64](Reply::to_int64) on an array).
//!   That is a bug in the caller and panics with the kind and accessor name.
//! * *degraded-value access*: the reply is nil or an error. That is ordinary
//!   data every caller must be prepared to receive and is returned as
//!   [CommandError::Reply].
//!
//! Parse failures (malformed integer/double text) are a third, recoverable
//! class and are returned as [CommandError::ParseInt] /
//! [CommandError::ParseFloat].

use crate::reply::error::ErrorReply;
use crate::result::error::CommandError;
use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use bytes::Bytes;
use core::fmt;
use core::mem;
use core::str;

/// Discriminant tag of a [Reply].
///
/// The kind fully determines which payload a reply carries and which
/// accessors are valid for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// Nil reply (`_` in RESP3, null bulk/array in RESP2)
    Nil,
    /// Simple string (`+`)
    SimpleString,
    /// Bulk string (`$`), may contain embedded null bytes. Big numbers and
    /// verbatim strings are represented as bulk strings as well.
    BulkString,
    /// 64-bit signed integer (`:`)
    Integer,
    /// Boolean (`#`), RESP3 only
    Boolean,
    /// Double (`,`), RESP3 only. Stored as decimal text, parsed on access.
    Double,
    /// Error reply (`-` or `!`)
    Error,
    /// Array (`*`)
    Array,
    /// Set (`~`), RESP3 only. Represented as an ordered sequence.
    Set,
    /// Map (`%`), RESP3 only
    Map,
    /// Push message (`>`), RESP3 only. Structurally identical to an array.
    Push,
}

impl fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReplyKind::Nil => "nil",
            ReplyKind::SimpleString => "simple string",
            ReplyKind::BulkString => "bulk string",
            ReplyKind::Integer => "integer",
            ReplyKind::Boolean => "boolean",
            ReplyKind::Double => "double",
            ReplyKind::Error => "error",
            ReplyKind::Array => "array",
            ReplyKind::Set => "set",
            ReplyKind::Map => "map",
            ReplyKind::Push => "push",
        };
        f.write_str(name)
    }
}

/// Payload storage. The active variant is fixed at construction; each public
/// constructor establishes the kind-to-payload invariant exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplyData {
    Nil,
    SimpleString(Bytes),
    BulkString(Bytes),
    Integer(i64),
    Boolean(bool),
    /// Decimal text exactly as sent by the server.
    Double(Bytes),
    Error(Bytes),
    Array(Vec<Reply>),
    Set(Vec<Reply>),
    /// Alternating key/value sequence, always of even length.
    Map(Vec<Reply>),
    Push(Vec<Reply>),
}

/// One Redis reply.
///
/// Immutable after construction (the cache-origin marker is the single
/// exception, written once by the cache collaborator before the reply is
/// shared). All accessors are read-only and repeatable, so a reply may be
/// read from multiple threads without synchronization.
///
/// ```
/// use redis_reply::reply::{Reply, ReplyKind};
///
/// let reply = Reply::integer(42);
/// assert_eq!(ReplyKind::Integer, reply.kind());
/// assert_eq!(42, reply.to_int64().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    data: ReplyData,
    /// Out-of-band attribute map attached by the server. Metadata only,
    /// never consulted by kind-based dispatch.
    attributes: Option<Box<Reply>>,
    from_cache: bool,
}

impl Reply {
    /// Creates a nil reply.
    pub fn nil() -> Self {
        Self::from_data(ReplyData::Nil)
    }

    /// Creates a simple string reply.
    pub fn simple_string<T>(data: T) -> Self
    where
        Bytes: From<T>,
    {
        Self::from_data(ReplyData::SimpleString(data.into()))
    }

    /// Creates a bulk string reply. Binary-safe.
    pub fn bulk_string<T>(data: T) -> Self
    where
        Bytes: From<T>,
    {
        Self::from_data(ReplyData::BulkString(data.into()))
    }

    /// Creates an integer reply.
    pub fn integer(value: i64) -> Self {
        Self::from_data(ReplyData::Integer(value))
    }

    /// Creates a boolean reply.
    pub fn boolean(value: bool) -> Self {
        Self::from_data(ReplyData::Boolean(value))
    }

    /// Creates a double reply from its decimal text.
    ///
    /// The text is kept verbatim and parsed lazily by
    /// [to_double](Reply::to_double), preserving the exact server-provided
    /// representation for passthrough use.
    pub fn double<T>(text: T) -> Self
    where
        Bytes: From<T>,
    {
        Self::from_data(ReplyData::Double(text.into()))
    }

    /// Creates an error reply carrying the verbatim server message.
    pub fn error<T>(message: T) -> Self
    where
        Bytes: From<T>,
    {
        Self::from_data(ReplyData::Error(message.into()))
    }

    /// Creates an array reply.
    pub fn array(elements: Vec<Reply>) -> Self {
        Self::from_data(ReplyData::Array(elements))
    }

    /// Creates a set reply. Element order is preserved as given.
    pub fn set(elements: Vec<Reply>) -> Self {
        Self::from_data(ReplyData::Set(elements))
    }

    /// Creates a map reply from key/value pairs.
    ///
    /// Taking pairs (instead of a flat sequence) makes an odd-length map
    /// unrepresentable.
    pub fn map(pairs: Vec<(Reply, Reply)>) -> Self {
        let mut elements = Vec::with_capacity(pairs.len() * 2);
        for (key, value) in pairs {
            elements.push(key);
            elements.push(value);
        }
        Self::from_data(ReplyData::Map(elements))
    }

    /// Creates a push message reply.
    pub fn push(elements: Vec<Reply>) -> Self {
        Self::from_data(ReplyData::Push(elements))
    }

    fn from_data(data: ReplyData) -> Self {
        Reply {
            data,
            attributes: None,
            from_cache: false,
        }
    }

    /// Attaches an out-of-band attribute map (usually a map reply) to this
    /// reply. Attributes are metadata and do not affect any accessor.
    pub fn with_attributes(mut self, attributes: Reply) -> Self {
        self.attributes = Some(Box::new(attributes));
        self
    }

    /// The attribute map attached by the server, if any.
    pub fn attributes(&self) -> Option<&Reply> {
        self.attributes.as_deref()
    }

    /// The kind tag of this reply.
    pub fn kind(&self) -> ReplyKind {
        match &self.data {
            ReplyData::Nil => ReplyKind::Nil,
            ReplyData::SimpleString(_) => ReplyKind::SimpleString,
            ReplyData::BulkString(_) => ReplyKind::BulkString,
            ReplyData::Integer(_) => ReplyKind::Integer,
            ReplyData::Boolean(_) => ReplyKind::Boolean,
            ReplyData::Double(_) => ReplyKind::Double,
            ReplyData::Error(_) => ReplyKind::Error,
            ReplyData::Array(_) => ReplyKind::Array,
            ReplyData::Set(_) => ReplyKind::Set,
            ReplyData::Map(_) => ReplyKind::Map,
            ReplyData::Push(_) => ReplyKind::Push,
        }
    }

    /// True if this is a nil reply.
    pub fn is_nil(&self) -> bool {
        matches!(self.data, ReplyData::Nil)
    }

    /// Views an error or nil reply as a typed error.
    ///
    /// This is the shared error check every typed accessor routes through.
    /// The returned [ErrorReply] shares the message storage with this reply
    /// (shallow [Bytes] clone), no payload is copied.
    pub fn as_error(&self) -> Option<ErrorReply> {
        match &self.data {
            ReplyData::Nil => Some(ErrorReply::Nil),
            ReplyData::Error(message) => Some(ErrorReply::Message(message.clone())),
            _ => None,
        }
    }

    /// The exact bytes of a string-shaped reply.
    ///
    /// Double replies yield their decimal text and boolean replies yield
    /// empty bytes, matching the lenient string view Redis clients
    /// historically expose for scalar replies.
    ///
    /// # Panics
    ///
    /// Panics if the reply is an integer or carries nested elements.
    pub fn to_bytes(&self) -> Result<Bytes, CommandError> {
        match &self.data {
            ReplyData::SimpleString(data) | ReplyData::BulkString(data) | ReplyData::Double(data) => {
                Ok(data.clone())
            }
            ReplyData::Boolean(_) => Ok(Bytes::new()),
            ReplyData::Nil => Err(CommandError::Reply(ErrorReply::Nil)),
            ReplyData::Error(message) => Err(CommandError::Reply(ErrorReply::Message(message.clone()))),
            ReplyData::Integer(_)
            | ReplyData::Array(_)
            | ReplyData::Set(_)
            | ReplyData::Map(_)
            | ReplyData::Push(_) => self.wrong_kind("to_bytes"),
        }
    }

    /// Like [to_bytes](Reply::to_bytes), converted to an owned `String`.
    /// Invalid UTF-8 is a recoverable [CommandError::InvalidUtf8].
    ///
    /// # Panics
    ///
    /// Same precondition as [to_bytes](Reply::to_bytes).
    pub fn as_string(&self) -> Result<String, CommandError> {
        let bytes = self.to_bytes()?;
        match str::from_utf8(&bytes) {
            Ok(text) => Ok(text.to_owned()),
            Err(error) => Err(CommandError::InvalidUtf8(error)),
        }
    }

    /// Reads a string-shaped reply and parses it as a decimal integer.
    ///
    /// Parse failure is recoverable and distinct from a shape mismatch.
    ///
    /// # Panics
    ///
    /// Same precondition as [to_bytes](Reply::to_bytes).
    pub fn as_int64(&self) -> Result<i64, CommandError> {
        let bytes = self.to_bytes()?;
        let text = str::from_utf8(&bytes).map_err(CommandError::InvalidUtf8)?;
        text.parse().map_err(CommandError::ParseInt)
    }

    /// Reads a string-shaped reply and parses it as a decimal double.
    ///
    /// # Panics
    ///
    /// Same precondition as [to_bytes](Reply::to_bytes).
    pub fn as_double(&self) -> Result<f64, CommandError> {
        let bytes = self.to_bytes()?;
        let text = str::from_utf8(&bytes).map_err(CommandError::InvalidUtf8)?;
        text.parse().map_err(CommandError::ParseFloat)
    }

    /// The value of an integer reply.
    ///
    /// # Panics
    ///
    /// Panics if the reply is neither an integer nor nil/error.
    pub fn to_int64(&self) -> Result<i64, CommandError> {
        if let ReplyData::Integer(value) = self.data {
            return Ok(value);
        }
        match self.as_error() {
            Some(error) => Err(CommandError::Reply(error)),
            None => self.wrong_kind("to_int64"),
        }
    }

    /// The value of a boolean reply.
    ///
    /// # Panics
    ///
    /// Panics if the reply is neither a boolean nor nil/error.
    pub fn to_bool(&self) -> Result<bool, CommandError> {
        if let ReplyData::Boolean(value) = self.data {
            return Ok(value);
        }
        match self.as_error() {
            Some(error) => Err(CommandError::Reply(error)),
            None => self.wrong_kind("to_bool"),
        }
    }

    /// The value of a double reply, parsed from its decimal text.
    ///
    /// # Panics
    ///
    /// Panics if the reply is neither a double nor nil/error.
    pub fn to_double(&self) -> Result<f64, CommandError> {
        if let ReplyData::Double(text) = &self.data {
            let text = str::from_utf8(text).map_err(CommandError::InvalidUtf8)?;
            return text.parse().map_err(CommandError::ParseFloat);
        }
        match self.as_error() {
            Some(error) => Err(CommandError::Reply(error)),
            None => self.wrong_kind("to_double"),
        }
    }

    /// The elements of an array or set reply, by reference.
    ///
    /// # Panics
    ///
    /// Panics if the reply is neither an array/set nor nil/error.
    pub fn to_array(&self) -> Result<&[Reply], CommandError> {
        match &self.data {
            ReplyData::Array(elements) | ReplyData::Set(elements) => Ok(elements),
            _ => match self.as_error() {
                Some(error) => Err(CommandError::Reply(error)),
                None => self.wrong_kind("to_array"),
            },
        }
    }

    /// Builds a key-to-reply mapping from a map reply.
    ///
    /// Duplicate keys resolve to the last occurrence in pair order.
    ///
    /// # Panics
    ///
    /// Panics if the reply is neither a map nor nil/error, or if a map key
    /// is not string-shaped.
    pub fn to_map(&self) -> Result<BTreeMap<Bytes, Reply>, CommandError> {
        if let ReplyData::Map(elements) = &self.data {
            return Ok(Self::pair_map(elements));
        }
        match self.as_error() {
            Some(error) => Err(CommandError::Reply(error)),
            None => self.wrong_kind("to_map"),
        }
    }

    /// Like [to_map](Reply::to_map), but also accepts arrays and sets.
    ///
    /// Useful under RESP2, where the server answers with a flat array
    /// standing in for a map.
    ///
    /// # Panics
    ///
    /// Panics if the reply is neither a map/array/set nor nil/error, or if
    /// a key is not string-shaped.
    pub fn as_map(&self) -> Result<BTreeMap<Bytes, Reply>, CommandError> {
        match &self.data {
            ReplyData::Map(elements) | ReplyData::Array(elements) | ReplyData::Set(elements) => {
                Ok(Self::pair_map(elements))
            }
            _ => match self.as_error() {
                Some(error) => Err(CommandError::Reply(error)),
                None => self.wrong_kind("as_map"),
            },
        }
    }

    /// Projects the elements of an array or set reply to their text.
    ///
    /// This is an intentionally lossy projection: string-shaped elements are
    /// always kept (an empty bulk string stays in), any other element is
    /// kept only if its text is non-empty. Nil and boolean elements are
    /// therefore dropped silently, order of the rest is preserved.
    ///
    /// # Panics
    ///
    /// Panics if the reply is neither an array/set nor nil/error.
    pub fn as_bytes_vec(&self) -> Result<Vec<Bytes>, CommandError> {
        let elements = self.to_array()?;
        let mut items = Vec::with_capacity(elements.len());
        for element in elements {
            match element.text_bytes() {
                Some(text) if element.is_text_shaped() || !text.is_empty() => items.push(text),
                _ => {}
            }
        }
        Ok(items)
    }

    /// Projects a map, array or set reply to a text-to-text mapping.
    ///
    /// Pairs with a non-string-shaped key are skipped, values follow the
    /// same lossy filter as [as_bytes_vec](Reply::as_bytes_vec). A trailing
    /// unpaired element is ignored.
    ///
    /// # Panics
    ///
    /// Panics if the reply is not a map/array/set (nil and error replies are
    /// returned as errors).
    pub fn as_bytes_map(&self) -> Result<BTreeMap<Bytes, Bytes>, CommandError> {
        if let Some(error) = self.as_error() {
            return Err(CommandError::Reply(error));
        }
        match &self.data {
            ReplyData::Map(elements) | ReplyData::Array(elements) | ReplyData::Set(elements) => {
                let mut map = BTreeMap::new();
                for pair in elements.chunks_exact(2) {
                    let key = match &pair[0].data {
                        ReplyData::SimpleString(key) | ReplyData::BulkString(key) => key.clone(),
                        _ => continue,
                    };
                    match pair[1].text_bytes() {
                        Some(text) if pair[1].is_text_shaped() || !text.is_empty() => {
                            map.insert(key, text);
                        }
                        _ => {}
                    }
                }
                Ok(map)
            }
            _ => self.wrong_kind("as_bytes_map"),
        }
    }

    /// True if this reply was served from a client-side cache rather than
    /// freshly fetched.
    pub fn is_cache_hit(&self) -> bool {
        self.from_cache
    }

    /// Marks this reply as served from a client-side cache.
    ///
    /// Only the cache collaborator calls this, exactly once before the reply
    /// is handed to any reader. Idempotent, never cleared.
    pub fn mark_cache_hit(&mut self) {
        self.from_cache = true;
    }

    /// Estimates the memory footprint of this reply: base struct size plus
    /// text length plus the recursively summed footprint of every element.
    ///
    /// Used by the cache collaborator for its own resource accounting.
    /// O(total element count); there is no structural sharing between
    /// elements, so a plain recursive sum does not double-count.
    pub fn approximate_size(&self) -> usize {
        let mut size = mem::size_of::<Reply>();
        size += self.text().len();
        if let Some(elements) = self.elements() {
            for element in elements {
                size += element.approximate_size();
            }
        }
        size
    }

    /// Text payload of this reply; empty for kinds without one.
    fn text(&self) -> &[u8] {
        match &self.data {
            ReplyData::SimpleString(data)
            | ReplyData::BulkString(data)
            | ReplyData::Double(data)
            | ReplyData::Error(data) => data,
            _ => &[],
        }
    }

    /// Shallow clone of the text payload, `None` for kinds without one.
    fn text_bytes(&self) -> Option<Bytes> {
        match &self.data {
            ReplyData::SimpleString(data)
            | ReplyData::BulkString(data)
            | ReplyData::Double(data)
            | ReplyData::Error(data) => Some(data.clone()),
            _ => None,
        }
    }

    fn is_text_shaped(&self) -> bool {
        matches!(
            self.data,
            ReplyData::SimpleString(_) | ReplyData::BulkString(_)
        )
    }

    fn elements(&self) -> Option<&[Reply]> {
        match &self.data {
            ReplyData::Array(elements)
            | ReplyData::Set(elements)
            | ReplyData::Map(elements)
            | ReplyData::Push(elements) => Some(elements),
            _ => None,
        }
    }

    fn pair_map(elements: &[Reply]) -> BTreeMap<Bytes, Reply> {
        let mut map = BTreeMap::new();
        for pair in elements.chunks_exact(2) {
            match &pair[0].data {
                ReplyData::SimpleString(key) | ReplyData::BulkString(key) => {
                    map.insert(key.clone(), pair[1].clone());
                }
                _ => panic!(
                    "redis reply of kind {} is not supported as a map key",
                    pair[0].kind()
                ),
            }
        }
        map
    }

    fn wrong_kind(&self, accessor: &str) -> ! {
        panic!(
            "redis reply of kind {} cannot be read with {}()",
            self.kind(),
            accessor
        )
    }
}
