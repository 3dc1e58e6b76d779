//! # Serialization encodings
//!
//! An [`Llsd`] value serializes to one of four on-disk encodings.
//! Encoding is a pure function of `(value, encoding, pretty)`: the
//! writers keep no state across calls, so identical inputs produce
//! byte-identical output.
//!
//! The below pseudocode depicts the serialized representations. The
//! binary, notation, and xml encodings start with a fixed signature
//! line; json has none.
//!
//! ```text
//! binary (signature "<? LLSD/Binary ?>\n"):
//!     undef           '!'
//!     boolean         '1' | '0'
//!     integer         'i' + i32 (big-endian)
//!     real            'r' + f64 bit pattern (big-endian)
//!     uuid            'u' + [u8; 16]
//!     string          's' + u32 len (big-endian) + bytes
//!     date            'd' + f64 epoch seconds (big-endian)
//!     uri             'l' + u32 len (big-endian) + bytes
//!     binary          'b' + u32 len (big-endian) + bytes
//!     array           '[' + u32 count (big-endian) + members + ']'
//!     map             '{' + u32 count (big-endian)
//!                         + (string key + value)* + '}'
//!
//! notation (signature "<?llsd/notation?>\n"):
//!     undef           !
//!     boolean         1 | 0
//!     integer         i123
//!     real            r1.000000
//!     uuid            u01020304-0506-0708-0900-010203040506
//!     string          s(12)"Hello World!"
//!     date            d"1970-01-01T00:00:01.000Z"
//!     uri             l"http://example.com"
//!     binary          b64"AQID..."
//!     array           [ members, comma-separated ]
//!     map             { key:value pairs, keys via the string rule }
//!
//! xml (prolog + document wrapped in <llsd></llsd>):
//!     element per kind (<undef />, <boolean>, <integer>, ...);
//!     default payloads collapse to empty elements; binary payloads
//!     are base64 inside <binary encoding="base64">.
//!
//! json:
//!     null, true/false, bare numerals, quoted uuid/date,
//!     "||uri||<uri>", "||b64||<base64>", [ ... ], { "key":value }.
//! ```
//!
//! In pretty mode the textual encodings indent nested members by four
//! spaces, and a container goes multi-line only when it holds more
//! than one entry. Compact mode emits no decorative whitespace.

mod binary;
mod json;
mod notation;
mod ser_test;
mod xml;

pub use binary::*;
pub use json::*;
pub use notation::*;
pub use xml::*;

use crate::types::Llsd;
use anyhow::Result;
use derive_more::Deref;
use std::io::Write;

/// Count of bytes the serializer put into the sink.
#[derive(Deref, Clone, Copy, Debug)]
pub struct WriteLen(pub(crate) usize);

/// The closed set of supported encodings.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Encoding {
    Binary,
    Xml,
    Notation,
    Json,
}

/// Serializes `llsd` into `w` using the chosen encoding.
///
/// Bytes are appended at the sink's current position; the sink is
/// neither seeked nor closed. Write failures propagate to the caller,
/// who owns the sink's lifetime and cleanup.
pub fn ser_to_sink<W: Write>(
    llsd: &Llsd,
    w: &mut W,
    encoding: Encoding,
    pretty: bool,
) -> Result<WriteLen> {
    match encoding {
        Encoding::Binary => BinaryWriter::new(w).ser(llsd),
        Encoding::Xml => XmlWriter::new(w, pretty).ser(llsd),
        Encoding::Notation => NotationWriter::new(w, pretty).ser(llsd),
        Encoding::Json => JsonWriter::new(w, pretty).ser(llsd),
    }
}
