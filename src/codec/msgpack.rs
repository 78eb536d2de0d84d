//! MsgPack codec using `rmp-serde`.
//!
//! The structured-binary encoding for this protocol: request bodies, the
//! response package and its nested sub-command bodies all pass through here.
//!
//! Encoding uses `to_vec_named` so structs travel as maps keyed by field
//! name. The command-routing service matches fields by name, and absent
//! optional sections (a listing entry without its folder detail, say) must
//! decode as `None` rather than shifting positional fields.

use crate::error::Result;

/// MessagePack codec for structured data.
///
/// Structs serialize as maps (with field names) rather than arrays
/// (positional), so sub-command body shapes can grow without breaking
/// older peers.
pub struct MsgPackCodec;

impl MsgPackCodec {
    /// Encode a value to MsgPack bytes in named-field format.
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be serialized.
    #[inline]
    pub fn encode<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(value)?)
    }

    /// Decode MsgPack bytes to a value.
    ///
    /// # Errors
    ///
    /// Returns error if the bytes cannot be deserialized to type T.
    #[inline]
    pub fn decode<T: serde::de::DeserializeOwned>(
        bytes: &[u8],
    ) -> std::result::Result<T, rmp_serde::decode::Error> {
        rmp_serde::from_slice(bytes)
    }
}
