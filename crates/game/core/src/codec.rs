//! Decoder for raw on-chain tile location keys.
//!
//! A location key is an ordered list of encoded scalars. Index 0 carries the
//! node-type tag and is ignored here; indices 1 through 3 carry `q`, `r`,
//! `s` as 16-bit two's-complement values. Scalars arrive as `0x`-prefixed
//! hex strings from the query layer, but plain decimal is accepted too.
use thiserror::Error;

use crate::tile::TileCoord;

/// Failures decoding a raw location key.
///
/// Local and recoverable: callers treat the owning entity as "location
/// unknown" and exclude it from matching rather than propagating.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedLocationKey {
    #[error("location key has {len} elements, need at least 4")]
    TooShort { len: usize },

    #[error("location key element {index} is not an integer scalar: {raw:?}")]
    UnparseableKey { index: usize, raw: String },

    #[error("location key element {index} does not fit in 16 bits: {raw:?}")]
    OutOfRange { index: usize, raw: String },
}

/// Decode positions 1 through 3 of a raw location key into a coordinate.
pub fn decode_tile(keys: &[impl AsRef<str>]) -> Result<TileCoord, MalformedLocationKey> {
    if keys.len() < 4 {
        return Err(MalformedLocationKey::TooShort { len: keys.len() });
    }
    let q = decode_i16(1, keys[1].as_ref())?;
    let r = decode_i16(2, keys[2].as_ref())?;
    let s = decode_i16(3, keys[3].as_ref())?;
    Ok(TileCoord {
        q: q as i32,
        r: r as i32,
        s: s as i32,
    })
}

/// Encode a coordinate back into key form with the given node-type tag.
///
/// Inverse of [`decode_tile`] over the 16-bit range; used for fixtures and
/// round-trip checks.
pub fn encode_tile(coord: TileCoord, tag: u16) -> Vec<String> {
    vec![
        format!("{tag:#06x}"),
        encode_i16(coord.q as i16),
        encode_i16(coord.r as i16),
        encode_i16(coord.s as i16),
    ]
}

fn decode_i16(index: usize, raw: &str) -> Result<i16, MalformedLocationKey> {
    let trimmed = raw.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => trimmed.parse::<u32>(),
    };
    let wide = parsed.map_err(|_| MalformedLocationKey::UnparseableKey {
        index,
        raw: raw.to_owned(),
    })?;
    if wide > u16::MAX as u32 {
        return Err(MalformedLocationKey::OutOfRange {
            index,
            raw: raw.to_owned(),
        });
    }
    // Reinterpret the unsigned wire value as two's complement.
    Ok(wide as u16 as i16)
}

fn encode_i16(value: i16) -> String {
    format!("{:#06x}", value as u16)
}
