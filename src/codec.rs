use serde::{Deserialize, Serialize};

use crate::error::OprfError;

/// How point bytes are packed into 16-bit transport code units.
///
/// Wide-mode units can land in the UTF-16 surrogate range, which a Rust
/// `String` cannot carry, so the codec traffics in `u16`s; a unit sequence
/// is rendered as text through [`code_to_string`] only when it is valid
/// UTF-16.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// One raw byte per code unit (extended-ASCII range).
    Narrow,
    /// Two raw bytes per code unit, packed little-endian.
    Wide,
}

impl Encoding {
    fn unit_size(self) -> usize {
        match self {
            Encoding::Narrow => 1,
            Encoding::Wide => 2,
        }
    }
}

/// Packs point bytes into code units.
///
/// Fails with `Alignment` when the byte length is not a multiple of the
/// encoding's unit size; nothing is zero-padded.
pub fn encode_point(point: &[u8], encoding: Encoding) -> Result<Vec<u16>, OprfError> {
    let size = encoding.unit_size();
    if point.len() % size != 0 {
        return Err(OprfError::Alignment(format!(
            "Point length {} does not align with the {}-byte encoding unit.",
            point.len(),
            size,
        )));
    }
    Ok(point
        .chunks_exact(size)
        .map(|unit| match encoding {
            Encoding::Narrow => u16::from(unit[0]),
            Encoding::Wide => u16::from(unit[0]) | (u16::from(unit[1]) << 8),
        })
        .collect())
}

/// Exact inverse of [`encode_point`]: splits each code unit back into one
/// or two bytes with the same mask/shift scheme used to pack it.
pub fn decode_point(code: &[u16], encoding: Encoding) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(code.len() * encoding.unit_size());
    for &unit in code {
        bytes.push((unit & 0xff) as u8);
        if encoding == Encoding::Wide {
            bytes.push((unit >> 8) as u8);
        }
    }
    bytes
}

/// Renders code units as text for string-oriented channels.
///
/// Narrow-mode output always succeeds; wide-mode output fails with
/// `InvalidInput` when a unit is an unpaired surrogate.
pub fn code_to_string(code: &[u16]) -> Result<String, OprfError> {
    String::from_utf16(code)
        .map_err(|_| OprfError::InvalidInput("Code units are not valid UTF-16 text.".to_string()))
}

pub fn string_to_code(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod codec_test;
