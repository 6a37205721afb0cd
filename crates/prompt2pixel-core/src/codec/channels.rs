//! Channel decoder: hex digest string → ordered 8-bit channel sequence.

use crate::error::{CodecError, CodecResult};

/// Decode a hex string into one `u8` per two-character pair, in order.
///
/// A trailing unpaired character is dropped (the last incomplete pair is
/// never read). The input is validated independently of the digest engine,
/// since the decoder may receive untrusted input.
pub fn decode(hex: &str) -> CodecResult<Vec<u8>> {
    let bytes = hex.as_bytes();
    let mut channels = Vec::with_capacity(bytes.len() / 2);

    let mut i = 0;
    while i + 1 < bytes.len() {
        let hi = hex_value(bytes[i]);
        let lo = hex_value(bytes[i + 1]);
        match (hi, lo) {
            (Some(hi), Some(lo)) => channels.push(hi << 4 | lo),
            _ => {
                return Err(CodecError::InvalidDigest {
                    position: i,
                    pair: String::from_utf8_lossy(&bytes[i..i + 2]).into_owned(),
                })
            }
        }
        i += 2;
    }

    Ok(channels)
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
