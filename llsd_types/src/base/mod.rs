//! Binary-to-text codecs used by the textual encodings.

mod base85;
mod test;

pub use base85::*;

use anyhow::Result;
use base64::engine::general_purpose;
use base64::Engine;

/// Uppercase hex.
pub fn encode16(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Accepts either case.
pub fn decode16(text: &str) -> Result<Vec<u8>> {
    let data = hex::decode(text)?;
    Ok(data)
}

pub fn encode64(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

pub fn decode64(text: &str) -> Result<Vec<u8>> {
    let data = general_purpose::STANDARD.decode(text)?;
    Ok(data)
}
