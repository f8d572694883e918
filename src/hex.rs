use crate::BloomError;

/// Decode a 40-character ASCII hex string into a 20-byte SHA-1 digest.
///
/// Mirrors the C original's `hibp_sha1_hex2bin`: bails out with
/// `ParamError` at the first non-hex character (rather than panicking),
/// and requires exactly 40 hex characters.
pub fn sha1_hex_to_bin(hex: &str) -> Result<[u8; 20], BloomError> {
    let hex = hex.as_bytes();
    if hex.len() != 40 {
        return Err(BloomError::ParamError);
    }

    let mut out = [0u8; 20];
    for (i, slot) in out.iter_mut().enumerate() {
        let hi = nibble(hex[2 * i])?;
        let lo = nibble(hex[2 * i + 1])?;
        *slot = (hi << 4) | lo;
    }
    Ok(out)
}

fn nibble(c: u8) -> Result<u8, BloomError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 0xa),
        b'A'..=b'F' => Ok(c - b'A' + 0xa),
        _ => Err(BloomError::ParamError),
    }
}
