use log::warn;

use super::error::DecodeError;

/// Decodes a percent-encoded string into the original bytes, best effort.
///
/// A `%` must be followed by exactly two hex digits (either case); their
/// value becomes one output byte. Any other character is copied through
/// unchanged as a single byte. `+` has no special meaning here, only the
/// `%XX` escape form is understood.
///
/// Malformed input never fails this function. On a bad escape (`%` cut off
/// by the end of input, or followed by non-hex characters) decoding stops
/// and the bytes decoded so far are returned.
pub fn percent_decode(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut idx = 0;

    while idx < bytes.len() {
        if bytes[idx] != b'%' {
            decoded.push(bytes[idx]);
            idx += 1;
            continue;
        }

        match unescape_at(bytes, idx) {
            Ok(byte) => {
                decoded.push(byte);
                idx += 3;
            }
            Err(err) => {
                // Truncation policy: keep the well-formed prefix, drop the rest
                warn!("Stopping decode at offset {}: {}", idx, err);
                break;
            }
        }
    }

    decoded
}

/// Like [`percent_decode`], but the first malformed escape fails the whole
/// call instead of truncating. No partial output on error.
pub fn percent_decode_strict(input: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut idx = 0;

    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            decoded.push(unescape_at(bytes, idx)?);
            idx += 3;
        } else {
            decoded.push(bytes[idx]);
            idx += 1;
        }
    }

    Ok(decoded)
}

/// Reads the `%XX` escape starting at `idx` (which must point at the `%`)
/// and returns the byte it stands for.
fn unescape_at(bytes: &[u8], idx: usize) -> Result<u8, DecodeError> {
    if idx + 3 > bytes.len() {
        return Err(DecodeError::UnexpectedEnd);
    }

    match (hex_value(bytes[idx + 1]), hex_value(bytes[idx + 2])) {
        (Some(hi), Some(lo)) => Ok(hi << 4 | lo),
        _ => Err(DecodeError::InvalidHex(
            String::from_utf8_lossy(&bytes[idx + 1..idx + 3]).into_owned(),
        )),
    }
}

/// Value of a single hex digit, either case.
fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
