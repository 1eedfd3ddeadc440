use thiserror::Error;

/// Failure raised by [`percent_decode_strict`](super::percent_decode_strict).
///
/// The RFC only defines what a percent-encoded string is, not what decoding
/// a malformed one means, so the strict decoder reports the two ways an
/// escape can go wrong.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unexpected end of input inside '%' escape")]
    UnexpectedEnd,

    #[error("Invalid hex digits {0:?} after '%'")]
    InvalidHex(String),
}
