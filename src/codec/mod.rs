pub mod decode;
pub mod encode;
pub mod error;

pub use decode::{percent_decode, percent_decode_strict};   // re-export
pub use encode::percent_encode;   // re-export
pub use error::DecodeError;   // re-export
