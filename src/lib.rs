// lib.rs - Library interface for the percent-encoding codec

pub mod codec;
pub mod config;
pub mod engine;

// Re-export commonly used types for easier testing
pub use codec::*;
pub use config::Config;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_text() {
        let input = b"some spaced & querying/text?with=reserved#chars";
        let encoded = percent_encode(input);
        assert_eq!(percent_decode(&encoded), input);
    }

    #[test]
    fn test_round_trip_every_byte_value() {
        let all: Vec<u8> = (0u8..=255).collect();
        let encoded = percent_encode(&all);
        assert!(encoded.is_ascii());
        assert_eq!(percent_decode(&encoded), all);
        assert_eq!(percent_decode_strict(&encoded).unwrap(), all);
    }

    #[test]
    fn test_round_trip_utf8_input() {
        let input = "blåbærsyltetøy på brød";
        let encoded = percent_encode(input.as_bytes());
        assert!(encoded.is_ascii());
        assert_eq!(percent_decode(&encoded), input.as_bytes());
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(percent_encode(b"a b"), "a%20b");
        assert_eq!(percent_decode("a%20b"), b"a b");
        assert_eq!(percent_encode(b"hello-world_.~"), "hello-world_.~");
    }

    #[test]
    fn test_encode_never_emits_reserved_literally() {
        let encoded = percent_encode(b":/?#[]@!$&'()*+,;= ");
        assert!(encoded.bytes().all(|b| {
            b == b'%' || b.is_ascii_alphanumeric()
        }));
    }

    #[test]
    fn test_strict_and_lenient_agree_on_well_formed_input() {
        let inputs = ["", "abc", "a%20b", "%00%FF", "%2f%2F"];
        for input in inputs {
            assert_eq!(percent_decode_strict(input).unwrap(), percent_decode(input));
        }
    }
}
