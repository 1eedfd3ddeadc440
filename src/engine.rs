// src/engine.rs
use anyhow::{bail, Result};

use crate::codec::{percent_decode, percent_decode_strict, percent_encode};
use crate::config::Config;

pub fn use_command(args: Vec<String>) -> Result<()> {
    if args.len() < 3 {
        bail!("Expected a command and an argument");
    }
    let command = &args[1];
    let input = &args[2];

    match command.as_str() {
        "encode" => {
            println!("{}", percent_encode(input.as_bytes()));
        }
        "decode" => {
            let config = Config::load()?;
            let decoded = if config.strict_decode {
                percent_decode_strict(input)?
            } else {
                percent_decode(input)
            };
            println!("{}", render_bytes(&decoded));
        }
        other => bail!("Unknown command: {}", other),
    }

    Ok(())
}

/// Decoded output can be arbitrary bytes. Render as text when it is valid
/// UTF-8, as hex otherwise.
fn render_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => hex::encode(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_utf8_text() {
        assert_eq!(render_bytes(b"plain text"), "plain text");
    }

    #[test]
    fn test_render_binary_as_hex() {
        assert_eq!(render_bytes(&[0xDE, 0xAD, 0xBE, 0xEF]), "deadbeef");
    }
}
