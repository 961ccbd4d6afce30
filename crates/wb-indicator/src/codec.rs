// File: crates/wb-indicator/src/codec.rs
// Summary: Text codec for the tabular file (windows-1252 by default).

use std::borrow::Cow;
use std::fmt;

use encoding_rs::Encoding;

use crate::error::CodecError;

/// A byte <-> text encoding selected by WHATWG label.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextCodec {
    encoding: &'static Encoding,
}

impl TextCodec {
    pub fn windows_1252() -> Self {
        Self { encoding: encoding_rs::WINDOWS_1252 }
    }

    pub fn utf_8() -> Self {
        Self { encoding: encoding_rs::UTF_8 }
    }

    /// Look up a codec by label (`windows-1252`, `cp1252`, `latin1`, `utf-8`, ...).
    pub fn for_label(label: &str) -> Result<Self, CodecError> {
        Encoding::for_label(label.trim().as_bytes())
            .map(|encoding| Self { encoding })
            .ok_or_else(|| CodecError::UnknownLabel(label.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode bytes, stripping a BOM of this encoding. Malformed sequences become U+FFFD.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        let (text, _had_errors) = self.encoding.decode_with_bom_removal(bytes);
        text
    }

    /// Encode text, failing on the first character the encoding cannot represent.
    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>, CodecError> {
        let (bytes, _, had_unmappable) = self.encoding.encode(text);
        if !had_unmappable {
            return Ok(bytes);
        }
        let mut buf = [0u8; 4];
        let character = text
            .chars()
            .find(|c| self.encoding.encode(c.encode_utf8(&mut buf)).2)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Err(CodecError::Unmappable { encoding: self.name(), character })
    }
}

impl Default for TextCodec {
    fn default() -> Self { Self::windows_1252() }
}

impl fmt::Debug for TextCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextCodec").field(&self.name()).finish()
    }
}

impl fmt::Display for TextCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
