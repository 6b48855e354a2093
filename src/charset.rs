//! Translation of host text into the bytes stored in the symbol.

use encoding_rs::WINDOWS_1252;

use crate::error::CharsetError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Charset {
    /// UTF-8 bytes as-is.
    #[default]
    Utf8,
    /// Single-byte Windows-1252, a superset of the ISO-8859-1 default that QR
    /// readers assume for byte mode.
    Windows1252,
}

impl Charset {
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Windows1252 => WINDOWS_1252.name(),
        }
    }

    pub fn translate(self, text: &str) -> Result<Vec<u8>, CharsetError> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Windows1252 => {
                let (encoded, _, had_errors) = WINDOWS_1252.encode(text);
                if had_errors {
                    return Err(CharsetError::Unmappable {
                        charset: WINDOWS_1252.name(),
                    });
                }
                Ok(encoded.into_owned())
            }
        }
    }
}
