//! Text encodings accepted by [`ReaderSource`](super::ReaderSource).
//!
//! Bytes are decoded incrementally: a multi-byte sequence may be split across
//! two reads and is completed by the next chunk.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Character encoding of a byte source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Encoding {
    /// UTF-8
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// 7-bit US-ASCII
    #[serde(rename = "us-ascii", alias = "ascii")]
    Ascii,
    /// ISO-8859-1
    #[serde(rename = "iso-8859-1", alias = "latin1")]
    Latin1,
    /// UTF-16, little endian
    #[serde(rename = "utf-16le")]
    Utf16Le,
    /// UTF-16, big endian
    #[serde(rename = "utf-16be")]
    Utf16Be,
}

impl Encoding {
    /// Canonical label
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Ascii => "us-ascii",
            Encoding::Latin1 => "iso-8859-1",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "us-ascii" | "ascii" => Ok(Encoding::Ascii),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(Encoding::Latin1),
            "utf-16le" | "utf16le" => Ok(Encoding::Utf16Le),
            "utf-16be" | "utf16be" => Ok(Encoding::Utf16Be),
            _ => Err(Error::config(format!("Unknown encoding: {}", s))),
        }
    }
}

/// Incremental decoder for one [`Encoding`]
#[derive(Debug)]
pub(crate) struct Decoder {
    encoding: Encoding,
    /// Bytes of an incomplete sequence carried over from the previous chunk
    pending: Vec<u8>,
    /// Leading surrogate waiting for its pair (UTF-16 only)
    high_surrogate: Option<u16>,
    /// Absolute offset of the first byte in `pending`
    consumed: u64,
}

impl Decoder {
    pub(crate) fn new(encoding: Encoding) -> Self {
        Decoder {
            encoding,
            pending: Vec::new(),
            high_surrogate: None,
            consumed: 0,
        }
    }

    fn invalid(&self, byte_offset: u64) -> Error {
        Error::InvalidEncoding {
            encoding: self.encoding,
            byte_offset,
        }
    }

    /// Decodes `bytes`, appending complete characters to `out`
    ///
    /// On invalid input the characters before the offending byte are still
    /// appended.
    pub(crate) fn decode(&mut self, bytes: &[u8], out: &mut Vec<char>) -> Result<()> {
        match self.encoding {
            Encoding::Utf8 => self.decode_utf8(bytes, out),
            Encoding::Ascii => {
                for (i, &b) in bytes.iter().enumerate() {
                    if !b.is_ascii() {
                        return Err(self.invalid(self.consumed + i as u64));
                    }
                    out.push(char::from(b));
                }
                self.consumed += bytes.len() as u64;
                Ok(())
            }
            Encoding::Latin1 => {
                out.extend(bytes.iter().map(|&b| char::from(b)));
                self.consumed += bytes.len() as u64;
                Ok(())
            }
            Encoding::Utf16Le | Encoding::Utf16Be => self.decode_utf16(bytes, out),
        }
    }

    /// Checks that the input did not stop in the middle of a character
    pub(crate) fn finish(&mut self) -> Result<()> {
        if self.high_surrogate.take().is_some() {
            return Err(self.invalid(self.consumed - 2));
        }
        if !self.pending.is_empty() {
            return Err(self.invalid(self.consumed));
        }
        Ok(())
    }

    fn decode_utf8(&mut self, bytes: &[u8], out: &mut Vec<char>) -> Result<()> {
        let mut data = std::mem::take(&mut self.pending);
        data.extend_from_slice(bytes);

        let (valid, invalid) = match std::str::from_utf8(&data) {
            Ok(_) => (data.len(), false),
            // `error_len` is `None` for a sequence cut off by the end of the chunk
            Err(e) => (e.valid_up_to(), e.error_len().is_some()),
        };

        let text = std::str::from_utf8(&data[..valid])
            .map_err(|e| self.invalid(self.consumed + e.valid_up_to() as u64))?;
        out.extend(text.chars());
        self.consumed += valid as u64;

        if invalid {
            return Err(self.invalid(self.consumed));
        }
        self.pending = data[valid..].to_vec();
        Ok(())
    }

    fn decode_utf16(&mut self, bytes: &[u8], out: &mut Vec<char>) -> Result<()> {
        let mut data = std::mem::take(&mut self.pending);
        data.extend_from_slice(bytes);

        let whole = data.len() - data.len() % 2;
        for pair in data[..whole].chunks_exact(2) {
            let unit = match self.encoding {
                Encoding::Utf16Le => u16::from_le_bytes([pair[0], pair[1]]),
                _ => u16::from_be_bytes([pair[0], pair[1]]),
            };

            match (self.high_surrogate.take(), unit) {
                (None, 0xD800..=0xDBFF) => self.high_surrogate = Some(unit),
                (None, 0xDC00..=0xDFFF) => return Err(self.invalid(self.consumed)),
                (None, _) => match char::from_u32(u32::from(unit)) {
                    Some(c) => out.push(c),
                    None => return Err(self.invalid(self.consumed)),
                },
                (Some(high), 0xDC00..=0xDFFF) => {
                    let code = 0x10000
                        + ((u32::from(high) - 0xD800) << 10)
                        + (u32::from(unit) - 0xDC00);
                    match char::from_u32(code) {
                        Some(c) => out.push(c),
                        None => return Err(self.invalid(self.consumed - 2)),
                    }
                }
                (Some(_), _) => return Err(self.invalid(self.consumed - 2)),
            }
            self.consumed += 2;
        }

        self.pending = data[whole..].to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_chunks(encoding: Encoding, chunks: &[&[u8]]) -> Result<String> {
        let mut decoder = Decoder::new(encoding);
        let mut out = Vec::new();
        for chunk in chunks {
            decoder.decode(chunk, &mut out)?;
        }
        decoder.finish()?;
        Ok(out.into_iter().collect())
    }

    #[test]
    fn test_encoding_labels() {
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("latin1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("utf-16be".parse::<Encoding>().unwrap(), Encoding::Utf16Be);
        assert!("ebcdic".parse::<Encoding>().is_err());
        assert_eq!(Encoding::default().to_string(), "utf-8");
    }

    #[test]
    fn test_utf8_split_across_chunks() {
        let bytes = "(λ 1)".as_bytes();
        // λ is two bytes starting at offset 1
        let text = decode_chunks(Encoding::Utf8, &[&bytes[..2], &bytes[2..]]).unwrap();
        assert_eq!(text, "(λ 1)");
    }

    #[test]
    fn test_utf8_invalid_byte_offset() {
        let err = decode_chunks(Encoding::Utf8, &[&b"ab"[..], &b"c\xffd"[..]]).unwrap_err();
        match err {
            Error::InvalidEncoding { byte_offset, .. } => assert_eq!(byte_offset, 3),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_valid_prefix_kept_on_error() {
        for encoding in [Encoding::Utf8, Encoding::Ascii] {
            let mut decoder = Decoder::new(encoding);
            let mut out = Vec::new();
            assert!(decoder.decode(b"(a 1) \xff b", &mut out).is_err());
            assert_eq!(out.into_iter().collect::<String>(), "(a 1) ");
        }

        let mut decoder = Decoder::new(Encoding::Utf16Be);
        let mut out = Vec::new();
        assert!(decoder.decode(&[0x00, 0x61, 0xDC, 0x00], &mut out).is_err());
        assert_eq!(out, vec!['a']);
    }

    #[test]
    fn test_utf8_truncated_at_end() {
        let bytes = "λ".as_bytes();
        assert!(decode_chunks(Encoding::Utf8, &[&bytes[..1]]).is_err());
    }

    #[test]
    fn test_latin1_and_ascii() {
        assert_eq!(decode_chunks(Encoding::Latin1, &[&b"caf\xe9"[..]]).unwrap(), "café");
        assert!(decode_chunks(Encoding::Ascii, &[&b"caf\xe9"[..]]).is_err());
        assert_eq!(decode_chunks(Encoding::Ascii, &[&b"(a 1)"[..]]).unwrap(), "(a 1)");
    }

    #[test]
    fn test_utf16_with_surrogate_pair_split() {
        let units: Vec<u8> = "(𝄞)".encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
        let text =
            decode_chunks(Encoding::Utf16Le, &[&units[..3], &units[3..5], &units[5..]]).unwrap();
        assert_eq!(text, "(𝄞)");

        let units: Vec<u8> = "ab".encode_utf16().flat_map(|u| u.to_be_bytes()).collect();
        assert_eq!(decode_chunks(Encoding::Utf16Be, &[&units[..]]).unwrap(), "ab");
    }

    #[test]
    fn test_utf16_lone_surrogate() {
        assert!(decode_chunks(Encoding::Utf16Le, &[&[0x00u8, 0xDC][..]]).is_err());
        assert!(decode_chunks(Encoding::Utf16Le, &[&[0x00u8, 0xD8][..]]).is_err());
        assert!(decode_chunks(Encoding::Utf16Le, &[&[0x61u8][..]]).is_err());
    }

    #[test]
    fn test_serde_labels() {
        let enc: Encoding = serde_json::from_str(r#""latin1""#).unwrap();
        assert_eq!(enc, Encoding::Latin1);
        assert_eq!(serde_json::to_string(&Encoding::Utf16Le).unwrap(), r#""utf-16le""#);
    }
}
