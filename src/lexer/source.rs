//! Character sources the scanner pulls from.

use std::io::{ErrorKind, Read};
use std::iter::Peekable;
use std::str::Chars;

use super::encoding::{Decoder, Encoding};
use crate::error::{Error, Result};

/// Default size of the byte buffer used by [`ReaderSource`]
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// A pull-based source of characters
///
/// `current` peeks at the next character without consuming it and may block
/// while the source refills. `None` means the input is exhausted.
pub trait CharSource {
    /// Character under the cursor, or `None` at end of input
    fn current(&mut self) -> Result<Option<char>>;

    /// Consumes the character under the cursor
    fn advance(&mut self);
}

/// Source over an in-memory string
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> StrSource<'a> {
    /// Creates a source reading `text` from the start
    pub fn new(text: &'a str) -> Self {
        StrSource {
            chars: text.chars().peekable(),
        }
    }
}

impl CharSource for StrSource<'_> {
    fn current(&mut self) -> Result<Option<char>> {
        Ok(self.chars.peek().copied())
    }

    fn advance(&mut self) {
        self.chars.next();
    }
}

/// Buffered source decoding bytes from any [`Read`]
///
/// Characters are decoded one byte buffer at a time into `chars`; `next` is
/// the cursor into that buffer and `chars.len()` the number of valid
/// characters. The buffer is refilled once the cursor passes its end.
///
/// A decoding or read failure is raised only once the cursor reaches it, so
/// every character before the bad byte is delivered whatever the buffer
/// size. The failure is then returned on every later call.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    decoder: Decoder,
    bytes: Box<[u8]>,
    chars: Vec<char>,
    next: usize,
    eof: bool,
    /// Failure met after the last character in `chars`
    failed: Option<Error>,
}

impl<R: Read> ReaderSource<R> {
    /// Creates a UTF-8 source with the default buffer size
    pub fn new(reader: R) -> Self {
        Self::with_encoding(reader, Encoding::Utf8, DEFAULT_BUFFER_SIZE)
    }

    /// Creates a source decoding `reader` as `encoding`, reading `buffer_size` bytes at a time
    pub fn with_encoding(reader: R, encoding: Encoding, buffer_size: usize) -> Self {
        let buffer_size = buffer_size.max(1);
        ReaderSource {
            reader,
            decoder: Decoder::new(encoding),
            bytes: vec![0; buffer_size].into_boxed_slice(),
            chars: Vec::with_capacity(buffer_size),
            next: 0,
            eof: false,
            failed: None,
        }
    }

    /// Gives back the underlying reader, positioned after the bytes read so far
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn refill(&mut self) {
        self.chars.clear();
        self.next = 0;

        let n = loop {
            match self.reader.read(&mut self.bytes) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.failed = Some(e.into());
                    return;
                }
            }
        };

        let decoded = if n == 0 {
            self.eof = true;
            self.decoder.finish()
        } else {
            self.decoder.decode(&self.bytes[..n], &mut self.chars)
        };
        if let Err(e) = decoded {
            self.failed = Some(e);
        }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn current(&mut self) -> Result<Option<char>> {
        // A chunk may decode to nothing when it ends inside a multi-byte sequence
        while self.next >= self.chars.len() {
            if let Some(e) = &self.failed {
                return Err(e.clone());
            }
            if self.eof {
                return Ok(None);
            }
            self.refill();
        }
        Ok(Some(self.chars[self.next]))
    }

    fn advance(&mut self) {
        if self.next < self.chars.len() {
            self.next += 1;
        }
    }
}
