use std::str;

/// Reads one character at a time from a UTF-8 byte buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// Decodes the next character and advances past it.
    /// A malformed byte decodes to U+FFFD and is skipped on its own.
    pub fn next_lossy(&mut self) -> Option<char> {
        match self.try_next() {
            Ok(c) => c,
            Err(_) => {
                self.offset += 1;
                Some(char::REPLACEMENT_CHARACTER)
            }
        }
    }

    /// Decodes the next character and advances past it.
    /// On malformed input the offset of the bad byte is returned and the cursor stays put.
    pub fn try_next(&mut self) -> Result<Option<char>, usize> {
        if self.is_exhausted() {
            return Ok(None);
        }
        match decode(&self.bytes[self.offset..]) {
            Some(c) => {
                self.offset += c.len_utf8();
                Ok(Some(c))
            }
            None => Err(self.offset),
        }
    }
}

fn decode(bytes: &[u8]) -> Option<char> {
    // no character is wider than 4 bytes
    let window = &bytes[..bytes.len().min(4)];
    let valid = match str::from_utf8(window) {
        Ok(s) => s,
        Err(e) => str::from_utf8(&window[..e.valid_up_to()]).unwrap_or_default(),
    };
    valid.chars().next()
}
