use std::io::{self, BufRead};

/// Splits text into lines ending in `\n`, `\r\n` or a lone `\r`.
///
/// A terminator at the very end does not open an extra empty line.
pub struct SourceLines<'a> {
    rest: &'a str,
}

impl<'a> SourceLines<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { rest: source }
    }
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(end) = self.rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut self.rest));
        };

        let line = &self.rest[..end];
        let terminator = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = &self.rest[end + terminator..];
        Some(line)
    }
}

/// Streaming counterpart of [`SourceLines`] over raw bytes.
///
/// A `\r` that ends one buffer and a `\n` that starts the next still count
/// as a single terminator.
pub struct LineReader<R> {
    reader: R,
    skip_lf: bool,
}

impl<R: BufRead> LineReader<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            skip_lf: false,
        }
    }

    /// Read the next line into `line` without its terminator.
    /// Returns `false` once the input is exhausted.
    ///
    /// # Errors
    /// Returns an I/O error if the underlying reader fails.
    pub fn read_line(&mut self, line: &mut Vec<u8>) -> io::Result<bool> {
        line.clear();
        let mut started = false;

        loop {
            let (used, done) = {
                let available = self.reader.fill_buf()?;
                if available.is_empty() {
                    return Ok(started);
                }

                if self.skip_lf {
                    self.skip_lf = false;
                    if available[0] == b'\n' {
                        (1, false)
                    } else {
                        (0, false)
                    }
                } else {
                    started = true;
                    match available.iter().position(|&b| b == b'\r' || b == b'\n') {
                        Some(end) => {
                            line.extend_from_slice(&available[..end]);
                            self.skip_lf = available[end] == b'\r';
                            (end + 1, true)
                        }
                        None => {
                            line.extend_from_slice(available);
                            (available.len(), false)
                        }
                    }
                }
            };

            self.reader.consume(used);
            if done {
                return Ok(true);
            }
        }
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
