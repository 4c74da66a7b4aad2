use std::{collections::VecDeque, io::BufRead, str::FromStr};

/// Whitespace-delimited token reader over interactive input.
///
/// Tokens left over on a line are served to the next prompt, so `u` followed by
/// `1 5` works whether the answers come on the same line or later ones.
pub struct Input<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Input<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted
    pub fn token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next token parsed as `T`. The inner `Err` carries the rejected token.
    pub fn parse<T: FromStr>(&mut self) -> std::io::Result<Option<Result<T, String>>> {
        Ok(self
            .token()?
            .map(|token| token.parse().map_err(|_| token)))
    }

    /// Drops whatever is left of the current line
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}
