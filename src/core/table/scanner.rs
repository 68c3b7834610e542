//! Cursor over a single source line

use regex::Regex;

/// Anchored regex scanner over one line.
///
/// Every pattern handed to [`Scanner::scan`] must start with `^`; it is
/// matched against the unconsumed rest of the line.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner { source, pos: 0 }
    }

    /// The unconsumed part of the line
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Consume a non-empty match of `re` at the cursor
    pub fn scan(&mut self, re: &Regex) -> Option<&'a str> {
        let rest = self.rest();
        let m = re.find(rest)?;
        if m.start() != 0 || m.end() == 0 {
            return None;
        }
        self.pos += m.end();
        Some(&rest[..m.end()])
    }

    /// Test for a match at the cursor without consuming it
    pub fn check(&self, re: &Regex) -> bool {
        re.find(self.rest())
            .is_some_and(|m| m.start() == 0 && m.end() > 0)
    }

    /// Consume a match if there is one; empty matches are fine
    pub fn skip(&mut self, re: &Regex) {
        let _ = self.scan(re);
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }
}
