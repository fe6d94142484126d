// This file is part of tlex, a table-driven lexical analyzer.
// Copyright 2026 The tlex developers
//
// SPDX-License-Identifier: GPL-3.0-or-later
//
// tlex is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// tlex is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tlex.  If not, see <http://www.gnu.org/licenses/>.

//! Scanner engine: drives a loaded transition table over an input stream.

use std::fmt::{self, Display, Formatter};

use super::input::Cursor;
use super::table::{Action, TokenId, TransitionTable};

// ----------------------------------------------------------------------------

/// A classified token: a token type id and the lexeme that produced it.
///
/// A token is owned by the caller once returned and carries no reference to
/// the table or the scanner that produced it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    kind:   TokenId,
    lexeme: Vec<u8>,
}

impl Token {
    /// Returns the token type id, an index into the table's token names.
    #[inline]
    pub fn kind(&self) -> TokenId {
        self.kind
    }

    /// Returns the lexeme bytes exactly as consumed from the input.
    #[inline]
    pub fn lexeme(&self) -> &[u8] {
        &self.lexeme
    }

    /// Returns a displayable `<NAME lexeme>` rendering of the token, naming
    /// the token type from the given table.
    pub fn display<'a>(&'a self, table: &'a TransitionTable) -> TokenDisplay<'a> {
        TokenDisplay { table, token: self }
    }
}

// ----------------------------------------------------------------------------

/// Borrowing [`Display`] wrapper for a [`Token`], obtained from
/// [`Token::display`].
#[derive(Clone, Copy, Debug)]
pub struct TokenDisplay<'a> {
    table: &'a TransitionTable,
    token: &'a Token,
}

impl Display for TokenDisplay<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "<{} {}>",
            self.table.token_name(self.token.kind),
            String::from_utf8_lossy(&self.token.lexeme),
        )
    }
}

// ----------------------------------------------------------------------------

/// Scanner session: interprets a [`TransitionTable`] over one input stream,
/// yielding one token per call until end of input.
///
/// The table is borrowed read-only; each session owns its cursor and the
/// single byte of pushback, so independent sessions may share one table.
#[derive(Clone, Debug)]
pub struct Scanner<'a, I: Iterator<Item = u8>> {
    table: &'a TransitionTable,
    input: Cursor<I>,
}

impl<'a, I: Iterator<Item = u8>> Scanner<'a, I> {
    /// Creates a new scanner over the given input stream.
    pub fn new(table: &'a TransitionTable, input: I) -> Self {
        Self { table, input: Cursor::new(input) }
    }

    /// Scans the next token.  Returns `None` once the input is exhausted.
    ///
    /// Matching is maximal-munch: the scanner keeps consuming while the
    /// table yields `Goto` actions and decides that a token is complete one
    /// byte past its end.  That lookahead byte belongs to the next token and
    /// is pushed back.  `Skip` actions discard bytes without contributing to
    /// any lexeme.  If the input ends while a lexeme is in progress, the
    /// current state's accept token is emitted first; the following call
    /// returns `None`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Token> {
        let mut state  = 0;
        let mut lexeme = vec![];

        loop {
            let byte = match self.input.next() {
                Some(b) => b,
                None if lexeme.is_empty() => return None,
                // Implicit accept in the current state; nothing to push back.
                None => return Some(self.accept(state, lexeme)),
            };

            match self.table.action(state, self.table.classify(byte)) {
                Action::Goto(next) => {
                    lexeme.push(byte);
                    state = next;
                }
                Action::Skip => {}
                Action::Accept => {
                    // The byte one past the lexeme starts the next token.
                    self.input.unread(byte);
                    return Some(self.accept(state, lexeme));
                }
            }
        }
    }

    fn accept(&self, state: usize, lexeme: Vec<u8>) -> Token {
        Token { kind: self.table.accept_token(state), lexeme }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_table() -> TransitionTable {
        TransitionTable::load(
            ",2 2 2\nNUM\nWS\nS0\nS1\n0123456789\n \nS1,s,a,NUM\nS1,a,a,NUM\n"
                .bytes(),
        )
        .unwrap()
    }

    fn kinds_and_lexemes(table: &TransitionTable, input: &[u8]) -> Vec<(usize, Vec<u8>)> {
        let mut scanner = Scanner::new(table, input.iter().copied());
        let mut out     = vec![];
        while let Some(token) = scanner.next() {
            out.push((token.kind(), token.lexeme().to_vec()));
        }
        out
    }

    #[test]
    fn scanner_empty_input() {
        let table       = digits_table();
        let mut scanner = Scanner::new(&table, b"".iter().copied());

        assert_eq!( scanner.next(), None );
        assert_eq!( scanner.next(), None );
    }

    #[test]
    fn scanner_single_token() {
        let table  = digits_table();
        let tokens = kinds_and_lexemes(&table, b"42");

        assert_eq!( tokens, vec![(0, b"42".to_vec())] );
    }

    #[test]
    fn scanner_skip_only_input() {
        let table  = digits_table();
        let tokens = kinds_and_lexemes(&table, b"    ");

        assert_eq!( tokens, vec![] );
    }

    #[test]
    fn scanner_display() {
        let table       = digits_table();
        let mut scanner = Scanner::new(&table, b"7".iter().copied());

        let token = scanner.next().unwrap();

        assert_eq!( format!("{}", token.display(&table)), "<NUM 7>" );
    }

    #[test]
    fn scanner_shared_table() {
        let table = digits_table();

        let mut a = Scanner::new(&table, b"1".iter().copied());
        let mut b = Scanner::new(&table, b"2".iter().copied());

        assert_eq!( a.next().unwrap().lexeme(), b"1" );
        assert_eq!( b.next().unwrap().lexeme(), b"2" );
        assert_eq!( a.next(), None );
        assert_eq!( b.next(), None );
    }

    #[test]
    fn scanner_long_lexeme() {
        // The lexeme buffer grows; no fixed bound.
        let table = digits_table();
        let input = vec![b'9'; 4096];

        let tokens = kinds_and_lexemes(&table, &input);

        assert_eq!( tokens.len(),      1     );
        assert_eq!( tokens[0].1.len(), 4096  );
    }
}
