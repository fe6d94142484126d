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

//! Table description loader.
//!
//! ### Text Format
//!
//! ```text
//! ,2 2 2          delimiter byte, then token/state/class counts
//! NUM             token names, one field each
//! WS
//! S0              state names
//! S1
//! 0123456789      character class bodies (\n \t \r escapes recognized)
//!
//! S1,s,a,NUM      one row per state: class_count + 1 action fields
//! S1,a,a,NUM      (state name, `a`, or `s`), then the accept token
//! ```
//!
//! A field is terminated by the delimiter, a line feed, or end of input;
//! carriage returns are stripped inside fields.  Runs of line breaks are
//! skipped between sections and before each matrix row.

use crate::lang::input::Cursor;

use super::*;

// ----------------------------------------------------------------------------

/// A fatal defect in a table description.  No partial table is returned.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum LoadError {
    /// The header line did not yield a delimiter byte and three counts.
    #[error("malformed table header")]
    BadHeader,

    /// The header declared zero token types or zero states.
    #[error("table must declare at least one token type and one state")]
    EmptyTable,

    /// A character class body used an escape other than `\n`, `\t`, `\r`.
    #[error("unsupported escape sequence '\\{0}'")]
    BadEscape(char),

    /// Input ended between a backslash and its escape character.
    #[error("input ended inside a character class escape sequence")]
    TruncatedClass,

    /// A transition field named a state that was not declared.
    #[error("undefined state transition \"{0}\"")]
    UnknownState(String),

    /// A trailing row field named a token type that was not declared.
    #[error("undefined output token \"{0}\"")]
    UnknownToken(String),
}

// ----------------------------------------------------------------------------

impl TransitionTable {
    /// Loads a table from the bytes of a text-format description.
    pub fn load<I: Iterator<Item = u8>>(source: I) -> Result<Self, LoadError> {
        Loader::new(source).load()
    }
}

// ----------------------------------------------------------------------------

/// Loader state: the input cursor and the delimiter from the header.
struct Loader<I: Iterator<Item = u8>> {
    input:     Cursor<I>,
    delimiter: u8,
}

impl<I: Iterator<Item = u8>> Loader<I> {
    fn new(source: I) -> Self {
        Self { input: Cursor::new(source), delimiter: 0 }
    }

    fn load(mut self) -> Result<TransitionTable, LoadError> {
        let (token_count, state_count, class_count, term) = self.header()?;

        if token_count == 0 || state_count == 0 {
            return Err(LoadError::EmptyTable);
        }

        self.skip_newlines(term);
        let (tokens, term) = self.names(token_count);

        self.skip_newlines(term);
        let (states, term) = self.names(state_count);

        self.skip_newlines(term);
        let (classes, mut term) = self.class_section(class_count)?;

        let mut actions = Vec::with_capacity(state_count);
        let mut accepts = Vec::with_capacity(state_count);

        for _ in 0..state_count {
            self.skip_newlines(term);

            let mut row = Vec::with_capacity(class_count + 1);
            for _ in 0..=class_count {
                let (text, t) = self.field();
                term = t;
                // `a` and `s` are reserved; they shadow states so named.
                row.push(match text.as_slice() {
                    b"a" => Action::Accept,
                    b"s" => Action::Skip,
                    _    => match resolve(&states, &text) {
                        Some(s) => Action::Goto(s),
                        None    => return Err(LoadError::UnknownState(lossy(&text))),
                    },
                });
            }
            actions.push(row);

            let (text, t) = self.field();
            term = t;
            match resolve(&tokens, &text) {
                Some(t) => accepts.push(t),
                None    => return Err(LoadError::UnknownToken(lossy(&text))),
            }
        }

        Ok(TransitionTable {
            delimiter: self.delimiter,
            tokens, states, classes, actions, accepts,
        })
    }

    /// Reads the header line: one delimiter byte, then three
    /// whitespace-separated counts.  Returns the counts and the line
    /// terminator.
    fn header(&mut self) -> Result<(usize, usize, usize, Option<u8>), LoadError> {
        self.delimiter = self.input.next().ok_or(LoadError::BadHeader)?;

        let mut line = Vec::new();
        let term = loop {
            match self.input.next() {
                None        => break None,
                Some(b'\n') => break Some(b'\n'),
                Some(b'\r') => {}
                Some(b)     => line.push(b),
            }
        };

        let line = String::from_utf8_lossy(&line);
        let mut counts = line.split_whitespace().map(str::parse::<usize>);

        match (counts.next(), counts.next(), counts.next(), counts.next()) {
            (Some(Ok(t)), Some(Ok(s)), Some(Ok(c)), None) => Ok((t, s, c, term)),
            _                                             => Err(LoadError::BadHeader),
        }
    }

    /// Reads one field: bytes up to the delimiter, a line feed, or end of
    /// input, with carriage returns stripped.  Returns the field and its
    /// terminator (`None` at end of input).
    fn field(&mut self) -> (Vec<u8>, Option<u8>) {
        let mut text = Vec::new();
        loop {
            match self.input.next() {
                None                                         => return (text, None),
                Some(b) if b == self.delimiter || b == b'\n' => return (text, Some(b)),
                Some(b'\r')                                  => {}
                Some(b)                                      => text.push(b),
            }
        }
    }

    /// Reads one character class body field, expanding the `\n`, `\t`, `\r`
    /// escapes.  Any other escape is fatal.
    fn class_field(&mut self) -> Result<(Vec<u8>, Option<u8>), LoadError> {
        let mut text = Vec::new();
        loop {
            match self.input.next() {
                None                                         => return Ok((text, None)),
                Some(b) if b == self.delimiter || b == b'\n' => return Ok((text, Some(b))),
                Some(b'\\')                                  => match self.input.next() {
                    Some(b'n') => text.push(b'\n'),
                    Some(b't') => text.push(b'\t'),
                    Some(b'r') => text.push(b'\r'),
                    Some(b)    => return Err(LoadError::BadEscape(b as char)),
                    None       => return Err(LoadError::TruncatedClass),
                },
                Some(b'\r')                                  => {}
                Some(b)                                      => text.push(b),
            }
        }
    }

    /// Reads `count` name fields.
    fn names(&mut self, count: usize) -> (Vec<String>, Option<u8>) {
        let mut names = Vec::with_capacity(count);
        let mut term  = None;
        for _ in 0..count {
            let (text, t) = self.field();
            names.push(lossy(&text));
            term = t;
        }
        (names, term)
    }

    /// Reads `count` character class bodies.
    fn class_section(&mut self, count: usize)
        -> Result<(Vec<Vec<u8>>, Option<u8>), LoadError>
    {
        let mut classes = Vec::with_capacity(count);
        let mut term    = None;
        for _ in 0..count {
            let (text, t) = self.class_field()?;
            classes.push(text);
            term = t;
        }
        Ok((classes, term))
    }

    /// Skips a run of line breaks between sections.  `term` is the byte that
    /// terminated the previous field; the first byte that is not a line
    /// break is pushed back.
    fn skip_newlines(&mut self, mut term: Option<u8>) {
        while let Some(b'\n' | b'\r') = term {
            term = self.input.next();
        }
        if let Some(b) = term {
            self.input.unread(b);
        }
    }
}

/// Resolves a field to the id of the first declared name matching it.
fn resolve(names: &[String], text: &[u8]) -> Option<usize> {
    let text = String::from_utf8_lossy(text);
    names.iter().position(|name| name == text.as_ref())
}

fn lossy(text: &[u8]) -> String {
    String::from_utf8_lossy(text).into_owned()
}

// ----------------------------------------------------------------------------
