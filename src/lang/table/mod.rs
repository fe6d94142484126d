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

//! Transition table: the loaded automaton.

mod load;

pub use load::LoadError;

// ----------------------------------------------------------------------------

/// Index of a token type within a [`TransitionTable`].
pub type TokenId = usize;

/// Index of a state within a [`TransitionTable`].
pub type StateId = usize;

/// Index of a character class within a [`TransitionTable`].  The index one
/// past the last declared class is reserved for unclassified bytes.
pub type ClassId = usize;

// ----------------------------------------------------------------------------

/// One entry of the transition matrix.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// Consume the current input byte, append it to the lexeme in progress,
    /// and continue scanning in the given state.
    Goto(StateId),

    /// The lexeme in progress is complete.  The current input byte is not
    /// part of it and is pushed back for the next token.
    Accept,

    /// Discard the current input byte without appending it to any lexeme and
    /// without changing state.
    Skip,
}

// ----------------------------------------------------------------------------

/// A loaded scanning automaton: token names, state names, character classes,
/// and the action matrix.
///
/// A table is immutable once loaded and may be shared by reference across
/// any number of concurrent [`Scanner`](crate::lang::scanner::Scanner)
/// sessions over independent input streams.
///
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TransitionTable {
    /// Field delimiter byte from the table description header.
    delimiter: u8,

    /// Token type names; index = token id.
    tokens: Vec<String>,

    /// State names; index = state id.  State 0 is the start state.
    states: Vec<String>,

    /// Character class bodies; index = class id.  Classes may overlap; the
    /// classifier returns the first match in declaration order.
    classes: Vec<Vec<u8>>,

    /// Action matrix: `state_count` rows of `class_count + 1` entries.  The
    /// last column handles bytes that match no declared class.
    actions: Vec<Vec<Action>>,

    /// Token type emitted when an accept action fires in each state.
    accepts: Vec<TokenId>,
}

impl TransitionTable {
    /// Returns the field delimiter byte of the table description.
    #[inline]
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the count of token types.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Returns the count of states.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Returns the count of declared character classes.
    #[inline]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Returns the name of the given token type.
    #[inline]
    pub fn token_name(&self, token: TokenId) -> &str {
        &self.tokens[token]
    }

    /// Returns the name of the given state.
    #[inline]
    pub fn state_name(&self, state: StateId) -> &str {
        &self.states[state]
    }

    /// Classifies `byte`: returns the index of the first declared character
    /// class containing `byte`, or the reserved index [`Self::class_count()`]
    /// if no class contains it.
    pub fn classify(&self, byte: u8) -> ClassId {
        self.classes
            .iter()
            .position(|class| class.contains(&byte))
            .unwrap_or(self.classes.len())
    }

    /// Returns the action for the given state and class.  `class` may be the
    /// reserved unclassified index.
    #[inline]
    pub fn action(&self, state: StateId, class: ClassId) -> Action {
        self.actions[state][class]
    }

    /// Returns the token type emitted when an accept action fires while the
    /// machine is in the given state.
    #[inline]
    pub fn accept_token(&self, state: StateId) -> TokenId {
        self.accepts[state]
    }

    /// Renders the table back into the bytes of its text-format description.
    /// Loading the result produces an equal table.  The rendering is
    /// byte-for-byte: class bodies may contain bytes that are not valid
    /// UTF-8, so the result is not a `String`.
    pub fn description(&self) -> Vec<u8> {
        let mut out = Vec::new();

        out.push(self.delimiter);
        out.extend_from_slice(format!(
            "{} {} {}\n",
            self.tokens.len(),
            self.states.len(),
            self.classes.len(),
        ).as_bytes());

        for name in &self.tokens {
            out.extend_from_slice(name.as_bytes());
            out.push(b'\n');
        }

        for name in &self.states {
            out.extend_from_slice(name.as_bytes());
            out.push(b'\n');
        }

        for class in &self.classes {
            for &byte in class {
                match byte {
                    b'\n' => out.extend_from_slice(b"\\n"),
                    b'\t' => out.extend_from_slice(b"\\t"),
                    b'\r' => out.extend_from_slice(b"\\r"),
                    b     => out.push(b),
                }
            }
            out.push(b'\n');
        }

        for (state, row) in self.actions.iter().enumerate() {
            for action in row {
                match *action {
                    Action::Goto(s) => out.extend_from_slice(self.states[s].as_bytes()),
                    Action::Accept  => out.push(b'a'),
                    Action::Skip    => out.push(b's'),
                }
                out.push(self.delimiter);
            }
            out.extend_from_slice(self.tokens[self.accepts[state]].as_bytes());
            out.push(b'\n');
        }

        out
    }
}

// ----------------------------------------------------------------------------
