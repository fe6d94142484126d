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

//! Analysis session.

use std::io::{self, Write};

use crate::lang::scanner::Scanner;
use crate::lang::table::TransitionTable;

// ----------------------------------------------------------------------------

/// Analysis session: one loaded transition table, ready to scan any number
/// of input streams.
#[derive(Debug)]
pub struct Session {
    table: TransitionTable,
}

impl Session {
    /// Creates a new [`Session`] around a loaded table.
    pub fn new(table: TransitionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Begins a scan of the given input stream against the session's table.
    pub fn scanner<I: Iterator<Item = u8>>(&self, input: I) -> Scanner<I> {
        Scanner::new(&self.table, input)
    }

    /// Scans the given content and prints each token as a `<NAME lexeme>`
    /// line on standard output.  A write failure stops the scan and is
    /// returned to the caller.
    pub fn print_tokens(&self, content: &[u8]) -> io::Result<()> {
        self.write_tokens(content, &mut io::stdout().lock())
    }

    /// Scans the given content and writes each token as a `<NAME lexeme>`
    /// line to the given writer.
    pub fn write_tokens<W: Write>(&self, content: &[u8], out: &mut W) -> io::Result<()> {
        let mut scanner = self.scanner(content.iter().copied());

        while let Some(token) = scanner.next() {
            writeln!(out, "{}", token.display(&self.table))?;
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
