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

//! Analyzer core: input cursor, transition table, and scanner engine.

pub mod input;
pub mod scanner;
pub mod table;

#[cfg(test)]
mod tests;
