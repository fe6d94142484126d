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

//! Program entry point and crate root.

#![allow(dead_code)]

mod lang;
mod message;
mod session;

use std::env::args;
use std::fs;
use std::process::exit;

use lang::table::TransitionTable;
use message::{file_not_found_error, usage_error, Message, Severity};
use session::Session;

/// Name of this program, for use in diagnostic messages.
pub const PROGRAM_NAME: &str = "tlex";

fn main() {
    let mut args = args().skip(1);

    let (table_path, input_path) = match (args.next(), args.next(), args.next()) {
        (Some(table), Some(input), None) => (table, input),
        _ => {
            eprintln!("{}", usage_error());
            exit(1);
        }
    };

    let table = load_table(&table_path);
    let input = read_file(&input_path);

    if let Err(e) = Session::new(table).print_tokens(&input) {
        eprintln!("{}", Message::new(Severity::Fatal, format_args!("{}", e)));
        exit(1);
    }
}

fn load_table(path: &str) -> TransitionTable {
    match TransitionTable::load(read_file(path).into_iter()) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{}", Message::at(path, Severity::Fatal, format_args!("{}", e)));
            exit(1);
        }
    }
}

fn read_file(path: &str) -> Vec<u8> {
    match fs::read(path) {
        Ok(content) => content,
        Err(_) => {
            eprintln!("{}", file_not_found_error(path));
            exit(1);
        }
    }
}
