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

//! End-to-end scenarios: load a table description, scan an input.

use super::scanner::Scanner;
use super::table::{LoadError, TransitionTable};

// ----------------------------------------------------------------------------

/// Two tokens (`NUM`, `WS`), two states, two classes (digits, space).
/// `S0`: digit → `S1`, space → skip, unclassified → accept.
/// `S1`: digit → `S1`, space → accept, unclassified → accept.
const NUMBERS: &str =
    ",2 2 2\nNUM\nWS\nS0\nS1\n0123456789\n \nS1,s,a,NUM\nS1,a,a,NUM\n";

/// One `WORD` token over letters, skipping spaces, tabs, and newlines.
const WORDS: &str =
    ";2 2 2\nWORD;END\nS0;S1\nabcdefghijklmnopqrstuvwxyz\n \\t\\n\\r\nS1;s;a;WORD\nS1;a;a;WORD\n";

fn scan(description: &str, input: &str) -> Vec<String> {
    let table       = TransitionTable::load(description.bytes()).unwrap();
    let mut scanner = Scanner::new(&table, input.bytes());
    let mut out     = vec![];

    while let Some(token) = scanner.next() {
        out.push(format!("{}", token.display(&table)));
    }
    out
}

// ----------------------------------------------------------------------------

#[test]
fn numbers_scenario() {
    assert_eq!( scan(NUMBERS, " 12 3"), ["<NUM 12>", "<NUM 3>"] );
}

#[test]
fn maximal_munch() {
    // One longest token, not any shorter prefix.
    assert_eq!( scan(NUMBERS, "123456"), ["<NUM 123456>"] );
}

#[test]
fn pushback_starts_next_token() {
    // The space triggering the accept is not part of the first lexeme, and
    // the digit after it opens the second.
    assert_eq!( scan(NUMBERS, "1 2"), ["<NUM 1>", "<NUM 2>"] );
}

#[test]
fn skip_produces_no_token() {
    assert_eq!( scan(NUMBERS, "   "),  Vec::<String>::new() );
    assert_eq!( scan(NUMBERS, ""),     Vec::<String>::new() );
}

#[test]
fn skip_between_tokens() {
    assert_eq!( scan(NUMBERS, "  1   2  "), ["<NUM 1>", "<NUM 2>"] );
}

#[test]
fn end_of_input_finalizes_pending_lexeme() {
    // Input ends mid-token: one final token, then exhaustion.
    let table       = TransitionTable::load(NUMBERS.bytes()).unwrap();
    let mut scanner = Scanner::new(&table, b"99".iter().copied());

    let token = scanner.next().unwrap();
    assert_eq!( token.lexeme(),  b"99" );
    assert_eq!( scanner.next(),  None  );
    assert_eq!( scanner.next(),  None  );
}

#[test]
fn determinism() {
    let a = scan(NUMBERS, " 12 3 456 ");
    let b = scan(NUMBERS, " 12 3 456 ");

    assert_eq!( a, b );
}

#[test]
fn words_with_escaped_class() {
    assert_eq!(
        scan(WORDS, "two\twords\n"),
        ["<WORD two>", "<WORD words>"]
    );
}

#[test]
fn one_table_many_sessions() {
    let table = TransitionTable::load(NUMBERS.bytes()).unwrap();

    let mut a = Scanner::new(&table, b"1 2".iter().copied());
    let mut b = Scanner::new(&table, b"34".iter().copied());

    // Sessions interleave freely; pushback state is per session.
    assert_eq!( a.next().unwrap().lexeme(), b"1"  );
    assert_eq!( b.next().unwrap().lexeme(), b"34" );
    assert_eq!( a.next().unwrap().lexeme(), b"2"  );
    assert_eq!( b.next(),                   None  );
    assert_eq!( a.next(),                   None  );
}

#[test]
fn rejected_table_produces_no_tokens() {
    let result = TransitionTable::load(
        ",2 2 2\nNUM\nWS\nS0\nS1\n0123456789\n \nS9,s,a,NUM\nS1,a,a,NUM\n".bytes(),
    );

    assert_eq!( result, Err(LoadError::UnknownState("S9".to_string())) );
}
