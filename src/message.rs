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

//! Diagnostic messages.

use std::fmt::{self, Arguments, Display, Formatter};

use colored::Colorize;

// ----------------------------------------------------------------------------

/// A diagnostic message.
#[derive(Copy, Clone, Debug)]
pub struct Message<'a> {
    /// Severity of the message.
    pub severity: Severity,

    /// Path of a file related to the message, or the program name if no
    /// file is related.
    pub source: &'a str,

    /// Message content.
    content: Arguments<'a>,
}

impl<'a> Message<'a> {
    /// Creates a `Message` with the given severity and format arguments,
    /// without a related file path.
    #[inline]
    pub const fn new(sev: Severity, args: Arguments<'a>) -> Self {
        Self::at(crate::PROGRAM_NAME, sev, args)
    }

    /// Creates a `Message` with the given severity and format arguments,
    /// related to the given file path.
    #[inline]
    pub const fn at(path: &'a str, sev: Severity, args: Arguments<'a>) -> Self {
        Self {
            severity: sev,
            source:   path,
            content:  args,
        }
    }
}

// Display is used when a Message is printed as output.
impl Display for Message<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}{}",
            self.source,
            self.severity,
            self.content
        )
    }
}

// ----------------------------------------------------------------------------

/// Message severity levels.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Severity {
    /// For informational messages.
    Normal,

    /// For potential problems that do not prevent scanning.
    Warning,

    /// For problems that prevent scanning.
    Error,

    /// For severe, unrecoverable problems.  The program terminates
    /// immediately and does not produce output.
    Fatal,
}

// Display is used when a Severity is printed in a diagnostic message.
impl Display for Severity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Severity::Normal  => Ok(()),
            Severity::Warning => write!(f, "{}", "warning: ".yellow()),
            Severity::Error   => write!(f, "{}", "error: "  .red()),
            Severity::Fatal   => write!(f, "{}", "fatal: "  .red()),
        }
    }
}

// ----------------------------------------------------------------------------

/// Creates a 'file not found' message.
pub fn file_not_found_error(path: &str) -> Message {
    Message::at(path, Severity::Fatal, format_args!(
        "file not found or not readable"
    ))
}

/// Creates a usage message for a wrong argument count.
pub fn usage_error() -> Message<'static> {
    Message::new(Severity::Fatal, format_args!(
        "usage: tlex TABLE-FILE INPUT-FILE"
    ))
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(msg: Message) -> String {
        colored::control::set_override(false);
        format!("{}", msg)
    }

    #[test]
    fn test_file_not_found_error() {
        assert_eq!(
            plain(file_not_found_error("numbers.tbl")),
            "numbers.tbl: fatal: file not found or not readable"
        )
    }

    #[test]
    fn test_usage_error() {
        assert_eq!(
            plain(usage_error()),
            "tlex: fatal: usage: tlex TABLE-FILE INPUT-FILE"
        )
    }

    #[test]
    fn test_normal_severity_is_silent() {
        assert_eq!(
            plain(Message::new(Severity::Normal, format_args!("hello"))),
            "tlex: hello"
        )
    }
}
