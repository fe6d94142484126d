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

//! Input cursor with one byte of pushback.

// ----------------------------------------------------------------------------

/// Input cursor specialized for table-driven scanning.
///
/// A `Cursor` takes a sequence of bytes as input and provides a forward
/// cursor over it with exactly one byte of pushback capacity.  One byte is
/// sufficient by construction: the scanner decides that a token is complete
/// one byte past its end, and the table loader re-examines at most the byte
/// that terminated the previous field.
///
#[derive(Clone, Debug)]
pub struct Cursor<I: Iterator<Item = u8>> {
    pending: Option<u8>,
    pos:     usize,
    iter:    I,
}

impl<I: Iterator<Item = u8>> Cursor<I> {
    /// Creates a new [`Cursor`] over the given iterator.
    #[inline(always)]
    pub fn new(iter: I) -> Self {
        Self { pending: None, pos: 0, iter }
    }

    /// Reads the next byte, consuming the pushback byte first if one is
    /// present.  Returns `None` at end of input.
    #[inline(always)]
    pub fn next(&mut self) -> Option<u8> {
        let byte = match self.pending.take() {
            Some(b) => Some(b),
            None    => self.iter.next(),
        };
        self.pos += byte.is_some() as usize;
        byte
    }

    /// Pushes `byte` back onto the cursor, to be re-delivered by the next
    /// call to [`Self::next()`].
    ///
    /// # Panics
    ///
    /// Panics if a pushback byte is already present.
    ///
    #[inline(always)]
    pub fn unread(&mut self, byte: u8) {
        if self.pending.is_some() {
            panic!("Attempted to push back more than one byte.")
        }
        self.pending = Some(byte);
        self.pos -= 1;
    }

    /// Returns the count of bytes consumed so far, net of pushback.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_empty() {
        let mut cursor = Cursor::new(b"".iter().copied());

        assert_eq!( cursor.position(), 0    );
        assert_eq!( cursor.next(),     None );
        assert_eq!( cursor.position(), 0    );
    }

    #[test]
    fn cursor_next() {
        let mut cursor = Cursor::new(b"ab".iter().copied());

        assert_eq!( cursor.next(),     Some(b'a') );
        assert_eq!( cursor.position(), 1          );

        assert_eq!( cursor.next(),     Some(b'b') );
        assert_eq!( cursor.position(), 2          );

        assert_eq!( cursor.next(),     None       );
        assert_eq!( cursor.position(), 2          );

        assert_eq!( cursor.next(),     None       );
        assert_eq!( cursor.position(), 2          );
    }

    #[test]
    fn cursor_unread() {
        let mut cursor = Cursor::new(b"ab".iter().copied());

        assert_eq!( cursor.next(),     Some(b'a') );

        cursor.unread(b'a');
        assert_eq!( cursor.position(), 0          );

        assert_eq!( cursor.next(),     Some(b'a') );
        assert_eq!( cursor.next(),     Some(b'b') );
        assert_eq!( cursor.next(),     None       );
    }

    #[test]
    fn cursor_unread_at_end() {
        let mut cursor = Cursor::new(b"a".iter().copied());

        assert_eq!( cursor.next(), Some(b'a') );
        assert_eq!( cursor.next(), None       );

        cursor.unread(b'a');
        assert_eq!( cursor.next(), Some(b'a') );
        assert_eq!( cursor.next(), None       );
    }

    #[test]
    #[should_panic]
    fn cursor_unread_twice() {
        let mut cursor = Cursor::new(b"ab".iter().copied());

        let _ = cursor.next();
        cursor.unread(b'a');
        cursor.unread(b'a');
    }
}
