//! Recursive-descent reader for the crate's infix literal/apostrophe grammar.
//!
//! ```text
//! expr    := term ('+' term)*
//! term    := factor+
//! factor  := '[' index ']' '\''?  |  '(' expr ')' '\''?
//! ```
//!
//! Unlike the reference implementation, unrecognised bytes are rejected
//! rather than silently skipped, and whitespace is never implicitly
//! accepted — every byte of the input participates in the grammar.

use crate::errors::ParseError;

use super::algebra::{conjoin, disjoin, invert, literal};
use super::arena::{Arena, NodeHandle};

/// Parses `text` as a complete expression, failing if any trailing bytes
/// remain after a well-formed `expr`.
pub fn parse(arena: &mut Arena, text: &str) -> Result<NodeHandle, ParseError> {
    let bytes = text.as_bytes();
    let mut reader = Reader { bytes, offset: 0 };
    let node = reader.expr(arena)?;
    if reader.offset != bytes.len() {
        return Err(ParseError::TrailingInput { offset: reader.offset });
    }
    Ok(node)
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.offset += 1;
        Some(byte)
    }

    /// `expr := term ('+' term)*`
    fn expr(&mut self, arena: &mut Arena) -> Result<NodeHandle, ParseError> {
        let mut acc = self.term(arena)?;
        while self.peek() == Some(b'+') {
            self.bump();
            let next = self.term(arena)?;
            acc = disjoin(arena, acc, next);
        }
        Ok(acc)
    }

    /// `term := factor+`, stopping at end of input, `+`, or `)`.
    fn term(&mut self, arena: &mut Arena) -> Result<NodeHandle, ParseError> {
        let mut acc: Option<NodeHandle> = None;
        loop {
            match self.peek() {
                None | Some(b'+') | Some(b')') => break,
                Some(b'[') | Some(b'(') => {
                    let factor = self.factor(arena)?;
                    acc = Some(match acc {
                        Some(prev) => conjoin(arena, prev, factor),
                        None => factor,
                    });
                }
                Some(byte) => return Err(ParseError::UnexpectedByte { offset: self.offset, byte }),
            }
        }
        Ok(acc.unwrap_or(NodeHandle::One))
    }

    /// `factor := '[' index ']' '\''?  |  '(' expr ')' '\''?`
    fn factor(&mut self, arena: &mut Arena) -> Result<NodeHandle, ParseError> {
        match self.peek() {
            Some(b'[') => {
                self.bump();
                let index = self.index(arena)?;
                match self.bump() {
                    Some(b']') => {}
                    _ => return Err(ParseError::UnterminatedLiteral { offset: self.offset }),
                }
                let node = literal(arena, index, true);
                Ok(self.maybe_negate(arena, node))
            }
            Some(b'(') => {
                self.bump();
                let inner = self.expr(arena)?;
                match self.bump() {
                    Some(b')') => {}
                    _ => return Err(ParseError::UnterminatedGroup { offset: self.offset }),
                }
                Ok(self.maybe_negate(arena, inner))
            }
            Some(byte) => Err(ParseError::UnexpectedByte { offset: self.offset, byte }),
            None => Err(ParseError::UnexpectedByte { offset: self.offset, byte: 0 }),
        }
    }

    fn maybe_negate(&mut self, arena: &mut Arena, node: NodeHandle) -> NodeHandle {
        if self.peek() == Some(b'\'') {
            self.bump();
            invert(arena, node)
        } else {
            node
        }
    }

    /// A run of ASCII digits, parsed as a `u32` variable index.
    fn index(&mut self, arena: &mut Arena) -> Result<u32, ParseError> {
        let _ = arena;
        let start = self.offset;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.bump();
        }
        if self.offset == start {
            return Err(ParseError::InvalidIndex { offset: start });
        }
        std::str::from_utf8(&self.bytes[start..self.offset])
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(ParseError::InvalidIndex { offset: start })
    }
}
