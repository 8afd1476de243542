//! Lexical helpers over raw module text.
//!
//! The icon modules are generated JavaScript. We never parse them fully; we
//! only need to know where each `{ ... }` object literal starts and ends so a
//! shape's props can be read without wandering into a neighbour's.

use std::ops::Range;

/// Every balanced `{ ... }` pair in a piece of source text.
///
/// Braces inside string and template literals are ignored. Unbalanced braces
/// (truncated modules) simply produce no span.
#[derive(Debug, Clone, Default)]
pub struct ObjectSpans {
    /// `(open, close)` byte offsets, sorted by `open`
    pairs: Vec<(usize, usize)>,
}

impl ObjectSpans {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut pairs = Vec::new();
        let mut stack: Vec<usize> = Vec::new();
        let mut quote: Option<u8> = None;
        let mut i = 0;

        while i < bytes.len() {
            let b = bytes[i];
            match quote {
                Some(q) => {
                    if b == b'\\' {
                        i += 1;
                    } else if b == q {
                        quote = None;
                    }
                },
                None => match b {
                    b'"' | b'\'' | b'`' => quote = Some(b),
                    b'{' => stack.push(i),
                    b'}' => {
                        if let Some(open) = stack.pop() {
                            pairs.push((open, i));
                        }
                    },
                    _ => {},
                },
            }
            i += 1;
        }

        pairs.sort_unstable();
        Self { pairs }
    }

    /// Span of the object literal opened at `open`, closing brace included
    pub fn object_at(&self, open: usize) -> Option<Range<usize>> {
        self.pairs
            .binary_search_by_key(&open, |&(o, _)| o)
            .ok()
            .map(|idx| {
                let (o, c) = self.pairs[idx];
                o..c + 1
            })
    }

    /// Innermost object literal that strictly contains `offset`
    pub fn enclosing(&self, offset: usize) -> Option<Range<usize>> {
        self.pairs
            .iter()
            .filter(|&&(open, close)| open < offset && offset < close)
            .max_by_key(|&&(open, _)| open)
            .map(|&(open, close)| open..close + 1)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Largest char boundary `<= index`
pub(crate) fn floor_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Smallest char boundary `>= index`
pub(crate) fn ceil_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}
