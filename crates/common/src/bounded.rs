//! Fixed-capacity strings.
//!
//! Every string the machine holds (instruction arguments, label names, the
//! token buffer, the output line) has a hard byte capacity. Appending past
//! it is an error and leaves the contents unchanged.

use std::fmt;

use crate::error::{Buffer, CapacityExceeded};

/// A string with a fixed byte capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedString {
    text: String,
    capacity: usize,
    buffer: Buffer,
}

impl BoundedString {
    /// Create an empty string that reports overflow as `buffer`.
    pub fn new(buffer: Buffer, capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
            buffer,
        }
    }

    /// Create a bounded string holding `text`, or fail if it does not fit.
    pub fn with_text(buffer: Buffer, capacity: usize, text: &str) -> Result<Self, CapacityExceeded> {
        let mut s = Self::new(buffer, capacity);
        s.push_str(text)?;
        Ok(s)
    }

    /// Append `text`. On overflow nothing is appended.
    pub fn push_str(&mut self, text: &str) -> Result<(), CapacityExceeded> {
        if self.text.len() + text.len() > self.capacity {
            return Err(self.overflow());
        }
        self.text.push_str(text);
        Ok(())
    }

    /// Append a single character.
    pub fn push(&mut self, c: char) -> Result<(), CapacityExceeded> {
        if self.text.len() + c.len_utf8() > self.capacity {
            return Err(self.overflow());
        }
        self.text.push(c);
        Ok(())
    }

    /// Remove and return the contents, leaving the string empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn overflow(&self) -> CapacityExceeded {
        CapacityExceeded {
            buffer: self.buffer,
            capacity: self.capacity,
        }
    }
}

impl fmt::Display for BoundedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
