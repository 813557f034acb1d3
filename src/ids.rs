//! Place id generation.

use std::cell::Cell;

/// Default number of characters in a generated id.
pub const DEFAULT_ID_LENGTH: usize = 10;

const ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub trait IdGenerator {
    /// Returns an id that has not been handed out before.
    fn next_id(&self) -> String;
}

/// Random lowercase alphanumeric ids.
#[derive(Debug, Clone, Copy)]
pub struct NanoIdGenerator {
    length: usize,
}

impl NanoIdGenerator {
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(1),
        }
    }
}

impl Default for NanoIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for NanoIdGenerator {
    fn next_id(&self) -> String {
        nanoid::format(nanoid::rngs::default, &ALPHABET, self.length)
    }
}

/// Counter-based ids (`<prefix>1`, `<prefix>2`, ...) for deterministic tests.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}{}", self.prefix, n)
    }
}
