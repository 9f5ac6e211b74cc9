// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Character census of a binary string.

use crate::errors::InputError;

/// How many '0' and '1' characters a string holds.
///
/// These are the two budgets a string consumes when it is selected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitCounts {
    pub zeros: usize,
    pub ones: usize,
}

impl BitCounts {
    pub const fn new(zeros: usize, ones: usize) -> Self {
        Self { zeros, ones }
    }

    /// Count the characters of `s`, treating anything other than '0' as a one.
    pub fn of(s: &str) -> Self {
        let mut counts = Self::default();
        for c in s.chars() {
            if c == '0' {
                counts.zeros += 1;
            } else {
                counts.ones += 1;
            }
        }
        counts
    }

    /// Count the characters of `s`, rejecting anything other than '0' or '1'.
    ///
    /// `string_index` is only used to locate the offending string in the error.
    pub fn parse(string_index: usize, s: &str) -> Result<Self, InputError> {
        let mut counts = Self::default();
        for (position, c) in s.chars().enumerate() {
            match c {
                '0' => counts.zeros += 1,
                '1' => counts.ones += 1,
                found => {
                    return Err(InputError::NonBinaryCharacter {
                        string_index,
                        position,
                        found,
                    })
                }
            }
        }
        Ok(counts)
    }

    /// Whether a string with these counts fits in an `m` × `n` budget at all.
    pub fn fits(self, m: usize, n: usize) -> bool {
        self.zeros <= m && self.ones <= n
    }
}
