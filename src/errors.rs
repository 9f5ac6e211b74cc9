// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the checked entry points.
//!
//! The plain kernels are total over their documented inputs and never fail.
//! The `*_checked` variants validate the input first and report the first
//! violation found.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Input rejected at the boundary of a checked entry point.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum InputError {
    /// The sequence must contain at least one element.
    EmptyInput,

    /// Partition elements must be strictly positive.
    NonPositiveElement { index: usize, value: i64 },

    /// The running total no longer fits in the sum type.
    SumOverflow { index: usize },

    /// A string handed to the max-form kernel contains something other than '0' or '1'.
    NonBinaryCharacter {
        string_index: usize,
        position: usize,
        found: char,
    },

    /// The DP table would exceed the configured cell limit.
    TableTooLarge { cells: u128, limit: usize },
}

impl InputError {
    /// Dense index of the variant, used to count failures per kind.
    pub fn ordinal(&self) -> usize {
        match self {
            InputError::EmptyInput => 0,
            InputError::NonPositiveElement { .. } => 1,
            InputError::SumOverflow { .. } => 2,
            InputError::NonBinaryCharacter { .. } => 3,
            InputError::TableTooLarge { .. } => 4,
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyInput => write!(f, "Input sequence is empty"),
            InputError::NonPositiveElement { index, value } => {
                write!(f, "Element {} is {} (must be positive)", index, value)
            }
            InputError::SumOverflow { index } => {
                write!(f, "Sum overflows at element {}", index)
            }
            InputError::NonBinaryCharacter {
                string_index,
                position,
                found,
            } => {
                write!(
                    f,
                    "String {} has {:?} at position {} (expected '0' or '1')",
                    string_index, found, position
                )
            }
            InputError::TableTooLarge { cells, limit } => {
                write!(f, "Table needs {} cells (limit {})", cells, limit)
            }
        }
    }
}

impl std::error::Error for InputError {}
