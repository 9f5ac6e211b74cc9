// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Runtime limits for the checked entry points.
//!
//! The strategy behind [`crate::length_of_longest_substring`] is chosen at
//! compile time instead, via the `window_map` / `window_two_pointer` features.

use crate::errors::InputError;

/// Default maximum number of DP table cells (64 Mi).
pub const DEFAULT_MAX_TABLE_CELLS: usize = 1 << 26;

/// Resource limits applied before any table is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    max_table_cells: usize,
}

impl Limits {
    /// Limits with default values.
    pub const fn new() -> Self {
        Self {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }

    /// Replace the maximum number of table cells.
    pub const fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = cells;
        self
    }

    pub fn max_table_cells(&self) -> usize {
        self.max_table_cells
    }

    /// Check that a table of `cells` entries fits within the limit.
    pub(crate) fn check_table(&self, cells: u128) -> Result<(), InputError> {
        if cells > self.max_table_cells as u128 {
            return Err(InputError::TableTooLarge {
                cells,
                limit: self.max_table_cells,
            });
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}
