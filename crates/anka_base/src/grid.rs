//! Personalized Loshu grid construction.
//!
//! The fixed 3×3 template is annotated with occurrence counts gathered from
//! the birth date digits plus driver, conductor and kua. A single-digit
//! birth day contributes once and its digit is capped at count 1 afterwards,
//! discarding coinciding driver/conductor/kua increments; days 10-31 get no
//! such cap. That asymmetry is part of the source arithmetic.

use serde::Serialize;

use crate::core_numbers::BirthDate;
use crate::digit::nonzero_digits;

/// The fixed Loshu template.
pub const LOSHU_TEMPLATE: [[u8; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

/// One grid cell: its template digit, how often the digit occurs, and the
/// rendered value (digit repeated `count` times when present).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub digit: u8,
    pub count: u8,
    pub present: bool,
    pub value: String,
}

/// The personalized grid with derived missing/present digit sets, both
/// sorted ascending. Built once per reading, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoshuGrid {
    pub cells: [[GridCell; 3]; 3],
    pub missing: Vec<u8>,
    pub present: Vec<u8>,
}

impl LoshuGrid {
    /// Occurrence count for a digit 1-9 (0 otherwise).
    pub fn count_of(&self, digit: u8) -> u8 {
        self.cells
            .iter()
            .flatten()
            .find(|cell| cell.digit == digit)
            .map_or(0, |cell| cell.count)
    }
}

/// Build the personalized grid from a birth date and the derived numbers.
pub fn build_grid(birth: &BirthDate, driver: u8, conductor: u8, kua: u8) -> LoshuGrid {
    let mut counts = [0u8; 10];

    // Day: per-digit for 10-31, the whole value for 1-9.
    if birth.day >= 10 {
        for d in nonzero_digits(birth.day as u32) {
            counts[d as usize] += 1;
        }
    } else {
        counts[birth.day as usize] += 1;
    }

    for d in nonzero_digits(birth.month as u32) {
        counts[d as usize] += 1;
    }
    for d in nonzero_digits(birth.year) {
        counts[d as usize] += 1;
    }

    counts[driver as usize] += 1;
    counts[conductor as usize] += 1;
    counts[kua as usize] += 1;

    // Single-digit day: its digit ends at exactly 1, whatever else matched.
    if birth.day < 10 {
        counts[birth.day as usize] = 1;
    }

    let cells = std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let digit = LOSHU_TEMPLATE[row][col];
            let count = counts[digit as usize];
            let value = if count > 0 {
                digit.to_string().repeat(count as usize)
            } else {
                digit.to_string()
            };
            GridCell { digit, count, present: count > 0, value }
        })
    });

    let mut missing = Vec::new();
    let mut present = Vec::new();
    for digit in 1..=9u8 {
        if counts[digit as usize] > 0 {
            present.push(digit);
        } else {
            missing.push(digit);
        }
    }

    LoshuGrid { cells, missing, present }
}
