//! Letter value table and name value derivation.
//!
//! The 26-letter mapping is the source material's own (Chaldean-flavoured,
//! no letter maps to 9). Characters outside the table contribute nothing to
//! a name's total; spaces are kept in breakdowns as placeholders.

use serde::Serialize;

use crate::digit::reduce_to_digit;

/// Numerology value of a letter (case-insensitive). None for characters
/// outside the 26-entry table.
pub const fn letter_value(letter: char) -> Option<u8> {
    match letter.to_ascii_uppercase() {
        'A' | 'I' | 'J' | 'Q' | 'Y' => Some(1),
        'B' | 'K' | 'R' => Some(2),
        'C' | 'G' | 'L' | 'S' => Some(3),
        'D' | 'M' | 'T' => Some(4),
        'E' | 'H' | 'N' | 'X' => Some(5),
        'U' | 'V' | 'W' => Some(6),
        'O' | 'Z' => Some(7),
        'F' | 'P' => Some(8),
        _ => None,
    }
}

/// Single-digit value of a name: mapped letter values summed, then reduced.
pub fn name_value(name: &str) -> u8 {
    let total: u32 = name.chars().filter_map(|ch| letter_value(ch)).map(u32::from).sum();
    reduce_to_digit(total)
}

/// One entry of a per-letter breakdown. `value` is None for the space
/// placeholder entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NameLetter {
    pub letter: char,
    pub value: Option<u8>,
}

impl NameLetter {
    /// Display form of the value ("-" for placeholders).
    pub fn display_value(&self) -> String {
        match self.value {
            Some(v) => v.to_string(),
            None => "-".to_string(),
        }
    }
}

/// Detailed per-letter breakdown of a name value calculation.
///
/// Letters in the table appear with their value, spaces appear with a
/// placeholder, all other characters are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameBreakdown {
    pub breakdown: Vec<NameLetter>,
    pub raw_total: u32,
    pub final_value: u8,
}

/// Compute the breakdown for a name.
pub fn name_breakdown(name: &str) -> NameBreakdown {
    let mut breakdown = Vec::new();
    let mut total: u32 = 0;

    for ch in name.chars() {
        let upper = ch.to_ascii_uppercase();
        if let Some(value) = letter_value(upper) {
            breakdown.push(NameLetter { letter: upper, value: Some(value) });
            total += u32::from(value);
        } else if upper == ' ' {
            breakdown.push(NameLetter { letter: ' ', value: None });
        }
    }

    NameBreakdown {
        breakdown,
        raw_total: total,
        final_value: reduce_to_digit(total),
    }
}
