//! Static tables and primitive derivations for Vedic numerology readings.
//!
//! This crate provides:
//! - Digit reduction and the driver/conductor/kua/personal-year numbers
//! - The planet rulership of digits 1-9 and the compatibility table
//! - The letter value table and name value breakdowns
//! - The personalized Loshu grid builder and line completion analysis
//! - The luck factor table and planet remedy texts
//!
//! Everything here is a pure function of its inputs and process-lifetime
//! constant data; there are no failure modes for caller-validated inputs.

pub mod compatibility;
pub mod core_numbers;
pub mod digit;
pub mod grid;
pub mod letters;
pub mod line;
pub mod luck;
pub mod planet;
pub mod remedy_data;

pub use compatibility::{
    CompatibilityRow, EMPTY_ROW, NumberGroups, compatibility_row, resolve_number_groups,
};
pub use core_numbers::{BirthDate, Gender, conductor, driver, kua, personal_year};
pub use digit::{digit_sum, nonzero_digits, reduce_to_digit};
pub use grid::{GridCell, LOSHU_TEMPLATE, LoshuGrid, build_grid};
pub use letters::{NameBreakdown, NameLetter, letter_value, name_breakdown, name_value};
pub use line::{
    CompleteLine, IncompleteLine, LOSHU_LINES, LineOrientation, LineReport, LoshuLine,
    complete_lines, incomplete_lines, line_summary,
};
pub use luck::luck_label;
pub use planet::{ALL_PLANETS, Planet};
pub use remedy_data::remedies_for_digit;
