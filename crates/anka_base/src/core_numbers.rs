//! Core number derivations: driver, conductor, kua, personal year.
//!
//! The conductor sums digits across the unpadded decimal renderings of
//! day, month and year (day 5 contributes "5", never "05"). Kua has its
//! own reduction branch keyed on gender.

use serde::Serialize;

use crate::digit::{digit_sum, reduce_to_digit};

/// A calendar-validated birth date. Validation (day/month ranges, real
/// calendar dates, no future dates) happens at the caller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    /// Day of month, 1-31.
    pub day: u8,
    /// Month, 1-12.
    pub month: u8,
    /// Positive calendar year.
    pub year: u32,
}

impl BirthDate {
    pub const fn new(day: u8, month: u8, year: u32) -> Self {
        Self { day, month, year }
    }
}

/// Gender, used only by the kua derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Driver number: the birth day reduced to a single digit.
pub const fn driver(day: u8) -> u8 {
    reduce_to_digit(day as u32)
}

/// Conductor number: digit sum over day, month and year, reduced.
pub const fn conductor(day: u8, month: u8, year: u32) -> u8 {
    let total = digit_sum(day as u32) + digit_sum(month as u32) + digit_sum(year);
    reduce_to_digit(total)
}

/// Kua number from birth year and gender.
///
/// The year digit is the reduced digit sum of the year (reduced twice, as
/// the source arithmetic does). Male: `11 - year_digit`; female:
/// `4 + year_digit`; either is reduced again when it exceeds 9.
pub const fn kua(year: u32, gender: Gender) -> u8 {
    let year_digit = reduce_to_digit(reduce_to_digit(digit_sum(year)) as u32) as u32;
    let raw = match gender {
        Gender::Male => 11 - year_digit,
        Gender::Female => 4 + year_digit,
    };
    if raw > 9 { reduce_to_digit(raw) } else { raw as u8 }
}

/// Personal year for a target calendar year: `day + month + digit_sum(year)`,
/// reduced.
pub const fn personal_year(day: u8, month: u8, target_year: u32) -> u8 {
    reduce_to_digit(day as u32 + month as u32 + digit_sum(target_year))
}
