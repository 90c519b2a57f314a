//! Luck projection over a rolling window of calendar years.

use anka_base::{BirthDate, luck_label, personal_year};

use crate::reading_types::{LuckYear, ReadingConfig};

/// Project the luck factor for each year of the window, ascending by year.
///
/// Each entry carries the personal year for that target year and the
/// (personal year, driver) table label.
pub fn luck_projection(birth: &BirthDate, driver: u8, config: &ReadingConfig) -> Vec<LuckYear> {
    (0..config.luck_years)
        .map(|i| {
            let year = config.anchor_year + i as i32;
            let py = personal_year(birth.day, birth.month, year.max(0) as u32);
            LuckYear {
                year,
                date: format!("{:02}/{:02}/{}", birth.day, birth.month, year),
                personal_year: py,
                driver,
                combination: format!("{py},{driver}"),
                luck_factor: luck_label(py, driver),
            }
        })
        .collect()
}
