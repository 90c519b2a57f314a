//! One-shot numerology reading assembly.

use anka_base::{
    BirthDate, EMPTY_ROW, Gender, build_grid, compatibility_row, complete_lines, conductor,
    driver, incomplete_lines, kua, resolve_number_groups,
};

use crate::luck::luck_projection;
use crate::name_rules::evaluate_name_rules;
use crate::reading_types::{NumerologyReading, ReadingConfig, RemedyReport};
use crate::remedies::{grid_gap_remedies, planet_remedies, yantra_remedies};

/// Compute the complete reading for a birth date, gender and full name.
///
/// Pure and deterministic: identical inputs produce identical output. The
/// luck window is anchored by `config.anchor_year`, never by the clock.
pub fn full_reading(
    birth: &BirthDate,
    gender: Gender,
    full_name: &str,
    config: &ReadingConfig,
) -> NumerologyReading {
    let driver = driver(birth.day);
    let conductor = conductor(birth.day, birth.month, birth.year);
    let kua = kua(birth.year, gender);

    let grid = build_grid(birth, driver, conductor, kua);
    let lines = complete_lines(&grid.present);
    let gaps = incomplete_lines(&grid.present);
    let numbers = resolve_number_groups(driver, conductor);

    let remedies = RemedyReport {
        grid_gap: grid_gap_remedies(&grid.missing, driver, conductor),
        yantra: yantra_remedies(&grid.missing, &grid.present, driver, conductor),
        planet: planet_remedies(&grid.missing),
    };

    let luck_factors = luck_projection(birth, driver, config);

    let name_analysis = evaluate_name_rules(
        full_name,
        driver,
        conductor,
        &numbers.bad,
        &grid.present,
        &grid.missing,
    );

    NumerologyReading {
        driver,
        conductor,
        kua,
        driver_compatibility: compatibility_row(driver).unwrap_or(&EMPTY_ROW),
        conductor_compatibility: compatibility_row(conductor).unwrap_or(&EMPTY_ROW),
        loshu_grid: grid,
        loshu_lines: lines,
        incomplete_lines: gaps,
        numbers,
        remedies,
        luck_factors,
        name_analysis,
    }
}
