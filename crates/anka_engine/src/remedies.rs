//! Remedy rule evaluation: grid-gap, yantra and planet remedy groups.
//!
//! Every rule is tested against the current reading; nothing is exclusive
//! and no rule suppresses another, so the output is the full list of
//! applicable remedies in the source's fixed order. The one structural
//! exception is the 6/7 watch pairing in group 1: the combined rule
//! consumes its two single-digit variants only when both digits are
//! missing.

use anka_base::{Planet, remedies_for_digit};

use crate::reading_types::{GapRemedy, PlanetRemedy, YantraRemedy};

fn has(set: &[u8], digit: u8) -> bool {
    set.contains(&digit)
}

/// Group 1: remedies for gaps in the Loshu grid.
pub fn grid_gap_remedies(missing: &[u8], driver: u8, conductor: u8) -> Vec<GapRemedy> {
    let mut remedies = Vec::new();

    if has(missing, 4) || has(missing, 3) {
        remedies.push(GapRemedy {
            condition: "4 or 3 is missing",
            remedy: "Wear Rudraksha Panchmukhi / Tulsi Mala / Wood Bracelet".to_string(),
        });
    }

    if has(missing, 2) || has(missing, 5) || has(missing, 8) {
        remedies.push(GapRemedy {
            condition: "2 or 5 or 8 is missing",
            remedy: "Wear Crystal Bracelet or Mala".to_string(),
        });
    }

    if has(missing, 6) && has(missing, 7) {
        remedies.push(GapRemedy {
            condition: "6 and 7 both are missing",
            remedy: "Wear Metal Strap Silver and Golden Colour Watch".to_string(),
        });
    } else {
        if has(missing, 6) {
            remedies.push(GapRemedy {
                condition: "6 is missing",
                remedy: "Wear Metal Strap Golden Colour Watch".to_string(),
            });
        }
        if has(missing, 7) {
            remedies.push(GapRemedy {
                condition: "7 is missing",
                remedy: "Wear Metal Strap Silver and Golden Colour Watch".to_string(),
            });
        }
    }

    if has(missing, 1) {
        let note = if driver == 8 || conductor == 8 {
            " (Note: Driver or Conductor is 8, so drink less water)"
        } else {
            " (Drink as much water as possible)"
        };
        remedies.push(GapRemedy {
            condition: "1 is missing",
            remedy: format!("Offer water to the Sun{note}"),
        });
    }

    if has(missing, 9) {
        remedies.push(GapRemedy {
            condition: "9 is missing",
            remedy: "Wear Red Coloured Thread".to_string(),
        });
    }

    remedies
}

/// Group 2: yantra remedies under compound digit/driver/conductor gates.
///
/// The gates are the source heuristics, implemented as stated; the Gayatri
/// rule is unconditional and always appended last.
pub fn yantra_remedies(
    missing: &[u8],
    present: &[u8],
    driver: u8,
    conductor: u8,
) -> Vec<YantraRemedy> {
    let mut remedies = Vec::new();

    if has(missing, 5) && has(present, 6) && driver != 8 && conductor != 8 {
        remedies.push(YantraRemedy {
            remedy: "Wear Surya Budha Yantra",
            condition: "5 is missing and 6 is present, but driver or conductor should not be 8",
        });
    }

    if has(missing, 5) && has(missing, 6) && driver != 3 && conductor != 3 {
        remedies.push(YantraRemedy {
            remedy: "Wear Budha Payra",
            condition: "5 and 6 are missing, but driver or conductor should not be 3",
        });
    }

    if has(missing, 6)
        && has(present, 5)
        && !matches!(driver, 3 | 8)
        && !matches!(conductor, 3 | 8)
    {
        remedies.push(YantraRemedy {
            remedy: "Wear Surya Payra",
            condition: "6 is missing and 5 is present, but driver or conductor should not be 8 or 3 (Pyra will not only take care of missing number 6 but also missing other numbers too)",
        });
    }

    if has(missing, 6)
        && has(present, 5)
        && (driver == 8 || conductor == 8)
        && driver != 3
        && conductor != 3
    {
        remedies.push(YantraRemedy {
            remedy: "Wear Pyra Yantra",
            condition: "6 is missing and 5 is present, driver or conductor is 8, but driver or conductor should not be 3",
        });
    }

    if ((driver == 3 && conductor == 8) || (driver == 8 && conductor == 3)) && has(missing, 5) {
        remedies.push(YantraRemedy {
            remedy: "Wear Budha Yantra",
            condition: "Driver-Conductor is 3-8 or 8-3, and 5 is missing",
        });
    }

    if ((driver == 3 && conductor == 6) || (driver == 6 && conductor == 3)) && has(present, 5) {
        remedies.push(YantraRemedy {
            remedy: "Wear Surya Yantra",
            condition: "Driver-Conductor is 3-6 or 6-3, and 5 is present",
        });
    }

    if driver != 6 && conductor != 6 {
        remedies.push(YantraRemedy {
            remedy: "Saraswati Yantra for the education of children",
            condition: "Driver or conductor should not be 6",
        });
    }

    remedies.push(YantraRemedy {
        remedy: "Wear Gayatri Yantra for health issues only",
        condition: "For health issues only",
    });

    remedies
}

/// Group 3: planet remedies for each missing digit, in ascending digit
/// order, texts verbatim.
pub fn planet_remedies(missing: &[u8]) -> Vec<PlanetRemedy> {
    let mut sorted: Vec<u8> = missing.to_vec();
    sorted.sort_unstable();

    sorted
        .into_iter()
        .filter_map(|digit| {
            let planet = Planet::from_digit(digit)?;
            let remedies = remedies_for_digit(digit)?;
            Some(PlanetRemedy { number: digit, planet: planet.name(), remedies })
        })
        .collect()
}
