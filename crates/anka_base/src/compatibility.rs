//! Planet compatibility rows and the lucky/bad/neutral resolution.
//!
//! Row data is reproduced verbatim from the source table, including its raw
//! annotation strings and the overlaps the annotations mark (Rahu and Shani
//! list 4 and 8 as both friend and non-friend). The sets are never
//! normalized; the resolution below gives non-friend membership priority.

use serde::Serialize;

/// Compatibility row for one digit: friend/non-friend/neutral digit sets
/// plus the raw annotations they were transcribed from.
///
/// The three sets need not partition 1-9 and may overlap; the `neutral`
/// field is informational only and takes no part in resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityRow {
    pub planet: &'static str,
    pub friends: &'static [u8],
    pub friends_raw: &'static str,
    pub non_friends: &'static [u8],
    pub non_friends_raw: &'static str,
    pub neutral: &'static [u8],
    pub neutral_raw: &'static str,
}

/// Defensive default for out-of-range lookups: all sets empty.
pub const EMPTY_ROW: CompatibilityRow = CompatibilityRow {
    planet: "",
    friends: &[],
    friends_raw: "",
    non_friends: &[],
    non_friends_raw: "",
    neutral: &[],
    neutral_raw: "",
};

static ROWS: [CompatibilityRow; 9] = [
    CompatibilityRow {
        planet: "Sun (Surya)",
        friends: &[9, 2, 5, 3, 6, 1],
        friends_raw: "9, 2, 5(A), 3, 6, 1(B)",
        non_friends: &[8],
        non_friends_raw: "8 - Saturn being illegitimate child of SUN",
        neutral: &[4, 7],
        neutral_raw: "4, 7",
    },
    CompatibilityRow {
        planet: "Moon (Chandr)",
        friends: &[1, 5, 3, 2],
        friends_raw: "1, 5, 3(A), 2(B)",
        non_friends: &[8, 4, 9],
        non_friends_raw: "8, 4, 9",
        neutral: &[7, 6],
        neutral_raw: "7, 6",
    },
    CompatibilityRow {
        planet: "Jupiter (Guru)",
        friends: &[1, 5, 3, 2, 7],
        friends_raw: "1, 5, 3, 2, 7* (from knowledge perspective)",
        non_friends: &[6],
        non_friends_raw: "6",
        neutral: &[4, 8, 9],
        neutral_raw: "4, 8, 9, 7* (from monetary success perspective)",
    },
    CompatibilityRow {
        planet: "Uranus (Rahu)",
        friends: &[7, 1, 5, 6, 4, 8],
        friends_raw: "7, 1, 5, 6, 4*, 8*",
        non_friends: &[4, 8, 9, 2],
        non_friends_raw: "4*, 8*, 9, 2",
        neutral: &[3],
        neutral_raw: "3",
    },
    CompatibilityRow {
        planet: "Mercury (Budh)",
        friends: &[1, 2, 6, 3, 5],
        friends_raw: "1, 2, 6(A), 3, 5(B)",
        non_friends: &[],
        non_friends_raw: "--------",
        neutral: &[8, 7, 4, 9],
        neutral_raw: "8, 7, 4, 9",
    },
    CompatibilityRow {
        planet: "Venus (Shukar)",
        friends: &[1, 7, 5, 6],
        friends_raw: "1, 7, 5, 6",
        non_friends: &[3],
        non_friends_raw: "3",
        neutral: &[8, 9, 2, 4],
        neutral_raw: "8, 9, 2, 4",
    },
    CompatibilityRow {
        planet: "Neptune (Ketu)",
        friends: &[4, 6, 1, 3, 5],
        friends_raw: "4, 6, 1, 3, 5",
        non_friends: &[],
        non_friends_raw: "--------",
        neutral: &[8, 9, 2, 7],
        neutral_raw: "8, 9, 2, 7",
    },
    CompatibilityRow {
        planet: "Saturn (Shani)",
        friends: &[5, 3, 6, 7, 4, 8],
        friends_raw: "5, 3, 6, 7, 4*, 8*",
        non_friends: &[1, 4, 8, 2],
        non_friends_raw: "1, 4*, 8*, 2",
        neutral: &[9],
        neutral_raw: "9",
    },
    CompatibilityRow {
        planet: "Mars (Mangal)",
        friends: &[1, 5, 3],
        friends_raw: "1, 5, 3",
        non_friends: &[4, 2],
        non_friends_raw: "4, 2",
        neutral: &[9, 7, 6, 8],
        neutral_raw: "9, 7, 6, 8",
    },
];

/// Compatibility row for a digit 1-9. None outside that range.
pub fn compatibility_row(digit: u8) -> Option<&'static CompatibilityRow> {
    if (1..=9).contains(&digit) {
        Some(&ROWS[(digit - 1) as usize])
    } else {
        None
    }
}

/// Lucky, bad and neutral digit classification for a driver/conductor pair.
///
/// Disjoint by construction and together covering 1-9 exactly, each sorted
/// ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberGroups {
    pub lucky: Vec<u8>,
    pub bad: Vec<u8>,
    pub neutral: Vec<u8>,
}

/// Resolve lucky/bad/neutral digits from the driver's and conductor's rows.
///
/// Bad = union of non-friends (membership there always wins); lucky = union
/// of friends minus bad; neutral = the rest of 1-9.
pub fn resolve_number_groups(driver: u8, conductor: u8) -> NumberGroups {
    let d = compatibility_row(driver).unwrap_or(&EMPTY_ROW);
    let c = compatibility_row(conductor).unwrap_or(&EMPTY_ROW);

    let mut bad_mask = [false; 10];
    for &n in d.non_friends.iter().chain(c.non_friends.iter()) {
        bad_mask[n as usize] = true;
    }

    let mut lucky_mask = [false; 10];
    for &n in d.friends.iter().chain(c.friends.iter()) {
        if !bad_mask[n as usize] {
            lucky_mask[n as usize] = true;
        }
    }

    let mut groups = NumberGroups { lucky: Vec::new(), bad: Vec::new(), neutral: Vec::new() };
    for digit in 1..=9u8 {
        if bad_mask[digit as usize] {
            groups.bad.push(digit);
        } else if lucky_mask[digit as usize] {
            groups.lucky.push(digit);
        } else {
            groups.neutral.push(digit);
        }
    }
    groups
}
