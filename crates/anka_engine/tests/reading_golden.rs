//! Golden-value integration tests for the full reading pipeline.
//!
//! Pins the reference scenarios end to end: the 15/6/1990 male and
//! 5/3/2000 female charts, the "AB" name breakdown, the lucky/bad/neutral
//! partition over every driver/conductor pair, and full determinism with
//! an injected anchor year.

use anka_base::{BirthDate, Gender, resolve_number_groups};
use anka_engine::{ReadingConfig, RuleStatus, full_reading};

fn config() -> ReadingConfig {
    ReadingConfig::for_year(2025)
}

// ===== Scenario: 15 June 1990, male =====

#[test]
fn male_1990_core_numbers() {
    let birth = BirthDate::new(15, 6, 1990);
    let reading = full_reading(&birth, Gender::Male, "Arjun Kumar", &config());

    // driver = reduce(15) = 6
    assert_eq!(reading.driver, 6);
    // conductor = reduce(1+5+6+1+9+9+0) = reduce(31) = 4
    assert_eq!(reading.conductor, 4);
    // year digit = reduce(19) = 1, kua = 11 - 1 = 10 -> 1
    assert_eq!(reading.kua, 1);
}

#[test]
fn male_1990_grid_counts() {
    let birth = BirthDate::new(15, 6, 1990);
    let reading = full_reading(&birth, Gender::Male, "Arjun Kumar", &config());
    let grid = &reading.loshu_grid;

    // Day 15 contributes per-digit (1 and 5); no cap applies.
    assert_eq!(grid.count_of(1), 3); // day, year, kua
    assert_eq!(grid.count_of(5), 1);
    assert_eq!(grid.count_of(6), 2); // month, driver
    assert_eq!(grid.count_of(9), 2);
    assert_eq!(grid.count_of(4), 1); // conductor
    assert_eq!(grid.missing, vec![2, 3, 7, 8]);
    assert_eq!(grid.present, vec![1, 4, 5, 6, 9]);
}

#[test]
fn male_1990_complete_lines() {
    let birth = BirthDate::new(15, 6, 1990);
    let reading = full_reading(&birth, Gender::Male, "Arjun Kumar", &config());

    // Present {1,4,5,6,9} completes 4-5-6 and 9-5-1.
    let names: Vec<&str> = reading.loshu_lines.all.iter().map(|l| l.name).collect();
    assert_eq!(
        names,
        vec!["Super Success Line (Raj Yoga)", "Will Plane (Symbol of Success)"]
    );
    assert_eq!(reading.incomplete_lines.len(), 6);
}

#[test]
fn male_1990_number_groups() {
    let birth = BirthDate::new(15, 6, 1990);
    let reading = full_reading(&birth, Gender::Male, "Arjun Kumar", &config());

    // Driver 6 (Venus): friends {1,7,5,6}, non-friends {3}.
    // Conductor 4 (Rahu): friends {7,1,5,6,4,8}, non-friends {4,8,9,2}.
    assert_eq!(reading.numbers.bad, vec![2, 3, 4, 8, 9]);
    assert_eq!(reading.numbers.lucky, vec![1, 5, 6, 7]);
    assert!(reading.numbers.neutral.is_empty());
}

#[test]
fn male_1990_remedies() {
    let birth = BirthDate::new(15, 6, 1990);
    let reading = full_reading(&birth, Gender::Male, "Arjun Kumar", &config());

    // Missing {2,3,7,8}: bracelet (3), crystal (2/8), silver-gold watch (7).
    let conditions: Vec<&str> =
        reading.remedies.grid_gap.iter().map(|r| r.condition).collect();
    assert_eq!(
        conditions,
        vec!["4 or 3 is missing", "2 or 5 or 8 is missing", "7 is missing"]
    );

    // Planet remedies in ascending digit order.
    let digits: Vec<u8> = reading.remedies.planet.iter().map(|r| r.number).collect();
    assert_eq!(digits, vec![2, 3, 7, 8]);
    let planets: Vec<&str> = reading.remedies.planet.iter().map(|r| r.planet).collect();
    assert_eq!(planets, vec!["Moon", "Jupiter", "Ketu", "Saturn"]);

    // Yantras: driver 6 suppresses Saraswati; Gayatri is always last.
    let yantras: Vec<&str> = reading.remedies.yantra.iter().map(|r| r.remedy).collect();
    assert_eq!(yantras, vec!["Wear Gayatri Yantra for health issues only"]);
}

#[test]
fn male_1990_luck_projection() {
    let birth = BirthDate::new(15, 6, 1990);
    let reading = full_reading(&birth, Gender::Male, "Arjun Kumar", &config());

    assert_eq!(reading.luck_factors.len(), 6);
    let first = &reading.luck_factors[0];
    assert_eq!(first.year, 2025);
    assert_eq!(first.date, "15/06/2025");
    // 15 + 6 + (2+0+2+5) = 30 -> 3; (3, 6) -> "(-)".
    assert_eq!(first.personal_year, 3);
    assert_eq!(first.combination, "3,6");
    assert_eq!(first.luck_factor, "(-)");
    // Years ascend one by one.
    for (i, row) in reading.luck_factors.iter().enumerate() {
        assert_eq!(row.year, 2025 + i as i32);
        assert_eq!(row.driver, 6);
    }
}

// ===== Scenario: 5 March 2000, female =====

#[test]
fn female_2000_core_numbers_and_cap() {
    let birth = BirthDate::new(5, 3, 2000);
    let reading = full_reading(&birth, Gender::Female, "Mira Devi", &config());

    assert_eq!(reading.driver, 5);
    // conductor = reduce(5+3+2) = 1
    assert_eq!(reading.conductor, 1);
    // year digit = reduce(2) = 2, kua = 4 + 2 = 6
    assert_eq!(reading.kua, 6);

    // Driver 5 coincides with the single-digit day; the cap forces the
    // digit's count back to exactly 1.
    assert_eq!(reading.loshu_grid.count_of(5), 1);
}

#[test]
fn female_2000_grid_sets() {
    let birth = BirthDate::new(5, 3, 2000);
    let reading = full_reading(&birth, Gender::Female, "Mira Devi", &config());

    // Contributions: day 5 (capped), month 3, year 2, conductor 1, kua 6.
    assert_eq!(reading.loshu_grid.present, vec![1, 2, 3, 5, 6]);
    assert_eq!(reading.loshu_grid.missing, vec![4, 7, 8, 9]);
}

// ===== Scenario: name "AB" =====

#[test]
fn name_ab_breakdown() {
    let birth = BirthDate::new(15, 6, 1990);
    let reading = full_reading(&birth, Gender::Male, "AB", &config());
    let analysis = &reading.name_analysis;

    assert_eq!(analysis.full_name_value, 3);
    let breakdown = &analysis.full_name_breakdown;
    assert_eq!(breakdown.raw_total, 3);
    assert_eq!(breakdown.breakdown.len(), 2);
    assert_eq!(breakdown.breakdown[0].letter, 'A');
    assert_eq!(breakdown.breakdown[0].value, Some(1));
    assert_eq!(breakdown.breakdown[1].letter, 'B');
    assert_eq!(breakdown.breakdown[1].value, Some(2));
}

#[test]
fn name_rules_partition_for_reference_chart() {
    // 15/6/1990: driver 6, conductor 4, bad {2,3,4,8,9}, missing {2,3,7,8}.
    let birth = BirthDate::new(15, 6, 1990);
    let reading = full_reading(&birth, Gender::Male, "AB", &config());
    let analysis = &reading.name_analysis;

    // "AB" totals 3. Rules 3 and 4 pass; rule 5 contradicts (3 is Venus's
    // non-friend); rule 6 contradicts (3 is a bad number); rule 7's gate is
    // open (5 and 6 present, no 8) and 3 != 1 contradicts it; rule 8 is
    // skipped (5 not missing); rule 9 is skipped (6 not missing); rule 10
    // is skipped (3 missing but driver is 6).
    let followed: Vec<&str> = analysis.followed_rules.iter().map(|r| r.rule).collect();
    let contradicted: Vec<&str> =
        analysis.contradicted_rules.iter().map(|r| r.rule).collect();
    assert_eq!(followed, vec!["Rule 3", "Rule 4"]);
    assert_eq!(contradicted, vec!["Rule 5", "Rule 6", "Rule 7"]);
    assert_eq!(analysis.overall_status, "needs_improvement");
    assert_eq!(analysis.contradicted_rules[0].status, RuleStatus::Bad);
    assert_eq!(analysis.contradicted_rules[1].status, RuleStatus::Warning);
    assert_eq!(analysis.contradicted_rules[2].status, RuleStatus::Suggestion);
}

// ===== Properties =====

#[test]
fn number_groups_partition_for_all_pairs() {
    for driver in 1..=9 {
        for conductor in 1..=9 {
            let g = resolve_number_groups(driver, conductor);
            let mut all: Vec<u8> = Vec::new();
            all.extend(&g.lucky);
            all.extend(&g.bad);
            all.extend(&g.neutral);
            all.sort_unstable();
            assert_eq!(
                all,
                (1..=9).collect::<Vec<u8>>(),
                "groups must partition 1-9 for d={driver} c={conductor}"
            );
            for n in &g.lucky {
                assert!(!g.bad.contains(n));
            }
        }
    }
}

#[test]
fn reading_is_deterministic() {
    let birth = BirthDate::new(29, 12, 1984);
    let a = full_reading(&birth, Gender::Male, "Dev Anand", &config());
    let b = full_reading(&birth, Gender::Male, "Dev Anand", &config());
    assert_eq!(a, b);

    let json_a = serde_json::to_string(&a).unwrap();
    let json_b = serde_json::to_string(&b).unwrap();
    assert_eq!(json_a, json_b);
}

#[test]
fn serializes_to_json() {
    let birth = BirthDate::new(15, 6, 1990);
    let reading = full_reading(&birth, Gender::Male, "Arjun Kumar", &config());
    let value = serde_json::to_value(&reading).unwrap();

    assert_eq!(value["driver"], 6);
    assert_eq!(value["conductor"], 4);
    assert_eq!(value["kua"], 1);
    assert_eq!(value["driver_compatibility"]["planet"], "Venus (Shukar)");
    assert_eq!(value["loshu_grid"]["cells"][2][1]["value"], "111");
    assert_eq!(value["loshu_lines"]["all"][0]["type"], "diagonal");
    assert_eq!(value["name_analysis"]["overall_status"], "needs_improvement");
}
