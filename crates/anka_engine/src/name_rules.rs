//! Name rule evaluation.
//!
//! The rules keep the source service's labels ("Rule 3" through "Rule 10")
//! and run in that fixed order. Each rule lands in the followed or
//! contradicted list on its own pass/fail test; gated rules whose
//! precondition does not hold appear in neither.

use anka_base::{compatibility_row, name_breakdown, name_value};

use crate::reading_types::{NameAnalysis, NameRule, RuleStatus, Severity};

fn has(set: &[u8], digit: u8) -> bool {
    set.contains(&digit)
}

fn followed(rule: &'static str, description: String, status: RuleStatus) -> NameRule {
    NameRule { rule, description, status, severity: None }
}

fn contradicted(
    rule: &'static str,
    description: String,
    status: RuleStatus,
    severity: Severity,
) -> NameRule {
    NameRule { rule, description, status, severity: Some(severity) }
}

/// Evaluate the name rules for a full name against the reading context.
pub fn evaluate_name_rules(
    full_name: &str,
    driver: u8,
    conductor: u8,
    bad_numbers: &[u8],
    present: &[u8],
    missing: &[u8],
) -> NameAnalysis {
    let first_name = full_name.trim().split_whitespace().next().unwrap_or("").to_string();

    let first_value = name_value(&first_name);
    let full_value = name_value(full_name);

    let mut followed_rules = Vec::new();
    let mut contradicted_rules = Vec::new();

    // Rule 3: full name total must not be 4 or 8.
    if full_value != 4 && full_value != 8 {
        followed_rules.push(followed(
            "Rule 3",
            format!("Full name total ({full_value}) is not 4 or 8 ✓"),
            RuleStatus::Good,
        ));
    } else {
        contradicted_rules.push(contradicted(
            "Rule 3",
            format!("Full name total is {full_value} (should NOT be 4 or 8)"),
            RuleStatus::Bad,
            Severity::High,
        ));
    }

    // Rule 4: first name total must not be 4 or 8.
    if first_value != 4 && first_value != 8 {
        followed_rules.push(followed(
            "Rule 4",
            format!("First name total ({first_value}) is not 4 or 8 ✓"),
            RuleStatus::Good,
        ));
    } else {
        contradicted_rules.push(contradicted(
            "Rule 4",
            format!("First name total is {first_value} (should NOT be 4 or 8)"),
            RuleStatus::Bad,
            Severity::High,
        ));
    }

    // Rule 5: first name must not be anti (non-friend) to the driver.
    let driver_non_friends =
        compatibility_row(driver).map_or(&[] as &[u8], |row| row.non_friends);
    if !driver_non_friends.contains(&first_value) {
        followed_rules.push(followed(
            "Rule 5",
            format!("First name total ({first_value}) is not anti to driver {driver} ✓"),
            RuleStatus::Good,
        ));
    } else {
        contradicted_rules.push(contradicted(
            "Rule 5",
            format!("First name total ({first_value}) is anti to driver {driver}"),
            RuleStatus::Bad,
            Severity::High,
        ));
    }

    // Rule 6: full name should sit comfortably with driver/conductor; an
    // exact match is the best case, any non-bad value passes.
    if full_value == driver || full_value == conductor {
        followed_rules.push(followed(
            "Rule 6",
            format!("Full name total ({full_value}) matches driver or conductor ✓"),
            RuleStatus::Good,
        ));
    } else if !bad_numbers.contains(&full_value) {
        followed_rules.push(followed(
            "Rule 6",
            format!("Full name total ({full_value}) is compatible with your numbers ✓"),
            RuleStatus::Good,
        ));
    } else {
        contradicted_rules.push(contradicted(
            "Rule 6",
            format!("Full name total ({full_value}) is not comfortable with driver/conductor"),
            RuleStatus::Warning,
            Severity::Medium,
        ));
    }

    // Rule 7: name should total 1 when both 5 and 6 are present and
    // neither driver nor conductor is 8.
    if has(present, 5) && has(present, 6) && driver != 8 && conductor != 8 {
        if full_value == 1 {
            followed_rules.push(followed(
                "Rule 7",
                "Name totals to 1 (both 5 & 6 present, D/C not 8) ✓".to_string(),
                RuleStatus::Excellent,
            ));
        } else {
            contradicted_rules.push(contradicted(
                "Rule 7",
                format!(
                    "Name should total to 1 (both 5 & 6 present, D/C not 8), but it's {full_value}"
                ),
                RuleStatus::Suggestion,
                Severity::Low,
            ));
        }
    }

    // Rule 8: name should total 5 when 5 is missing and would complete the
    // 2-5-8 or 4-5-6 line; the message prefers the 2-5-8 case.
    if has(missing, 5) {
        let completes_258 = has(present, 2) && has(present, 8);
        let completes_456 = has(present, 4) && has(present, 6);
        if completes_258 || completes_456 {
            let line = if completes_258 { "2-5-8" } else { "4-5-6" };
            if full_value == 5 {
                followed_rules.push(followed(
                    "Rule 8",
                    format!("Name totals to 5 (completes line: {line}) ✓"),
                    RuleStatus::Excellent,
                ));
            } else {
                contradicted_rules.push(contradicted(
                    "Rule 8",
                    format!(
                        "Name should total to 5 to complete line ({line}), but it's {full_value}"
                    ),
                    RuleStatus::Suggestion,
                    Severity::Medium,
                ));
            }
        }
    }

    // Rule 9: name should total 6 when 6 is missing and neither driver nor
    // conductor is 3.
    if has(missing, 6) && driver != 3 && conductor != 3 {
        if full_value == 6 {
            followed_rules.push(followed(
                "Rule 9",
                "Name totals to 6 (6 missing, D/C not 3) ✓".to_string(),
                RuleStatus::Excellent,
            ));
        } else {
            contradicted_rules.push(contradicted(
                "Rule 9",
                format!("Name should total to 6 (6 is missing, D/C not 3), but it's {full_value}"),
                RuleStatus::Suggestion,
                Severity::Medium,
            ));
        }
    }

    // Rule 10: name should total 3 when 3 is missing and neither driver nor
    // conductor is 6.
    if has(missing, 3) && driver != 6 && conductor != 6 {
        if full_value == 3 {
            followed_rules.push(followed(
                "Rule 10",
                "Name totals to 3 (3 missing, D/C not 6) ✓".to_string(),
                RuleStatus::Excellent,
            ));
        } else {
            contradicted_rules.push(contradicted(
                "Rule 10",
                format!("Name should total to 3 (3 is missing, D/C not 6), but it's {full_value}"),
                RuleStatus::Suggestion,
                Severity::Medium,
            ));
        }
    }

    let overall_status = if contradicted_rules.is_empty() { "good" } else { "needs_improvement" };

    NameAnalysis {
        first_name_value: first_value,
        first_name_breakdown: name_breakdown(&first_name),
        first_name,
        full_name: full_name.to_string(),
        full_name_value: full_value,
        full_name_breakdown: name_breakdown(full_name),
        followed_rules,
        contradicted_rules,
        overall_status,
    }
}
