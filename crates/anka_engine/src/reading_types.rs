//! Result records for the one-shot numerology reading.

use serde::Serialize;

use anka_base::{
    CompatibilityRow, IncompleteLine, LineReport, LoshuGrid, NameBreakdown, NumberGroups,
};

/// Configuration for a full reading.
///
/// The anchor year is explicit so readings are deterministic; callers that
/// want "now" resolve the clock themselves before invoking the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingConfig {
    /// First calendar year of the luck projection window.
    pub anchor_year: i32,
    /// Number of projected years (the standard window is 6: anchor + 5).
    pub luck_years: u8,
}

impl ReadingConfig {
    /// Standard 6-year projection starting at `anchor_year`.
    pub const fn for_year(anchor_year: i32) -> Self {
        Self { anchor_year, luck_years: 6 }
    }
}

/// One projected year of the luck window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckYear {
    pub year: i32,
    /// Birth day/month in the projected year, "DD/MM/YYYY".
    pub date: String,
    pub personal_year: u8,
    pub driver: u8,
    /// "personal_year,driver" lookup key, as the table is quoted.
    pub combination: String,
    pub luck_factor: &'static str,
}

/// A grid-gap remedy (group 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapRemedy {
    pub condition: &'static str,
    pub remedy: String,
}

/// A yantra remedy (group 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YantraRemedy {
    pub remedy: &'static str,
    pub condition: &'static str,
}

/// Planet remedies for one missing digit (group 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanetRemedy {
    pub number: u8,
    pub planet: &'static str,
    pub remedies: &'static [&'static str],
}

/// All three remedy groups of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemedyReport {
    pub grid_gap: Vec<GapRemedy>,
    pub yantra: Vec<YantraRemedy>,
    pub planet: Vec<PlanetRemedy>,
}

/// Outcome classification of a name rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Good,
    Excellent,
    Warning,
    Suggestion,
    Bad,
}

/// Severity attached to contradicted rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One evaluated name rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRule {
    pub rule: &'static str,
    pub description: String,
    pub status: RuleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

/// Full name analysis: values, breakdowns and the rule partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameAnalysis {
    pub first_name: String,
    pub first_name_value: u8,
    pub first_name_breakdown: NameBreakdown,
    pub full_name: String,
    pub full_name_value: u8,
    pub full_name_breakdown: NameBreakdown,
    pub followed_rules: Vec<NameRule>,
    pub contradicted_rules: Vec<NameRule>,
    /// "good" when nothing is contradicted, "needs_improvement" otherwise.
    pub overall_status: &'static str,
}

/// The aggregate reading record. Pure value object; the caller decides the
/// wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumerologyReading {
    pub driver: u8,
    pub conductor: u8,
    pub kua: u8,
    pub loshu_grid: LoshuGrid,
    pub loshu_lines: LineReport,
    pub incomplete_lines: Vec<IncompleteLine>,
    pub driver_compatibility: &'static CompatibilityRow,
    pub conductor_compatibility: &'static CompatibilityRow,
    pub numbers: NumberGroups,
    pub remedies: RemedyReport,
    pub luck_factors: Vec<LuckYear>,
    pub name_analysis: NameAnalysis,
}
