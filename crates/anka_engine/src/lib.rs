//! Numerology reading engine: rule evaluation and one-shot aggregation.
//!
//! This crate provides:
//! - The 6-year luck factor projection
//! - The three remedy rule groups (grid gaps, yantras, planet remedies)
//! - The name rule engine with its followed/contradicted partition
//! - `full_reading`, assembling every section into one record
//!
//! All evaluation is a pure function of the inputs and the static tables
//! in `anka_base`; rule order is fixed and part of the contract.

pub mod luck;
pub mod name_rules;
pub mod reading;
pub mod reading_types;
pub mod remedies;

pub use luck::luck_projection;
pub use name_rules::evaluate_name_rules;
pub use reading::full_reading;
pub use reading_types::{
    GapRemedy, LuckYear, NameAnalysis, NameRule, NumerologyReading, PlanetRemedy, ReadingConfig,
    RemedyReport, RuleStatus, Severity, YantraRemedy,
};
pub use remedies::{grid_gap_remedies, planet_remedies, yantra_remedies};
