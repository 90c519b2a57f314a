//! Loshu grid lines and planes: definitions and completion analysis.
//!
//! Eight fixed triples (2 diagonal, 3 vertical, 3 horizontal) with named
//! meanings. A line is complete when all three of its digits are present
//! in the personalized grid.

use serde::Serialize;

/// Line orientation on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineOrientation {
    Diagonal,
    Vertical,
    Horizontal,
}

/// A fixed line definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoshuLine {
    pub digits: [u8; 3],
    pub orientation: LineOrientation,
    pub name: &'static str,
    pub description: &'static str,
}

/// All 8 lines, in the source table's order.
pub const LOSHU_LINES: [LoshuLine; 8] = [
    LoshuLine {
        digits: [4, 5, 6],
        orientation: LineOrientation::Diagonal,
        name: "Super Success Line (Raj Yoga)",
        description: "Indicates exceptional success and royal fortune",
    },
    LoshuLine {
        digits: [2, 5, 8],
        orientation: LineOrientation::Diagonal,
        name: "Success Line (Golden Line)",
        description: "Brings success and prosperity",
    },
    LoshuLine {
        digits: [4, 3, 8],
        orientation: LineOrientation::Vertical,
        name: "Thought Plane",
        description: "Mental clarity and intellectual abilities",
    },
    LoshuLine {
        digits: [9, 5, 1],
        orientation: LineOrientation::Vertical,
        name: "Will Plane (Symbol of Success)",
        description: "Strong willpower and determination",
    },
    LoshuLine {
        digits: [2, 7, 6],
        orientation: LineOrientation::Vertical,
        name: "Action Plane",
        description: "Ability to take action and execute plans",
    },
    LoshuLine {
        digits: [4, 9, 2],
        orientation: LineOrientation::Horizontal,
        name: "Mental Plane",
        description: "Intellectual and analytical thinking",
    },
    LoshuLine {
        digits: [3, 5, 7],
        orientation: LineOrientation::Horizontal,
        name: "Emotional Plane",
        description: "Emotional balance and intuition",
    },
    LoshuLine {
        digits: [8, 1, 6],
        orientation: LineOrientation::Horizontal,
        name: "Practical Plane",
        description: "Practical skills and material success",
    },
];

/// A fully present line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompleteLine {
    pub numbers: [u8; 3],
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub orientation: LineOrientation,
}

/// Complete lines grouped by orientation, plus the flat list in definition
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub diagonal: Vec<CompleteLine>,
    pub vertical: Vec<CompleteLine>,
    pub horizontal: Vec<CompleteLine>,
    pub all: Vec<CompleteLine>,
}

/// A line with at least one digit absent. `missing` and `present` are the
/// sorted partition of the line's digits against the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncompleteLine {
    pub numbers: [u8; 3],
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub orientation: LineOrientation,
    pub missing: Vec<u8>,
    pub present: Vec<u8>,
}

fn is_complete(line: &LoshuLine, present: &[u8]) -> bool {
    line.digits.iter().all(|d| present.contains(d))
}

/// Determine which lines are fully present in the grid.
pub fn complete_lines(present: &[u8]) -> LineReport {
    let mut report = LineReport::default();
    for line in &LOSHU_LINES {
        if !is_complete(line, present) {
            continue;
        }
        let entry = CompleteLine {
            numbers: line.digits,
            name: line.name,
            description: line.description,
            orientation: line.orientation,
        };
        match line.orientation {
            LineOrientation::Diagonal => report.diagonal.push(entry.clone()),
            LineOrientation::Vertical => report.vertical.push(entry.clone()),
            LineOrientation::Horizontal => report.horizontal.push(entry.clone()),
        }
        report.all.push(entry);
    }
    report
}

/// Lines that are not fully present, with their missing/present subsets.
///
/// A line with none of its digits present is still reported, with the full
/// triple as missing.
pub fn incomplete_lines(present: &[u8]) -> Vec<IncompleteLine> {
    let mut lines = Vec::new();
    for line in &LOSHU_LINES {
        if is_complete(line, present) {
            continue;
        }
        let mut missing: Vec<u8> =
            line.digits.iter().copied().filter(|d| !present.contains(d)).collect();
        let mut have: Vec<u8> =
            line.digits.iter().copied().filter(|d| present.contains(d)).collect();
        missing.sort_unstable();
        have.sort_unstable();
        lines.push(IncompleteLine {
            numbers: line.digits,
            name: line.name,
            description: line.description,
            orientation: line.orientation,
            missing,
            present: have,
        });
    }
    lines
}

/// Plain-text summary of the complete lines, grouped by orientation.
pub fn line_summary(present: &[u8]) -> String {
    let report = complete_lines(present);
    if report.all.is_empty() {
        return "No complete lines found in your Loshu Grid".to_string();
    }

    let mut parts = Vec::new();
    let names = |lines: &[CompleteLine]| {
        lines.iter().map(|l| l.name).collect::<Vec<_>>().join(", ")
    };
    if !report.diagonal.is_empty() {
        parts.push(format!("Special Lines: {}", names(&report.diagonal)));
    }
    if !report.vertical.is_empty() {
        parts.push(format!("Vertical Planes: {}", names(&report.vertical)));
    }
    if !report.horizontal.is_empty() {
        parts.push(format!("Horizontal Planes: {}", names(&report.horizontal)));
    }
    parts.join("\n")
}
