//! Luck factor table keyed by personal year and driver.
//!
//! Values are opaque labels from the source table ("90-100%", "(-)?",
//! "80% (above)") and are never parsed as percentages.

/// Luck labels: rows are personal year 1-9, columns are driver 1-9.
static LUCK_FACTOR: [[&str; 9]; 9] = [
    ["100%", "90-100%", "90%", "80-90%", "100%", "90%", "70-80%", "(-)?", "100%"],
    ["50-60%", "40%", "30-40%", "20%", "50%", "30%", "20-30%", "(-)?", "20%"],
    ["50-60%", "30-40%", "50-40%", "30%", "30-40%", "(-)", "20-30%", "20-30%", "30-20%"],
    ["90-100%", "20-30%", "70%", "100%", "90-100%", "80-90%", "100%", "100%", "50%"],
    ["100%", "100%", "90-100%", "80%", "100%", "90-100%", "80%", "80-90%", "80-90%"],
    ["90-100%", "70-80%", "(-)?", "80% (above)", "100%", "100%", "100%", "70-80%", "60-70%"],
    ["40-50%", "30%", "30-40%", "40-50%", "30-40%", "50%", "20%", "20-30%", "20-30%"],
    ["(-)?", "(-)?", "70-80%", "100%", "80-90%", "80-90%", "70%", "100%", "80%"],
    ["50%", "30%", "40-50%", "30%", "50%", "10-20%", "30-40%", "50%", "60-70%"],
];

/// Luck label for a (personal year, driver) pair, "N/A" outside 1-9.
pub fn luck_label(personal_year: u8, driver: u8) -> &'static str {
    if (1..=9).contains(&personal_year) && (1..=9).contains(&driver) {
        LUCK_FACTOR[(personal_year - 1) as usize][(driver - 1) as usize]
    } else {
        "N/A"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_corners() {
        assert_eq!(luck_label(1, 1), "100%");
        assert_eq!(luck_label(1, 9), "100%");
        assert_eq!(luck_label(9, 1), "50%");
        assert_eq!(luck_label(9, 9), "60-70%");
    }

    #[test]
    fn indeterminate_labels_kept_verbatim() {
        assert_eq!(luck_label(1, 8), "(-)?");
        assert_eq!(luck_label(3, 6), "(-)");
        assert_eq!(luck_label(6, 4), "80% (above)");
    }

    #[test]
    fn reversed_range_label_kept_verbatim() {
        // The source table really says "30-20%" and "50-40%".
        assert_eq!(luck_label(3, 9), "30-20%");
        assert_eq!(luck_label(3, 3), "50-40%");
    }

    #[test]
    fn out_of_range_is_na() {
        assert_eq!(luck_label(0, 5), "N/A");
        assert_eq!(luck_label(5, 0), "N/A");
        assert_eq!(luck_label(10, 10), "N/A");
    }

    #[test]
    fn every_cell_nonempty() {
        for py in 1..=9 {
            for driver in 1..=9 {
                assert!(!luck_label(py, driver).is_empty());
            }
        }
    }
}
