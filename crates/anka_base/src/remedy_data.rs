//! Planet remedy texts for missing digits.
//!
//! Transcribed verbatim from the source listings, including digit 9's
//! "Remedy not mentioned" entry.

/// Remedy texts for the planet ruling a missing digit. None outside 1-9.
pub const fn remedies_for_digit(digit: u8) -> Option<&'static [&'static str]> {
    match digit {
        1 => Some(&["Offer water to the Sun"]),
        2 => Some(&[
            "Appease Lord Shiva",
            "Offer water",
            "Offer milk",
            "Offer milk + water",
            "Offer Panchamrit",
        ]),
        3 => Some(&["Apply saffron tilak on your forehead"]),
        4 => Some(&["Give milk + bread to dog / crow"]),
        5 => Some(&[
            "Free the parrot from cage on Wednesday",
            "Use more and more green colour",
        ]),
        6 => Some(&[
            "Give white things on Friday",
            "Donate to a disabled person or beggar",
        ]),
        7 => Some(&["Same remedy as Rahu (Give milk + bread to dog / crow)"]),
        8 => Some(&[
            "Offer sarson (mustard) oil",
            "Offer black cloth",
            "Light black oil deepak",
            "Read Shani Chalisa",
            "Give coins to the sweeper",
            "Do shoe service in Gurudwara / temple",
        ]),
        9 => Some(&["Remedy not mentioned"]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_for_all_digits() {
        for digit in 1..=9 {
            let remedies = remedies_for_digit(digit).unwrap();
            assert!(!remedies.is_empty());
        }
    }

    #[test]
    fn out_of_range_is_none() {
        assert!(remedies_for_digit(0).is_none());
        assert!(remedies_for_digit(10).is_none());
    }

    #[test]
    fn saturn_has_six_remedies() {
        assert_eq!(remedies_for_digit(8).unwrap().len(), 6);
    }

    #[test]
    fn mars_remedy_is_placeholder() {
        assert_eq!(remedies_for_digit(9), Some(&["Remedy not mentioned"][..]));
    }
}
