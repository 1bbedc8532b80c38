//! Formatting helpers for presenting comparison values.

/// Phrase used in the summary when the server could not produce a number.
pub const UNKNOWN_QUANTITY: &str = "An unknown number of";

/// Locale-style rendering of a ratio: thousands grouped with `,`, up to
/// three fractional digits, trailing zeros dropped.
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }

    let negative = value < 0.0;
    let text = format!("{:.3}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));

    let frac_trimmed = frac_part.trim_end_matches('0');
    if !frac_trimmed.is_empty() {
        out.push('.');
        out.push_str(frac_trimmed);
    }
    out
}

/// The one-line sentence shown above the charts.
pub fn summary_sentence(value: Option<f64>, item_a: &str, item_b: &str) -> String {
    let quantity = match value {
        Some(value) => format_quantity(value),
        None => UNKNOWN_QUANTITY.to_string(),
    };
    format!("{quantity} {item_a}(s) fit inside one {item_b}")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(format_quantity(25.0), "25");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn large_numbers_are_grouped() {
        assert_eq!(format_quantity(1234567.0), "1,234,567");
        assert_eq!(format_quantity(1000.0), "1,000");
        assert_eq!(format_quantity(999.0), "999");
    }

    #[test]
    fn fractions_keep_up_to_three_digits() {
        assert_eq!(format_quantity(0.5), "0.5");
        assert_eq!(format_quantity(2.125), "2.125");
        assert_eq!(format_quantity(1.2999), "1.3");
    }

    #[test]
    fn negatives_keep_their_sign() {
        assert_eq!(format_quantity(-1234.5), "-1,234.5");
    }

    #[test]
    fn summary_with_value() {
        assert_eq!(
            summary_sentence(Some(25.0), "apple", "basket"),
            "25 apple(s) fit inside one basket"
        );
    }

    #[test]
    fn summary_without_value_uses_unknown_phrase() {
        assert_eq!(
            summary_sentence(None, "apple", "basket"),
            "An unknown number of apple(s) fit inside one basket"
        );
    }
}
