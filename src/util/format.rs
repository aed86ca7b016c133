//! Presentation formatting. The domain always hands over raw numbers.

pub fn currency(symbol: &str, value: f64) -> String {
    if value < 0.0 {
        format!("-{symbol}{:.2}", value.abs())
    } else {
        format!("{symbol}{value:.2}")
    }
}

pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn plain(value: f64) -> String {
    format!("{value:.2}")
}

/// Parses a numeric text field. Empty or garbage input yields `None` so the
/// caller can keep the previous value.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_currency_with_sign_before_symbol() {
        assert_eq!(currency("$", 38.0), "$38.00");
        assert_eq!(currency("$", -0.506), "-$0.51");
        assert_eq!(currency("€", 1234.5), "€1234.50");
    }

    #[test]
    fn formats_percent() {
        assert_eq!(percent(38.0), "38.00%");
        assert_eq!(percent(-12.346), "-12.35%");
    }

    #[test]
    fn rejects_unparsable_numbers() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }
}
