/// Currency display formatting.
///
/// All monetary values are plain `f64` and rendered with a literal `$`
/// prefix and thousands grouping. Whole amounts drop the decimals, anything
/// fractional keeps two places. Missing totals are rendered as `$0` by the
/// callers passing a zero default.

/// Format a currency amount, e.g. `1234.5` -> `"$1,234.50"`, `-200.0` ->
/// `"-$200"`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let magnitude = value.abs();

    let formatted = if (magnitude.fract()).abs() < f64::EPSILON {
        group_thousands(&format!("{:.0}", magnitude))
    } else {
        let fixed = format!("{:.2}", magnitude);
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!("{}.{}", group_thousands(int_part), frac_part)
    };

    if negative {
        format!("-${}", formatted)
    } else {
        format!("${}", formatted)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_have_no_decimals() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(200.0), "$200");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
    }

    #[test]
    fn fractional_amounts_keep_two_places() {
        assert_eq!(format_currency(45210.55), "$45,210.55");
        assert_eq!(format_currency(0.5), "$0.50");
    }

    #[test]
    fn negative_amounts_hoist_the_sign() {
        assert_eq!(format_currency(-3500.0), "-$3,500");
        assert_eq!(format_currency(-0.25), "-$0.25");
    }

    #[test]
    fn grouping_boundaries() {
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(100000.0), "$100,000");
    }
}
