//! Number formatting for the CLI report (en-US style separators, USD).

/// Rounds and renders a count with thousands separators, e.g. `27,000,000`.
pub fn format_count(value: f64) -> String {
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    group_thousands(&format!("{:.0}", rounded.abs()))
}

/// Currency with up to two decimals: whole-dollar amounts drop the cents,
/// e.g. `$22,500` and `$0.03`.
pub fn format_currency(value: f64) -> String {
    let safe = if value.is_finite() { value } else { 0.0 };
    let (sign, magnitude) = if safe < 0.0 { ("-", -safe) } else { ("", safe) };

    let cents = (magnitude * 100.0).round() / 100.0;
    if (cents - cents.trunc()).abs() < f64::EPSILON {
        format!("{}${}", sign, group_thousands(&format!("{:.0}", cents)))
    } else {
        let formatted = format!("{:.2}", cents);
        let (whole, frac) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
        format!("{}${}.{}", sign, group_thousands(whole), frac)
    }
}

/// Percentage with up to one decimal, e.g. `12.5%` and `95%`.
pub fn format_pct(value: f64) -> String {
    let safe = if value.is_finite() { value } else { 0.0 };
    let tenths = (safe * 10.0).round() / 10.0;
    if (tenths - tenths.trunc()).abs() < f64::EPSILON {
        format!("{:.0}%", tenths)
    } else {
        format!("{:.1}%", tenths)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(27_000_000.0), "27,000,000");
        assert_eq!(format_count(1234.6), "1,235");
        assert_eq!(format_count(f64::NAN), "0");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(22500.0), "$22,500");
        assert_eq!(format_currency(0.03), "$0.03");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-12.0), "-$12");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(95.0), "95%");
        assert_eq!(format_pct(12.5), "12.5%");
        assert_eq!(format_pct(100.04), "100%");
    }
}
