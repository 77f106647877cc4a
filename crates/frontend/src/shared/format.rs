//! Number and money formatting for cards, tables and charts

use contracts::domain::reports::MetricFormat;

/// Format an integer with comma thousands separators
/// Example: 4580 -> "4,580"
pub fn format_thousands(value: i64) -> String {
    let raw = value.abs().to_string();
    let mut grouped = String::new();
    let chars: Vec<char> = raw.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    let body: String = grouped.chars().rev().collect();
    if value < 0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Format a pence amount as whole pounds with a currency sign
/// Example: 458_000 -> "£4,580"
pub fn format_gbp(pence: i64) -> String {
    format!("£{}", format_thousands(pence / 100))
}

/// Render a metric value according to its display format
pub fn format_metric(value: f64, format: MetricFormat) -> String {
    match format {
        MetricFormat::Money => format_gbp(value as i64),
        MetricFormat::Count => format_thousands(value as i64),
        MetricFormat::Multiplier => format!("{:.1}x", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(4580), "4,580");
        assert_eq!(format_thousands(500), "500");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(-1234), "-1,234");
    }

    #[test]
    fn test_format_gbp() {
        assert_eq!(format_gbp(458_000), "£4,580");
        assert_eq!(format_gbp(15_600), "£156");
        assert_eq!(format_gbp(3_860_000), "£38,600");
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(3_860_000.0, MetricFormat::Money), "£38,600");
        assert_eq!(format_metric(3105.0, MetricFormat::Count), "3,105");
        assert_eq!(format_metric(5.3, MetricFormat::Multiplier), "5.3x");
    }
}
