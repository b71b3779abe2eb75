//! Number formatting for table cells

/// Formats a number with a thousands separator (comma) and the given decimals
///
/// ```text
/// format_number_with_decimals(1234.567, 2) == "1,234.57"
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", usize::from(decimals.min(3)), value.abs());
    let (digits, fraction) = match formatted.split_once('.') {
        Some((digits, fraction)) => (digits, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money with two decimals, e.g. "1,234,567.89"
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}
