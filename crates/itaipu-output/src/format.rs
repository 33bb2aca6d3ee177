//! pt-BR formatting helpers.
//!
//! The dashboard renders numbers the Brazilian way: `.` groups
//! thousands, `,` marks the decimal. Currency is whole reais.

/// Month abbreviations in display order, January first.
pub const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Abbreviation for a 1-based month; `"N/A"` out of range.
pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_ABBREV[(month - 1) as usize],
        _ => "N/A",
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a number with pt-BR separators and a fixed number of decimals.
pub fn number(value: f64, decimals: usize) -> String {
    let rounded = format!("{value:.decimals$}");
    let (sign, unsigned) = match rounded.strip_prefix('-') {
        // Drop the sign when the value rounds to zero.
        Some(rest) if rest.chars().any(|c| c.is_ascii_digit() && c != '0') => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", rounded.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let mut out = String::from(sign);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// Format a BRL amount: grouped, no decimals (`R$ 1.234.568`).
pub fn brl(value: f64) -> String {
    let rounded = value.round();
    if rounded < 0.0 {
        format!("-R$ {}", number(-rounded, 0))
    } else {
        format!("R$ {}", number(rounded, 0))
    }
}

/// Format a fraction as a percentage with one decimal (`0.075` ⇒ `7,5%`).
pub fn percent(fraction: f64) -> String {
    format!("{}%", number(fraction * 100.0, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "R$ 0")]
    #[case(1234567.89, "R$ 1.234.568")]
    #[case(-1234567.89, "-R$ 1.234.568")]
    #[case(999.4, "R$ 999")]
    #[case(1000.0, "R$ 1.000")]
    fn test_brl(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(brl(value), expected);
    }

    #[rstest]
    #[case(1234.5, 2, "1.234,50")]
    #[case(1234.5, 0, "1.234")]
    #[case(0.5, 1, "0,5")]
    #[case(-9876543.21, 1, "-9.876.543,2")]
    #[case(-0.004, 2, "0,00")]
    #[case(100.0, 0, "100")]
    fn test_number(#[case] value: f64, #[case] decimals: usize, #[case] expected: &str) {
        assert_eq!(number(value, decimals), expected);
    }

    #[rstest]
    #[case(0.075, "7,5%")]
    #[case(1.0, "100,0%")]
    #[case(0.0, "0,0%")]
    fn test_percent(#[case] fraction: f64, #[case] expected: &str) {
        assert_eq!(percent(fraction), expected);
    }

    #[test]
    fn test_month_abbrev_range() {
        assert_eq!(month_abbrev(1), "Jan");
        assert_eq!(month_abbrev(12), "Dez");
        assert_eq!(month_abbrev(0), "N/A");
        assert_eq!(month_abbrev(13), "N/A");
    }
}
