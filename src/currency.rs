//! en-US currency display formatting.

/// Currencies rendered with a leading symbol. Anything else falls back to
/// `CODE amount`.
fn symbol_for(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "AUD" => Some("A$"),
        _ => None,
    }
}

fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Formats an amount for display, e.g. `$1,234.56` or `-€42.10`.
///
/// An empty or malformed code is treated as USD. This never fails: display
/// strings are produced for whatever value is passed in.
pub fn format_currency(amount: f64, code: &str) -> String {
    let code = normalize_code(code);
    let precision = minor_units_for(&code);

    let negative = amount < 0.0;
    let body = group_digits(&format!("{:.*}", precision as usize, amount.abs()));

    let rendered = match symbol_for(&code) {
        Some(symbol) => format!("{symbol}{body}"),
        None => format!("{code} {body}"),
    };
    if negative {
        format!("-{rendered}")
    } else {
        rendered
    }
}

fn normalize_code(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        trimmed.to_ascii_uppercase()
    } else {
        "USD".to_string()
    }
}

/// Inserts thousands separators into the integer part of an already
/// formatted decimal string.
fn group_digits(body: &str) -> String {
    let (int_part, frac_part) = match body.find('.') {
        Some(pos) => (&body[..pos], &body[pos..]),
        None => (body, ""),
    };

    let mut grouped = String::new();
    let mut count = 0;
    for ch in int_part.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    format!("{grouped}{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_usd_with_grouping() {
        assert_eq!(format_currency(1234.56, "USD"), "$1,234.56");
        assert_eq!(format_currency(1234567.0, "USD"), "$1,234,567.00");
    }

    #[test]
    fn negative_sign_precedes_the_symbol() {
        assert_eq!(format_currency(-42.1, "EUR"), "-€42.10");
    }

    #[test]
    fn yen_has_no_minor_units() {
        assert_eq!(format_currency(1500.0, "JPY"), "¥1,500");
    }

    #[test]
    fn unknown_codes_render_as_prefix() {
        assert_eq!(format_currency(12.5, "SEK"), "SEK 12.50");
    }

    #[test]
    fn malformed_codes_fall_back_to_usd() {
        assert_eq!(format_currency(1.0, ""), "$1.00");
        assert_eq!(format_currency(1.0, "dollars"), "$1.00");
        assert_eq!(format_currency(1.0, "usd"), "$1.00");
    }
}
