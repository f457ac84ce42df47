//! Display helpers shared by the screens.

use std::borrow::Cow;

/// Values longer than this are shortened for display.
pub const LONG_VALUE_THRESHOLD: usize = 20;

/// Characters kept on each side when shortening a long value.
pub const SHORT_VALUE_KEEP: usize = 10;

/// `abcdefghij...uvwxyz0123` style abbreviation of an address or id.
pub fn short_address(value: &str, keep: usize) -> String {
    let count = value.chars().count();
    if count <= keep * 2 {
        return value.to_owned();
    }
    let head: String = value.chars().take(keep).collect();
    let tail: String = value.chars().skip(count - keep).collect();
    format!("{head}...{tail}")
}

/// Label shown for a value row. The full value stays untouched for copying.
pub fn display_value(value: &str) -> Cow<'_, str> {
    if value.chars().count() > LONG_VALUE_THRESHOLD {
        Cow::Owned(short_address(value, SHORT_VALUE_KEEP))
    } else {
        Cow::Borrowed(value)
    }
}

/// Apply token decimals to an integer base-unit amount.
///
/// Non-numeric input is returned unchanged.
pub fn format_token_amount(amount: &str, decimals: u8) -> String {
    let trimmed = amount.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return amount.to_owned();
    }

    let digits = trimmed.trim_start_matches('0');
    let dec = decimals as usize;
    let padded = if digits.len() <= dec {
        format!("{}{}", "0".repeat(dec + 1 - digits.len()), digits)
    } else {
        digits.to_owned()
    };

    let (int_part, frac_part) = padded.split_at(padded.len() - dec);
    let frac_part = frac_part.trim_end_matches('0');
    let int_formatted = add_thousand_separators(int_part);

    if frac_part.is_empty() {
        int_formatted
    } else {
        format!("{int_formatted}.{frac_part}")
    }
}

fn add_thousand_separators(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(chars.len() + chars.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
