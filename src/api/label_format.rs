use serde::{Deserialize, Serialize};

/// Locale preset used when formatting tooltip values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelLocale {
    #[default]
    EnUs,
    EsEs,
}

impl LabelLocale {
    fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsEs => '.',
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs => ',',
        }
    }

    /// Smallest integer-digit count that triggers grouping.
    ///
    /// Spanish CLDR data skips grouping for four-digit numbers.
    fn min_grouping_digits(self) -> usize {
        match self {
            Self::EnUs => 4,
            Self::EsEs => 5,
        }
    }
}

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats `value` the way `Number.prototype.toLocaleString` does with
/// default options: grouped integer part, at most three fraction digits,
/// no trailing zeros.
#[must_use]
pub fn format_locale_number(value: f64, locale: LabelLocale) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-∞" } else { "∞" }.to_owned();
    }

    // `Display` yields the shortest round-trip decimal, which is what ICU
    // rounds from.
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = round_half_expand(&shortest, MAX_FRACTION_DIGITS);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac_part.len() + 2);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(&int_part, locale));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(frac_part);
    }
    out
}

/// Rounds a plain decimal string to `digits` fraction digits, ties away
/// from zero. Returns the integer and fraction digits separately.
fn round_half_expand(plain: &str, digits: usize) -> (String, String) {
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain, ""));
    if frac_part.len() <= digits {
        return (int_part.to_owned(), frac_part.to_owned());
    }

    let round_up = frac_part.as_bytes()[digits] >= b'5';
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    if round_up {
        let mut idx = kept.len();
        loop {
            if idx == 0 {
                kept.insert(0, b'1');
                break;
            }
            idx -= 1;
            if kept[idx] == b'9' {
                kept[idx] = b'0';
            } else {
                kept[idx] += 1;
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let ascii = |bytes: &[u8]| bytes.iter().map(|&b| char::from(b)).collect::<String>();
    (ascii(&kept[..split]), ascii(&kept[split..]))
}

fn group_digits(digits: &str, locale: LabelLocale) -> String {
    if digits.len() < locale.min_grouping_digits() {
        return digits.to_owned();
    }

    let separator = locale.group_separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
