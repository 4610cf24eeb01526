use crate::patterns::{HOMOGLYPHS, NUMBER_TOKEN, RESERVED_SYMBOLS, SYMBOL_STRIP, VALID_SYMBOL};

/// Parses a price-like token written with either decimal separator and with
/// spaces as thousands separators. Returns `None` instead of failing.
///
/// When several dots survive, the first segment is the integer part and the
/// rest is glued into one fractional part (`"1.234.5"` is `1.2345`).
pub fn normalize_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim().replace('\u{a0}', " ");
    if trimmed.is_empty() {
        return None;
    }

    let compact = trimmed
        .replace(' ', "")
        .replace(",,", ",")
        .replace(',', ".");
    let mut digits: String = compact
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if digits.matches('.').count() > 1 {
        let rebuilt = {
            let mut parts = digits.split('.');
            let head = parts.next().unwrap_or_default();
            let tail: String = parts.collect();
            format!("{head}.{tail}")
        };
        digits = rebuilt;
    }

    if matches!(digits.as_str(), "" | "." | "-" | "-.") {
        return None;
    }
    digits.parse::<f64>().ok()
}

/// Folds Cyrillic look-alikes to Latin, drops `$ # /` and spaces, uppercases.
pub fn normalize_symbol(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            HOMOGLYPHS
                .iter()
                .find(|(cyr, _)| *cyr == c)
                .map_or(c, |(_, lat)| *lat)
        })
        .filter(|c| !SYMBOL_STRIP.contains(c))
        .collect::<String>()
        .to_uppercase()
}

pub fn is_valid_symbol(symbol: &str) -> bool {
    VALID_SYMBOL.is_match(symbol) && !RESERVED_SYMBOLS.contains(&symbol)
}

/// First number token on the line that normalizes to a value.
pub(crate) fn first_number(text: &str) -> Option<f64> {
    NUMBER_TOKEN
        .find_iter(text)
        .find_map(|m| normalize_number(m.as_str()))
}
