use crate::normalize::{is_valid_symbol, normalize_symbol};
use crate::patterns::{SYMBOL_HEADER, SYMBOL_TAG};
use crate::splitter::lines;

/// `$TICKER`/`#TICKER` tags anywhere in the block win over the leading token
/// of a `<TICKER> ... long|short` header line.
pub fn extract_symbol(block: &str) -> Option<String> {
    let tagged = SYMBOL_TAG
        .captures_iter(block)
        .filter_map(|caps| caps.get(1))
        .map(|m| normalize_symbol(m.as_str()));

    let headers = lines(block)
        .into_iter()
        .filter_map(|line| SYMBOL_HEADER.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| normalize_symbol(m.as_str()));

    tagged.chain(headers).find(|candidate| is_valid_symbol(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_symbol() {
        assert_eq!(extract_symbol("$BTCUSDT - SHORT"), Some("BTCUSDT".to_string()));
        assert_eq!(extract_symbol("#eth long"), Some("ETH".to_string()));
    }

    #[test]
    fn test_header_symbol() {
        assert_eq!(extract_symbol("SOLUSDT лонг\nВход 145"), Some("SOLUSDT".to_string()));
    }

    #[test]
    fn test_tags_scanned_before_headers() {
        let block = "ADA long\nкорреляция с $BTC";
        assert_eq!(extract_symbol(block), Some("BTC".to_string()));
    }

    #[test]
    fn test_invalid_candidates_are_skipped() {
        // "$LONG" is reserved, the header token is used instead.
        assert_eq!(extract_symbol("DOT short\n$LONG"), Some("DOT".to_string()));
        assert_eq!(extract_symbol("просто текст"), None);
    }

    #[test]
    fn test_cyrillic_homoglyph_tag() {
        assert_eq!(extract_symbol("$АVАХ шорт"), Some("AVAX".to_string()));
    }
}
