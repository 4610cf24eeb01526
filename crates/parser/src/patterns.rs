//! Keyword tables and line patterns shared by the splitter and extractors.
//!
//! Everything here is static data. Changing a pattern changes parser output
//! for the golden corpus.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern must compile")
}

/// Cyrillic letters that render like Latin ones, folded before symbol checks.
pub const HOMOGLYPHS: [(char, char); 24] = [
    ('А', 'A'),
    ('В', 'B'),
    ('Е', 'E'),
    ('С', 'C'),
    ('К', 'K'),
    ('М', 'M'),
    ('Н', 'H'),
    ('О', 'O'),
    ('Р', 'P'),
    ('Т', 'T'),
    ('Х', 'X'),
    ('У', 'Y'),
    ('а', 'a'),
    ('в', 'b'),
    ('е', 'e'),
    ('с', 'c'),
    ('к', 'k'),
    ('м', 'm'),
    ('н', 'h'),
    ('о', 'o'),
    ('р', 'p'),
    ('т', 't'),
    ('х', 'x'),
    ('у', 'y'),
];

pub const SYMBOL_STRIP: [char; 4] = ['$', '#', '/', ' '];
pub const RESERVED_SYMBOLS: [&str; 2] = ["LONG", "SHORT"];

pub const BULL_EMOJI: char = '🐂';
pub const BEAR_EMOJI: char = '🐻';

/// Text after any of these on a level line is commentary.
pub const LEVEL_COMMENT_MARKERS: [char; 3] = ['(', '🎯', '🛡'];

/// Substrings (checked on the lowercased line) that make a block worth flushing.
pub const SIGNAL_MARKERS: [&str; 4] = ["$", "вход", "tp", "stop"];

pub static TRADER_LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\btrader\b"));

pub static SYMBOL_SIDE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^\s*[$#]?[A-Za-zА-Яа-я]{2,20}(?:USDT)?\b.*\b(?:long|short|лонг|шорт)\b")
});

pub static SYMBOL_TAG: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[$#]\s*([A-Za-zА-Яа-я]{2,20}(?:USDT)?)"));

pub static SYMBOL_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^\s*([A-Za-zА-Яа-я]{2,20}(?:USDT)?)\b.*\b(?:long|short|лонг|шорт)\b")
});

pub static VALID_SYMBOL: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]{2,15}(?:USDT)?$"));

pub static LONG_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(?:long|лонг)\b"));
pub static SHORT_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(?:short|шорт)\b"));

pub static STOP_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:sl|stop|стоп|стоп\s*лосс)\b"));

pub static TAKE_PROFIT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:tp\d*|[tт]ейк|take\s*profit|[tт]ейк\s*профит)\b")
});

pub static MARKET_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:вход\s*(?:по\s*)?рынку|entry\s*market|вход\s*с\s*текущих|вход\s*рынок)\b")
});

pub static ENTRY_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:вход|entry|усреднение|лимитк)\b"));

pub static NUMBER_TOKEN: LazyLock<Regex> = LazyLock::new(|| compile(r"-?\d[\d\s]*(?:[.,]\d+)?"));

pub static PRICE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(\d[\d\s.,]*)\s*-\s*(\d[\d\s.,]*)"));

pub static ENTRY_ORDINAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\s*[-—]?\s*\d+[).]\s*"));

pub static ENTRY_KEYWORD_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^\s*(?:вход|entry|усреднение)\s*[:;\-]?\s*"));

pub static STOP_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^\s*(?:sl|stop|стоп|стоп\s*лосс)\s*[:;\-.]?\s*"));

pub static TAKE_PROFIT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^\s*[-—•]*\s*tp\s*\d*\s*[:;\-]?\s*"));

pub static ORDINAL_LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s*\d+[).]"));

pub static ORDINAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s*\d+[).]\s*"));

pub static PERCENT: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d[\d\s.,]*)\s*%"));

pub static FRACTION: LazyLock<Regex> = LazyLock::new(|| compile(r"\((\d+\s*/\s*\d+)\)"));
