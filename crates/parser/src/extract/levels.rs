use crate::normalize::first_number;
use crate::patterns::{
    LEVEL_COMMENT_MARKERS, ORDINAL_LINE, ORDINAL_PREFIX, STOP_LINE, STOP_PREFIX,
    TAKE_PROFIT_LINE, TAKE_PROFIT_PREFIX,
};
use crate::splitter::lines;

/// Once a take-profit keyword is seen, numbered lines keep adding targets.
/// Nothing switches the listing off again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TakeProfitContext {
    Idle,
    Listing,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Levels {
    pub sl: Option<f64>,
    pub tps: Vec<f64>,
}

pub fn extract_levels(block: &str) -> Levels {
    let mut levels = Levels::default();
    let mut context = TakeProfitContext::Idle;

    for line in lines(block) {
        let lowered = line.to_lowercase();

        // last stop line wins
        if STOP_LINE.is_match(&lowered) {
            let base = STOP_PREFIX.replace(strip_comment(line), "");
            if let Some(price) = first_number(&base) {
                levels.sl = Some(price);
            }
        }

        let names_target = TAKE_PROFIT_LINE.is_match(&lowered);
        if names_target {
            context = TakeProfitContext::Listing;
        }

        let listed = context == TakeProfitContext::Listing && ORDINAL_LINE.is_match(line);
        if names_target || listed {
            let base = TAKE_PROFIT_PREFIX.replace(strip_comment(line), "");
            let base = ORDINAL_PREFIX.replace(&base, "");
            if let Some(price) = first_number(&base) {
                levels.tps.push(price);
            }
        }
    }
    levels
}

fn strip_comment(line: &str) -> &str {
    match line.find(&LEVEL_COMMENT_MARKERS[..]) {
        Some(idx) => &line[..idx],
        None => line,
    }
}
