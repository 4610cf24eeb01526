use common::models::Side;

use crate::patterns::{BEAR_EMOJI, BULL_EMOJI, LONG_WORD, SHORT_WORD};

/// Long wins when both directions appear.
pub fn extract_side(block: &str) -> Option<Side> {
    let lowered = block.to_lowercase();
    if LONG_WORD.is_match(&lowered) || lowered.contains(BULL_EMOJI) {
        Some(Side::Long)
    } else if SHORT_WORD.is_match(&lowered) || lowered.contains(BEAR_EMOJI) {
        Some(Side::Short)
    } else {
        None
    }
}
