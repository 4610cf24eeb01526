use crate::diagnostics::{DEFAULT_POSITION_PCT, Diagnostics};
use crate::normalize::normalize_number;
use crate::patterns::{FRACTION, PERCENT, TAKE_PROFIT_LINE};
use crate::splitter::lines;

/// Percentages above this are per-leg sizes, not total risk.
const MAX_TOTAL_POSITION_PCT: f64 = 10.0;
const DEFAULT_TOTAL_POSITION_PCT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Allocation {
    pub percents: Vec<f64>,
    pub fracs: Vec<String>,
}

impl Allocation {
    /// Largest pooled percentage in `(0, 10]`. Falls back to 1% with a
    /// warning when nothing qualifies but an entry was found.
    pub(crate) fn total_position_pct(
        &self,
        has_entry: bool,
        diagnostics: &mut Diagnostics,
    ) -> Option<f64> {
        let total = self
            .percents
            .iter()
            .copied()
            .filter(|pct| *pct > 0.0 && *pct <= MAX_TOTAL_POSITION_PCT)
            .fold(None, |best: Option<f64>, pct| {
                Some(best.map_or(pct, |b| b.max(pct)))
            });

        if total.is_none() && has_entry {
            diagnostics.warn(DEFAULT_POSITION_PCT);
            return Some(DEFAULT_TOTAL_POSITION_PCT);
        }
        total
    }
}

/// Take-profit lines are skipped: their percentages describe partial exits.
pub fn extract_allocation(block: &str) -> Allocation {
    let mut allocation = Allocation::default();

    for line in lines(block) {
        if TAKE_PROFIT_LINE.is_match(&line.to_lowercase()) {
            continue;
        }
        allocation.percents.extend(
            PERCENT
                .captures_iter(line)
                .filter_map(|caps| caps.get(1))
                .filter_map(|m| normalize_number(m.as_str())),
        );
        allocation.fracs.extend(
            FRACTION
                .captures_iter(line)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().replace(' ', "")),
        );
    }
    allocation
}
