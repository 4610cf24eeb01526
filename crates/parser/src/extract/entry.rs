use common::models::EntryDirective;

use crate::diagnostics::{Diagnostics, MARKET_WITHOUT_PRICE, ZONE_FROM_RANGE};
use crate::normalize::{first_number, normalize_number};
use crate::patterns::{
    ENTRY_KEYWORD_PREFIX, ENTRY_LINE, ENTRY_ORDINAL_PREFIX, MARKET_ENTRY, PRICE_RANGE, STOP_LINE,
    TAKE_PROFIT_LINE,
};
use crate::splitter::lines;

/// Whether the scan is currently inside an entry section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryContext {
    Outside,
    Inside,
}

impl EntryContext {
    /// Stop/take-profit keywords close the section, entry keywords open it.
    /// A line with both kinds of keyword ends up inside.
    pub(crate) fn advance(self, lowered: &str) -> Self {
        let mut next = self;
        if STOP_LINE.is_match(lowered) || TAKE_PROFIT_LINE.is_match(lowered) {
            next = EntryContext::Outside;
        }
        if ENTRY_LINE.is_match(lowered) {
            next = EntryContext::Inside;
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryExtraction {
    pub primary: Option<EntryDirective>,
    pub entries: Vec<EntryDirective>,
}

pub fn extract_entry(block: &str, diagnostics: &mut Diagnostics) -> EntryExtraction {
    let block_lines = lines(block);
    let mut collected = Vec::new();
    let mut context = EntryContext::Outside;

    for line in &block_lines {
        context = context.advance(&line.to_lowercase());
        if context == EntryContext::Outside {
            continue;
        }

        if let Some(zone) = zone_from_range(line) {
            collected.push(zone);
            diagnostics.warn(ZONE_FROM_RANGE);
            continue;
        }

        let cleaned = ENTRY_ORDINAL_PREFIX.replace(line, "");
        let cleaned = ENTRY_KEYWORD_PREFIX.replace(&cleaned, "");
        if let Some(price) = first_number(&cleaned) {
            collected.push(EntryDirective::Limit { price });
        }
    }

    let mut entries: Vec<EntryDirective> = Vec::with_capacity(collected.len());
    for directive in collected {
        if !entries.contains(&directive) {
            entries.push(directive);
        }
    }

    if MARKET_ENTRY.is_match(&block.to_lowercase()) {
        let price = block_lines
            .iter()
            .find(|line| MARKET_ENTRY.is_match(&line.to_lowercase()))
            .and_then(|line| first_number(line));
        if price.is_none() {
            diagnostics.warn(MARKET_WITHOUT_PRICE);
        }
        return EntryExtraction {
            primary: Some(EntryDirective::Market { price }),
            entries,
        };
    }

    EntryExtraction {
        primary: entries.first().copied(),
        entries,
    }
}

/// `A - B` on an entry line. A large `A` followed by a small `B` reads as
/// "A minus an offset of B".
fn zone_from_range(line: &str) -> Option<EntryDirective> {
    let caps = PRICE_RANGE.captures(line)?;
    let a = normalize_number(caps.get(1)?.as_str())?;
    let b = normalize_number(caps.get(2)?.as_str())?;

    let (price_min, price_max) = if a >= 1000.0 && (1.0..1000.0).contains(&b) {
        (a - b, a)
    } else if a <= b {
        (a, b)
    } else {
        (b, a)
    };
    Some(EntryDirective::Zone {
        price_min,
        price_max,
    })
}
