use common::models::{Side, Signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Consistent,
    Conflict,
    /// Side, stop or a numeric entry price is missing.
    Skipped,
}

/// Checks that the primary entry sits between the stop and every target:
/// for longs `sl < P < tp`, for shorts `tp < P < sl`.
pub fn validate(signal: &Signal) -> Verdict {
    let (Some(side), Some(sl)) = (signal.side, signal.sl) else {
        return Verdict::Skipped;
    };
    let prices = signal
        .entry
        .as_ref()
        .map(|entry| entry.check_prices())
        .unwrap_or_default();
    if prices.is_empty() {
        return Verdict::Skipped;
    }

    let consistent = prices.iter().all(|&price| match side {
        Side::Long => sl < price && signal.tps.iter().all(|&tp| tp > price),
        Side::Short => sl > price && signal.tps.iter().all(|&tp| tp < price),
    });

    if consistent {
        Verdict::Consistent
    } else {
        Verdict::Conflict
    }
}
