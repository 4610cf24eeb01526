use common::models::{ParseResult, Signal, Status};

use crate::diagnostics::{Diagnostics, MISSING_REQUIRED};
use crate::validator::Verdict;

pub fn confidence_for(status: Status, has_warnings: bool) -> f64 {
    match (status, has_warnings) {
        (Status::Ready, false) => 0.95,
        (Status::Ready, true) => 0.8,
        (Status::Draft, _) => 0.5,
        (Status::Reject, _) => 0.0,
    }
}

fn required_fields_present(signal: &Signal) -> bool {
    signal.symbol.is_some()
        && signal.side.is_some()
        && signal.sl.is_some()
        && signal.entry.is_some()
        && !signal.tps.is_empty()
}

fn nothing_extracted(signal: &Signal) -> bool {
    signal.symbol.is_none()
        && signal.side.is_none()
        && signal.entry.is_none()
        && signal.sl.is_none()
        && signal.tps.is_empty()
}

pub fn status_for(signal: &Signal, verdict: Verdict) -> Status {
    if required_fields_present(signal) && verdict != Verdict::Conflict {
        Status::Ready
    } else if nothing_extracted(signal) {
        Status::Reject
    } else {
        Status::Draft
    }
}

pub(crate) fn classify(signal: Signal, verdict: Verdict, mut diagnostics: Diagnostics) -> ParseResult {
    let status = status_for(&signal, verdict);
    if status == Status::Draft && diagnostics.errors.is_empty() {
        diagnostics.error(MISSING_REQUIRED);
    }

    ParseResult {
        status,
        confidence: confidence_for(status, !diagnostics.warnings.is_empty()),
        signal: (status != Status::Reject).then_some(signal),
        errors: diagnostics.errors,
        warnings: diagnostics.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::{EntryDirective, Side};

    fn complete() -> Signal {
        Signal {
            symbol: Some("BTCUSDT".to_string()),
            side: Some(Side::Short),
            entry: Some(EntryDirective::Limit { price: 67900.0 }),
            entries: vec![EntryDirective::Limit { price: 67900.0 }],
            sl: Some(68700.0),
            tps: vec![67000.0],
            total_position_pct: Some(1.0),
            alloc_fracs: Vec::new(),
        }
    }

    #[test]
    fn test_confidence_table() {
        assert_eq!(confidence_for(Status::Ready, false), 0.95);
        assert_eq!(confidence_for(Status::Ready, true), 0.8);
        assert_eq!(confidence_for(Status::Draft, true), 0.5);
        assert_eq!(confidence_for(Status::Reject, false), 0.0);
    }

    #[test]
    fn test_ready_when_complete() {
        let result = classify(complete(), Verdict::Consistent, Diagnostics::default());
        assert_eq!(result.status, Status::Ready);
        assert_eq!(result.confidence, 0.95);
        assert!(result.errors.is_empty());
        assert!(result.signal.is_some());
    }

    #[test]
    fn test_conflict_downgrades_to_draft() {
        let mut diag = Diagnostics::default();
        diag.error(crate::diagnostics::DIRECTIONAL_CONFLICT);
        let result = classify(complete(), Verdict::Conflict, diag);
        assert_eq!(result.status, Status::Draft);
        assert_eq!(result.errors, vec!["directional validation conflict".to_string()]);
    }

    #[test]
    fn test_partial_is_draft_with_message() {
        let mut signal = complete();
        signal.tps.clear();
        let result = classify(signal, Verdict::Consistent, Diagnostics::default());
        assert_eq!(result.status, Status::Draft);
        assert_eq!(result.errors, vec![MISSING_REQUIRED.to_string()]);
    }

    #[test]
    fn test_empty_is_reject_without_signal() {
        let mut diag = Diagnostics::default();
        diag.warn("something");
        let result = classify(Signal::default(), Verdict::Skipped, diag);
        assert_eq!(result.status, Status::Reject);
        assert_eq!(result.confidence, 0.0);
        assert!(result.signal.is_none());
        assert!(result.errors.is_empty());
    }
}
