use common::models::{EntryDirective, Side, Status};
use signal_parser::diagnostics::{
    DEFAULT_POSITION_PCT, DIRECTIONAL_CONFLICT, MISSING_REQUIRED, ZONE_FROM_RANGE,
};
use signal_parser::{parse_block, parse_text};

#[test]
fn test_short_limit_setup_is_ready_with_default_size() {
    let results = parse_text("$BTCUSDT - SHORT\nВход лимитка 67900\nStop 68700\nTейк-профит\n1) 67000");
    assert_eq!(results.len(), 1);

    let result = &results[0];
    let signal = result.signal.as_ref().unwrap();
    assert_eq!(signal.symbol.as_deref(), Some("BTCUSDT"));
    assert_eq!(signal.side, Some(Side::Short));
    assert_eq!(signal.entry, Some(EntryDirective::Limit { price: 67900.0 }));
    assert_eq!(signal.sl, Some(68700.0));
    assert_eq!(signal.tps, vec![67000.0]);
    assert_eq!(signal.total_position_pct, Some(1.0));
    assert_eq!(result.warnings, vec![DEFAULT_POSITION_PCT.to_string()]);
    assert_eq!(result.status, Status::Ready);
    assert_eq!(result.confidence, 0.8);
}

#[test]
fn test_long_with_stop_above_entry_is_draft() {
    let result = parse_block("$ETHUSDT long\nВход 3000\nStop 3100\nTP: 2900\nРиск 2%");
    assert!(result.errors.contains(&DIRECTIONAL_CONFLICT.to_string()));
    assert!(!result.errors.contains(&MISSING_REQUIRED.to_string()));
    assert_eq!(result.status, Status::Draft);
    assert_eq!(result.confidence, 0.5);
    assert!(result.signal.is_some());
}

#[test]
fn test_whitespace_only_input_yields_nothing() {
    assert!(parse_text(" \n \t\n\n").is_empty());
}

#[test]
fn test_unrelated_prose_is_rejected() {
    let result = parse_block("Сегодня отличная погода, идем гулять в парк.");
    assert_eq!(result.status, Status::Reject);
    assert!(result.signal.is_none());
    assert_eq!(result.confidence, 0.0);
    assert!(!result.errors.contains(&MISSING_REQUIRED.to_string()));
}

#[test]
fn test_offset_zone_entry() {
    let result = parse_block("$BTCUSDT long\nВход 67000 - 500\nStop 66000\nTP: 69000");
    let signal = result.signal.as_ref().unwrap();
    assert_eq!(
        signal.entry,
        Some(EntryDirective::Zone {
            price_min: 66500.0,
            price_max: 67000.0
        })
    );
    assert!(result.warnings.contains(&ZONE_FROM_RANGE.to_string()));
    assert_eq!(result.status, Status::Ready);
    assert_eq!(result.confidence, 0.8);
}

#[test]
fn test_complete_setup_without_warnings_scores_highest() {
    let result = parse_block("#SOLUSDT лонг\nВход 145\nСтоп 138\nTP1: 160\nTP2: 172\nОбъём 2%");
    assert_eq!(result.status, Status::Ready);
    assert!(result.warnings.is_empty());
    assert_eq!(result.confidence, 0.95);
}

#[test]
fn test_multiple_setups_in_one_message() {
    let text = "Trader A\n$BTCUSDT short\nВход 67900\nStop 68700\nTP: 67000\n\n\
                Trader B\n$ETHUSDT long\nВход 3000\nStop 2900\nTP: 3200";
    let results = parse_text(text);
    assert_eq!(results.len(), 2);
    let symbols: Vec<_> = results
        .iter()
        .map(|r| r.signal.as_ref().unwrap().symbol.clone().unwrap())
        .collect();
    assert_eq!(symbols, vec!["BTCUSDT".to_string(), "ETHUSDT".to_string()]);
    assert!(results.iter().all(|r| r.status == Status::Ready));
}

#[test]
fn test_market_entry_keeps_collected_limits() {
    let result = parse_block("$XRP шорт\nВход с текущих 0.6123\nStop 0.64\nTP: 0.59\nРазмер 3%");
    let signal = result.signal.as_ref().unwrap();
    assert_eq!(signal.entry, Some(EntryDirective::Market { price: Some(0.6123) }));
    assert_eq!(signal.entries, vec![EntryDirective::Limit { price: 0.6123 }]);
    // market entries have no fixed price to validate against
    assert_eq!(result.status, Status::Ready);
    assert_eq!(result.confidence, 0.95);
}

#[test]
fn test_adversarial_input_never_panics() {
    let inputs = [
        "$",
        "#",
        "-",
        "вход -",
        "Вход - - -",
        "1) 2) 3)",
        "TP\nTP\nTP",
        "stop (((",
        "🎯🛡🐂🐻",
        "Вход 9999999999999999999999999999999999999 - 1",
        "\r\r\n\u{2028}\u{85}",
        "%%%% (1/) (/2) 5%",
    ];
    for input in inputs {
        let results = parse_text(input);
        for result in results {
            assert_eq!(result.signal.is_none(), result.status == Status::Reject);
        }
    }
}

#[test]
fn test_json_shape() {
    let result = parse_block("$BTCUSDT - SHORT\nВход лимитка 67900\nStop 68700\nTP: 67000");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "READY");
    assert_eq!(json["signal"]["side"], "short");
    assert_eq!(json["signal"]["entry"]["type"], "limit");
    assert_eq!(json["signal"]["entry"]["price"], 67900.0);
    assert!(json["signal"]["alloc_fracs"].as_array().unwrap().is_empty());
}
