use common::models::{Side, Status};
use proptest::prelude::*;
use signal_parser::{parse_block, parse_text, split_setups};

const VOCABULARY: &[&str] = &[
    "Trader Alex",
    "trader Ivan",
    "$BTCUSDT - SHORT",
    "#ETHUSDT LONG 🐂",
    "SOLUSDT лонг",
    "$АVАХ шорт",
    "Вход лимитка 67900",
    "Вход: 3 150,5",
    "Entry: 67000 - 500",
    "Вход по рынку",
    "Усреднение 3080",
    "Stop 68700",
    "SL: 2990 (ниже минимума)",
    "Стоп 41.2 🛡",
    "Tейк-профит",
    "TP1: 3300",
    "Тейк 160",
    "1) 67000",
    "2. 66200",
    "Риск 2% (1/2)",
    "Позиция 30%",
    "",
    "   ",
    "просто текст без уровней",
];

fn message() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..16).prop_map(|lines| lines.join("\n"))
}

fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

proptest! {
    #[test]
    fn parse_block_is_deterministic(text in message()) {
        prop_assert_eq!(parse_block(&text), parse_block(&text));
    }

    #[test]
    fn reject_iff_no_signal(text in message()) {
        for result in parse_text(&text) {
            prop_assert_eq!(result.status == Status::Reject, result.signal.is_none());
        }
    }

    #[test]
    fn confidence_follows_status(text in message()) {
        for result in parse_text(&text) {
            let expected = match result.status {
                Status::Ready if result.warnings.is_empty() => 0.95,
                Status::Ready => 0.8,
                Status::Draft => 0.5,
                Status::Reject => 0.0,
            };
            prop_assert_eq!(result.confidence, expected);
        }
    }

    #[test]
    fn ready_results_are_directionally_consistent(text in message()) {
        for result in parse_text(&text) {
            if result.status != Status::Ready {
                continue;
            }
            let signal = result.signal.as_ref().unwrap();
            let sl = signal.sl.unwrap();
            let side = signal.side.unwrap();
            for price in signal.entry.as_ref().unwrap().check_prices() {
                match side {
                    Side::Long => {
                        prop_assert!(sl < price);
                        prop_assert!(signal.tps.iter().all(|tp| *tp > price));
                    }
                    Side::Short => {
                        prop_assert!(sl > price);
                        prop_assert!(signal.tps.iter().all(|tp| *tp < price));
                    }
                }
            }
        }
    }

    #[test]
    fn entries_have_no_duplicates(text in message()) {
        for result in parse_text(&text) {
            if let Some(signal) = result.signal {
                for (i, a) in signal.entries.iter().enumerate() {
                    prop_assert!(!signal.entries[i + 1..].contains(a));
                }
            }
        }
    }

    #[test]
    fn splitting_preserves_non_blank_lines(text in message()) {
        let rejoined: Vec<String> = split_setups(&text)
            .iter()
            .flat_map(|block| non_blank_lines(block))
            .collect();
        prop_assert_eq!(rejoined, non_blank_lines(&text));
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,300}") {
        for result in parse_text(&text) {
            prop_assert_eq!(result.status == Status::Reject, result.signal.is_none());
        }
    }
}
