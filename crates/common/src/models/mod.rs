pub mod raw_message;
pub mod signal;
pub mod trade_signal;

pub use raw_message::{RawMessage, RawMessageInsert};
pub use signal::{EntryDirective, ParseResult, Side, Signal, Status};
pub use trade_signal::StoredTradeSignal;
