pub mod raw_message_repo;
pub mod trade_signal_repo;

pub use raw_message_repo::RawMessageRepository;
pub use trade_signal_repo::TradeSignalRepository;
