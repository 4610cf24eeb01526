pub mod parse_worker;
pub mod telegram_relay;
