use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMessage {
    pub id: i64,
    pub chat_id: i64,
    pub tg_user_id: Option<i64>,
    pub message_id: i64,
    pub text: String,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RawMessageInsert {
    pub chat_id: i64,
    pub tg_user_id: Option<i64>,
    pub message_id: i64,
    pub text: String,
    pub received_at: DateTime<Utc>,
}
