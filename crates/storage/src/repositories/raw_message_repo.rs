use chrono::Utc;
use common::models::{RawMessage, RawMessageInsert};
use sqlx::{Row, SqlitePool};

pub struct RawMessageRepository;

impl RawMessageRepository {
    pub async fn insert(pool: &SqlitePool, message: &RawMessageInsert) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
                INSERT INTO raw_messages (chat_id, tg_user_id, message_id, text, received_at)
                VALUES (?, ?, ?, ?, ?)
                RETURNING id
            "#,
        )
        .bind(message.chat_id)
        .bind(message.tg_user_id)
        .bind(message.message_id)
        .bind(&message.text)
        .bind(message.received_at)
        .fetch_one(pool)
        .await
    }

    /// Oldest unparsed messages first.
    pub async fn fetch_unparsed(pool: &SqlitePool, limit: u32) -> Result<Vec<RawMessage>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
                SELECT id, chat_id, tg_user_id, message_id, text, received_at
                FROM raw_messages
                WHERE parsed_at IS NULL
                ORDER BY id
                LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(RawMessage {
                    id: row.try_get("id")?,
                    chat_id: row.try_get("chat_id")?,
                    tg_user_id: row.try_get("tg_user_id")?,
                    message_id: row.try_get("message_id")?,
                    text: row.try_get("text")?,
                    received_at: row.try_get("received_at")?,
                })
            })
            .collect()
    }

    pub async fn mark_parsed(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE raw_messages SET parsed_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
