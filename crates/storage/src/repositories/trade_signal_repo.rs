use chrono::Utc;
use common::models::{Status, StoredTradeSignal};
use sqlx::{Row, SqlitePool};

pub struct TradeSignalRepository;

impl TradeSignalRepository {
    /// One row per `(raw_message_id, block_index)`: saving a block again replaces it.
    pub async fn insert(pool: &SqlitePool, signal: &StoredTradeSignal) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
                INSERT INTO trade_signals (
                    raw_message_id, block_index, status, confidence, symbol, side,
                    entry_price, size_pct, sl, tp1, tp2, tp3, parsed_json, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(raw_message_id, block_index) DO UPDATE SET
                    status = excluded.status,
                    confidence = excluded.confidence,
                    symbol = excluded.symbol,
                    side = excluded.side,
                    entry_price = excluded.entry_price,
                    size_pct = excluded.size_pct,
                    sl = excluded.sl,
                    tp1 = excluded.tp1,
                    tp2 = excluded.tp2,
                    tp3 = excluded.tp3,
                    parsed_json = excluded.parsed_json
                RETURNING id
            "#,
        )
        .bind(signal.raw_message_id)
        .bind(signal.block_index)
        .bind(signal.status.as_str())
        .bind(signal.confidence)
        .bind(&signal.symbol)
        .bind(&signal.side)
        .bind(signal.entry_price)
        .bind(signal.size_pct)
        .bind(signal.sl)
        .bind(signal.tp1)
        .bind(signal.tp2)
        .bind(signal.tp3)
        .bind(&signal.parsed_json)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
    }

    pub async fn fetch_for_message(
        pool: &SqlitePool,
        raw_message_id: i64,
    ) -> Result<Vec<StoredTradeSignal>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
                SELECT raw_message_id, block_index, status, confidence, symbol, side,
                       entry_price, size_pct, sl, tp1, tp2, tp3, parsed_json
                FROM trade_signals
                WHERE raw_message_id = ?
                ORDER BY block_index
            "#,
        )
        .bind(raw_message_id)
        .fetch_all(pool)
        .await?;

        rows.iter()
            .map(|row| {
                let status: String = row.try_get("status")?;
                Ok(StoredTradeSignal {
                    raw_message_id: row.try_get("raw_message_id")?,
                    block_index: row.try_get("block_index")?,
                    status: status.parse::<Status>().map_err(|e| sqlx::Error::Decode(e.into()))?,
                    confidence: row.try_get("confidence")?,
                    symbol: row.try_get("symbol")?,
                    side: row.try_get("side")?,
                    entry_price: row.try_get("entry_price")?,
                    size_pct: row.try_get("size_pct")?,
                    sl: row.try_get("sl")?,
                    tp1: row.try_get("tp1")?,
                    tp2: row.try_get("tp2")?,
                    tp3: row.try_get("tp3")?,
                    parsed_json: row.try_get("parsed_json")?,
                })
            })
            .collect()
    }
}
