use std::time::Duration;

use anyhow::{Context, bail};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, error, info};
use uuid::Uuid;

use common::actors::{Actor, ActorType, ControlMessage};
use common::models::{ParseResult, RawMessage, StoredTradeSignal};
use signal_parser::{parse_block, split_setups};
use storage::repositories::{RawMessageRepository, TradeSignalRepository};

/// Storage seen by the batch worker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParseRepository: Send + Sync {
    async fn fetch_unparsed(&self, limit: u32) -> anyhow::Result<Vec<RawMessage>>;

    async fn save_parsed_result(
        &self,
        raw_message_id: i64,
        block_index: i64,
        result: &ParseResult,
    ) -> anyhow::Result<()>;

    async fn mark_parsed(&self, raw_message_id: i64) -> anyhow::Result<()>;
}

/// Parses one batch of unparsed messages. Returns the number of block results handled.
///
/// A message with no recognizable setup start is parsed as a single block.
pub async fn parse_once<R>(repo: &R, limit: u32) -> anyhow::Result<usize>
where
    R: ParseRepository + ?Sized,
{
    let mut handled = 0;

    for raw in repo.fetch_unparsed(limit).await? {
        let mut blocks = split_setups(&raw.text);
        if blocks.is_empty() {
            blocks.push(raw.text.clone());
        }

        for (index, block) in blocks.iter().enumerate() {
            let result = parse_block(block);
            debug!(
                "Message {} block {}: {} ({:.2})",
                raw.id,
                index,
                result.status.as_str(),
                result.confidence
            );
            repo.save_parsed_result(raw.id, index as i64, &result).await?;
            handled += 1;
        }

        repo.mark_parsed(raw.id).await?;
    }

    Ok(handled)
}

pub struct SqliteParseRepository {
    pool: SqlitePool,
}

impl SqliteParseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParseRepository for SqliteParseRepository {
    async fn fetch_unparsed(&self, limit: u32) -> anyhow::Result<Vec<RawMessage>> {
        Ok(RawMessageRepository::fetch_unparsed(&self.pool, limit).await?)
    }

    /// Rejected blocks are dropped, everything else lands in `trade_signals`.
    async fn save_parsed_result(
        &self,
        raw_message_id: i64,
        block_index: i64,
        result: &ParseResult,
    ) -> anyhow::Result<()> {
        let stored = StoredTradeSignal::from_result(raw_message_id, block_index, result)
            .context("failed to serialize parse result")?;

        if let Some(stored) = stored {
            TradeSignalRepository::insert(&self.pool, &stored).await?;
        }
        Ok(())
    }

    async fn mark_parsed(&self, raw_message_id: i64) -> anyhow::Result<()> {
        Ok(RawMessageRepository::mark_parsed(&self.pool, raw_message_id).await?)
    }
}

const MAX_CONSECUTIVE_FAILURES: u32 = 5;

pub struct ParseWorkerActor {
    id: Uuid,
    repo: Box<dyn ParseRepository>,
    poll_interval: Duration,
    batch_limit: u32,
}

#[async_trait]
impl Actor for ParseWorkerActor {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> ActorType {
        ActorType::ParseWorkerActor
    }

    async fn run(&mut self, supervisor_tx: mpsc::Sender<ControlMessage>) -> anyhow::Result<()> {
        let heartbeat_handle = self.spawn_heartbeat(supervisor_tx.clone());

        info!(
            "Starting Parse Worker (every {:?}, batch of {})",
            self.poll_interval, self.batch_limit
        );

        let mut interval = time::interval(self.poll_interval);
        let mut failures = 0u32;

        loop {
            interval.tick().await;

            match parse_once(self.repo.as_ref(), self.batch_limit).await {
                Ok(0) => {
                    failures = 0;
                }
                Ok(handled) => {
                    failures = 0;
                    info!("Parsed {} signal block(s)", handled);
                }
                Err(e) => {
                    failures += 1;
                    let err_msg = format!("Parse batch failed: {:#}", e);
                    error!("{}", err_msg);
                    supervisor_tx
                        .send(ControlMessage::Error(self.name(), err_msg.clone()))
                        .await?;

                    if failures >= MAX_CONSECUTIVE_FAILURES {
                        heartbeat_handle.abort();
                        bail!(err_msg);
                    }
                }
            }
        }
    }
}

impl ParseWorkerActor {
    pub fn new(repo: Box<dyn ParseRepository>, poll_interval: Duration, batch_limit: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            repo,
            poll_interval,
            batch_limit,
        }
    }
}
