use anyhow::bail;
use async_trait::async_trait;
use sqlx::SqlitePool;
use teloxide::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use uuid::Uuid;

use common::actors::{Actor, ActorType, ControlMessage};
use common::models::RawMessageInsert;
use storage::repositories::RawMessageRepository;

pub const ACKNOWLEDGEMENT: &str = "Принято ✅";

/// Captures every text message the bot receives into `raw_messages`.
pub struct TelegramRelayActor {
    id: Uuid,
    bot: Bot,
    pool: SqlitePool,
}

#[async_trait]
impl Actor for TelegramRelayActor {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> ActorType {
        ActorType::TelegramRelayActor
    }

    async fn run(&mut self, supervisor_tx: mpsc::Sender<ControlMessage>) -> anyhow::Result<()> {
        let heartbeat_handle = self.spawn_heartbeat(supervisor_tx.clone());

        info!("Starting Telegram Relay Service");

        let pool = self.pool.clone();
        teloxide::repl(self.bot.clone(), move |bot: Bot, msg: Message| {
            let pool = pool.clone();
            async move {
                Self::relay(&bot, &msg, &pool).await;
                respond(())
            }
        })
        .await;

        let err_msg = "Telegram polling stopped".to_string();
        heartbeat_handle.abort();
        supervisor_tx
            .send(ControlMessage::Error(self.name(), err_msg.clone()))
            .await?;
        bail!(err_msg);
    }
}

impl TelegramRelayActor {
    pub fn new(token: &str, pool: SqlitePool) -> Self {
        Self {
            id: Uuid::new_v4(),
            bot: Bot::new(token),
            pool,
        }
    }

    /// Only messages that made it into storage are acknowledged.
    async fn relay(bot: &Bot, msg: &Message, pool: &SqlitePool) {
        if capture(pool, msg).await.is_none() {
            return;
        }
        if let Err(e) = bot.send_message(msg.chat.id, ACKNOWLEDGEMENT).await {
            error!("Failed to send Telegram acknowledgement: {}", e);
        }
    }
}

/// Stores a text message and returns its row id.
async fn capture(pool: &SqlitePool, msg: &Message) -> Option<i64> {
    let insert = to_insert(msg)?;

    match RawMessageRepository::insert(pool, &insert).await {
        Ok(id) => {
            debug!("Stored raw message {} from chat {}", id, insert.chat_id);
            Some(id)
        }
        Err(e) => {
            error!("Failed to store raw message: {}", e);
            None
        }
    }
}

/// Non-text updates (stickers, photos without caption...) are ignored.
fn to_insert(msg: &Message) -> Option<RawMessageInsert> {
    let text = msg.text()?;
    Some(RawMessageInsert {
        chat_id: msg.chat.id.0,
        tg_user_id: msg.from.as_ref().and_then(|user| i64::try_from(user.id.0).ok()),
        message_id: i64::from(msg.id.0),
        text: text.to_string(),
        received_at: msg.date,
    })
}
