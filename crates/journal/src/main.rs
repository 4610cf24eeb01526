use dotenvy::dotenv;
use tracing::{debug, info, warn};

use common::actors::ActorType;
use common::config::AppConfig;
use common::logger;

use crate::actors::supervisor::Supervisor;
use crate::services::parse_worker::{ParseWorkerActor, SqliteParseRepository};
use crate::services::telegram_relay::TelegramRelayActor;

mod actors;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logger::setup_logger();
    debug!("System starting up...");

    let config = AppConfig::from_env()?;
    let pool = storage::db::connect(&config.database_url).await?;

    let mut supervisor = Supervisor::new();

    let pool_for_worker = pool.clone();
    let poll_interval = config.poll_interval;
    let batch_limit = config.batch_limit;
    supervisor.register_actor(
        ActorType::ParseWorkerActor,
        Box::new(move || {
            Box::new(ParseWorkerActor::new(
                Box::new(SqliteParseRepository::new(pool_for_worker.clone())),
                poll_interval,
                batch_limit,
            ))
        }),
    );

    match config.telegram_bot_token {
        Some(token) => {
            let pool_for_relay = pool.clone();
            supervisor.register_actor(
                ActorType::TelegramRelayActor,
                Box::new(move || Box::new(TelegramRelayActor::new(&token, pool_for_relay.clone()))),
            );
        }
        None => warn!("TELEGRAM_BOT_TOKEN not set, chat relay disabled"),
    }

    info!("Journal running against {}", config.database_url);
    supervisor.start().await;
    Ok(())
}
