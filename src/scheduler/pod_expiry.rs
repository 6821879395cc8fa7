//! Pod expiry sweep.
//!
//! Runs once when the cache is ready and daily thereafter. Two passes:
//!
//! 1. Cleanup: pods created more than thirty days ago get their card
//!    downgraded to read-only and their row deleted. The edit and the delete
//!    are not atomic; an orphaned card is preferred over a row that never
//!    leaves the database, so the row is deleted even when the edit fails.
//! 2. Refresh: every remaining pod's card is re-rendered live, which binds
//!    fresh button nonces after a restart.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use serenity::all::{ChannelId, EditMessage, Message, MessageId};
use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::data::pod::PodRepository;
use crate::error::AppError;
use crate::model::pod::Pod;
use crate::service::card::{control_rows, CardView, PodCard};

/// Pods older than this are swept regardless of their schedule text.
const RETENTION_DAYS: i64 = 30;

/// Daily at 04:00.
const SWEEP_CRON: &str = "0 0 4 * * *";

/// The creation timestamp below which a pod is considered dead.
pub fn retention_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(RETENTION_DAYS)
}

/// Runs one sweep, skipping if a previous sweep is still in flight.
pub async fn run_sweep(db: &DatabaseConnection, config: &Config, http: &Http, running: &AtomicBool) {
    if running
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        info!("Skipping pod sweep, previous run still in progress");
        return;
    }

    if let Err(e) = sweep(db, config, http).await {
        error!("Pod sweep failed: {}", e);
    }

    running.store(false, Ordering::SeqCst);
}

/// Schedules the daily sweep.
pub async fn start_schedule(
    db: DatabaseConnection,
    config: Arc<Config>,
    http: Arc<Http>,
    running: Arc<AtomicBool>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(SWEEP_CRON, move |_uuid, _lock| {
        let db = db.clone();
        let config = config.clone();
        let http = http.clone();
        let running = running.clone();
        Box::pin(async move {
            run_sweep(&db, &config, &http, &running).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    info!("Scheduled daily pod sweep");
    Ok(())
}

async fn sweep(db: &DatabaseConnection, config: &Config, http: &Http) -> Result<(), DbErr> {
    let repo = PodRepository::new(db);

    // Cleanup pass.
    let dead = repo.list_older_than(retention_cutoff(Utc::now())).await?;
    let dead_count = dead.len();
    for pod in &dead {
        if let Some(message) = find_card_message(config, http, pod).await {
            let card = PodCard::from_pod(pod);
            let edit = EditMessage::new()
                .embed(card.to_embed())
                .components(control_rows(CardView::ReadOnly));
            if let Err(e) = message
                .channel_id
                .edit_message(http, message.id, edit)
                .await
            {
                warn!("Failed to downgrade card of dead pod {}: {}", pod.id, e);
            }
        }

        repo.delete(pod.id).await?;
        info!("Swept pod {} created at {}", pod.id, pod.created_at);
    }

    // Refresh pass.
    let live = repo.list_all().await?;
    let live_count = live.len();
    for pod in &live {
        let Some(message) = find_card_message(config, http, pod).await else {
            continue;
        };

        let card = PodCard::from_pod(pod);
        let edit = EditMessage::new()
            .embed(card.to_embed())
            .components(control_rows(CardView::Live));
        if let Err(e) = message
            .channel_id
            .edit_message(http, message.id, edit)
            .await
        {
            warn!("Failed to refresh card of pod {}: {}", pod.id, e);
        }
    }

    info!(
        "Pod sweep finished: {} removed, {} refreshed",
        dead_count, live_count
    );
    Ok(())
}

/// Locates a pod's card message by probing the configured pod channels.
///
/// The pod row does not record its guild, so every configured channel is
/// tried until the message turns up.
async fn find_card_message(config: &Config, http: &Http, pod: &Pod) -> Option<Message> {
    let message_id = pod.message_id.clone()?;
    let message_id = match crate::util::parse::parse_u64_from_string(message_id) {
        Ok(id) => MessageId::new(id),
        Err(e) => {
            warn!("Pod {} has an unparseable message ID: {}", pod.id, e);
            return None;
        }
    };

    for channel_id in config.channel_ids() {
        if let Ok(message) = ChannelId::new(channel_id).message(http, message_id).await {
            return Some(message);
        }
    }

    None
}
