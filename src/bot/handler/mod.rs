//! Discord event handler.
//!
//! Delegates interaction events to [`interaction`] and owns the expiry sweep
//! startup: the first `cache_ready` after connecting runs an immediate sweep
//! and starts the daily schedule, guarded so reconnects do not start a second
//! scheduler.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{Command, Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;
use tracing::{error, info};

use crate::bot::commands;
use crate::config::Config;
use crate::scheduler::pod_expiry;

pub mod interaction;

pub struct Handler {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub started_at: DateTime<Utc>,
    scheduler_started: AtomicBool,
    sweep_running: Arc<AtomicBool>,
}

impl Handler {
    pub fn new(db: DatabaseConnection, config: Arc<Config>) -> Self {
        Self {
            db,
            config,
            started_at: Utc::now(),
            scheduler_started: AtomicBool::new(false),
            sweep_running: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected to Discord!", ready.user.name);

        if let Err(e) = Command::set_global_commands(&ctx.http, commands::command_definitions()).await
        {
            error!("Failed to register slash commands: {}", e);
        }
    }

    /// Runs once guild metadata is cached, when pod messages become reachable.
    async fn cache_ready(&self, ctx: Context, _guilds: Vec<GuildId>) {
        if self
            .scheduler_started
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        pod_expiry::run_sweep(
            &self.db,
            &self.config,
            &ctx.http,
            &self.sweep_running,
        )
        .await;

        if let Err(e) = pod_expiry::start_schedule(
            self.db.clone(),
            self.config.clone(),
            ctx.http.clone(),
            self.sweep_running.clone(),
        )
        .await
        {
            error!("Failed to start expiry sweep schedule: {}", e);
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let result = match interaction {
            Interaction::Command(cmd) => interaction::handle_command(self, &ctx, cmd).await,
            Interaction::Component(component) => {
                interaction::handle_component(self, &ctx, component).await
            }
            Interaction::Modal(modal) => interaction::handle_modal(self, &ctx, modal).await,
            _ => Ok(()),
        };

        if let Err(e) = result {
            error!("Failed to handle interaction: {}", e);
        }
    }
}
