//! Application error hierarchy.
//!
//! `AppError` is the top-level error type for startup, Discord, scheduler, and
//! database failures. User-facing rule violations (capacity, authorization,
//! expiry) are deliberately not part of this hierarchy; they live in
//! `model::pod::PodError` and are turned into ephemeral replies, never logged
//! as errors.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates the error types that can occur outside the pod rule layer. Most
/// variants use `#[from]` for automatic conversion. A variant reaching `main`
/// aborts the process with a non-zero exit code.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup: missing token, unreadable config
    /// file, or an uncreatable data directory. Always fatal.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal issues indicating unexpected state, such as a stored Discord
    /// id that no longer parses.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error from the expiry sweeper.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
