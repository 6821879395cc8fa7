//! Pod factory for creating test pod entities and membership edges.

use crate::factory::helpers::next_id;
use crate::factory::user::UserFactory;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pods with customizable fields.
///
/// Creates the pod row only; membership edges are added separately via
/// `add_participant` or by using `create_pod_with_host`.
pub struct PodFactory<'a> {
    db: &'a DatabaseConnection,
    message_id: Option<String>,
    location: String,
    format: String,
    max_players: i32,
    scheduled_date: String,
    scheduled_time: String,
    created_at: DateTime<Utc>,
}

impl<'a> PodFactory<'a> {
    /// Creates a new PodFactory with default values.
    ///
    /// Defaults:
    /// - message_id: auto-incremented numeric string
    /// - location: `"Tilburg Zuid"`
    /// - format: `"Commander"`
    /// - max_players: `4`
    /// - scheduled_date / scheduled_time: `"31-12-2099"` / `"19:30"` (far future)
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            message_id: Some(format!("9000000{}", id)),
            location: "Tilburg Zuid".to_string(),
            format: "Commander".to_string(),
            max_players: 4,
            scheduled_date: "31-12-2099".to_string(),
            scheduled_time: "19:30".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Sets the Discord message id, or clears it for a pod whose announcement
    /// has not been posted yet.
    pub fn message_id(mut self, message_id: Option<String>) -> Self {
        self.message_id = message_id;
        self
    }

    /// Sets the location text.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the game-format label.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Sets the maximum-players capacity.
    pub fn max_players(mut self, max_players: i32) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the scheduled date and time strings.
    pub fn scheduled(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.scheduled_date = date.into();
        self.scheduled_time = time.into();
        self
    }

    /// Sets the creation timestamp. Useful for seeding expired pods.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the pod entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pod::Model)` - Created pod entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pod::Model, DbErr> {
        entity::pod::ActiveModel {
            message_id: ActiveValue::Set(self.message_id),
            location: ActiveValue::Set(self.location),
            format: ActiveValue::Set(self.format),
            max_players: ActiveValue::Set(self.max_players),
            scheduled_date: ActiveValue::Set(self.scheduled_date),
            scheduled_time: ActiveValue::Set(self.scheduled_time),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a membership edge for an existing pod and user.
///
/// # Arguments
/// - `db` - Database connection
/// - `pod_id` - Pod primary key
/// - `user_id` - User primary key
/// - `position` - Ordered linking column; `0` marks the host
pub async fn add_participant(
    db: &DatabaseConnection,
    pod_id: i32,
    user_id: i32,
    position: i32,
) -> Result<entity::pod_user::Model, DbErr> {
    entity::pod_user::ActiveModel {
        pod_id: ActiveValue::Set(pod_id),
        user_id: ActiveValue::Set(user_id),
        position: ActiveValue::Set(position),
    }
    .insert(db)
    .await
}

/// Creates a pod with default values plus a host user at position 0.
///
/// # Returns
/// - `Ok((pod, host))` - Created pod and its host user
/// - `Err(DbErr)` - Database error during insert
pub async fn create_pod_with_host(
    db: &DatabaseConnection,
) -> Result<(entity::pod::Model, entity::user::Model), DbErr> {
    let host = UserFactory::new(db).build().await?;
    let pod = PodFactory::new(db).build().await?;
    add_participant(db, pod.id, host.id, 0).await?;

    Ok((pod, host))
}
