use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

/// A pod's minimum number of seats, host included.
pub const MIN_PLAYERS: i32 = 2;

/// Rule violations surfaced directly to the interacting user.
///
/// The display strings are the exact ephemeral replies the bot sends, so
/// every variant formats as a complete sentence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PodError {
    #[error("Pod not found! It might have expired.")]
    NotFound,
    #[error("Pod is full!")]
    Full,
    #[error("You've already joined this pod!")]
    AlreadyJoined,
    #[error("Only the host can delete the pod!")]
    NotHostDelete,
    #[error("Only the host can edit the pod!")]
    NotHostEdit,
    #[error("You can't leave your own pod!")]
    HostCannotLeave,
    #[error("You've not joined this pod!")]
    NotJoined,
    #[error("Pod must have at least 2 players!")]
    BelowMinimum,
    #[error("Can't reduce the number of players below the current amount!")]
    BelowCurrentCount,
    #[error("Pod has expired!")]
    Expired,
    #[error("Pod can't be in the past!")]
    PastSchedule,
    #[error("Couldn't find user! This shouldn't happen.")]
    UserNotFound,
}

/// Parameters for creating a new pod.
#[derive(Debug, Clone)]
pub struct CreatePodParam {
    pub location: String,
    pub format: String,
    pub max_players: i32,
    pub scheduled_date: String,
    pub scheduled_time: String,
}

/// Parameters for editing an existing pod. Every field is replaced.
#[derive(Debug, Clone)]
pub struct UpdatePodParam {
    pub location: String,
    pub format: String,
    pub max_players: i32,
    pub scheduled_date: String,
    pub scheduled_time: String,
}

/// One seat in a pod, ordered by join position.
///
/// Position 0 is always the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub user_id: i32,
    pub discord_id: String,
    pub display_name: String,
}

/// A pod with its participant roster, loaded as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pod {
    pub id: i32,
    pub message_id: Option<String>,
    pub location: String,
    pub format: String,
    pub max_players: i32,
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub created_at: DateTime<Utc>,
    /// Participants in join order; index 0 is the host.
    pub participants: Vec<Participant>,
}

impl Pod {
    /// Converts a pod entity and its ordered participants into a pod model.
    ///
    /// # Arguments
    /// - `entity` - The pod database entity
    /// - `participants` - The roster in ascending position order
    ///
    /// # Returns
    /// - `Pod` - The pod model
    pub fn from_entity(entity: entity::pod::Model, participants: Vec<Participant>) -> Self {
        Self {
            id: entity.id,
            message_id: entity.message_id,
            location: entity.location,
            format: entity.format,
            max_players: entity.max_players,
            scheduled_date: entity.scheduled_date,
            scheduled_time: entity.scheduled_time,
            created_at: entity.created_at,
            participants,
        }
    }

    /// The first participant. Pods always have at least one seat filled, but
    /// a row observed mid-delete can come back empty.
    pub fn host(&self) -> Option<&Participant> {
        self.participants.first()
    }

    pub fn current_players(&self) -> i32 {
        self.participants.len() as i32
    }

    pub fn is_full(&self) -> bool {
        self.current_players() >= self.max_players
    }

    pub fn contains(&self, discord_id: &str) -> bool {
        self.participants.iter().any(|p| p.discord_id == discord_id)
    }

    pub fn is_host(&self, discord_id: &str) -> bool {
        self.host().map(|h| h.discord_id == discord_id).unwrap_or(false)
    }

    /// Parses the free-form date and time fields into a schedule, if they
    /// happen to be in `dd-MM-yyyy` and `HH:mm` form.
    ///
    /// The fields are stored verbatim from the modal, so a pod scheduled as
    /// "next friday" simply has no machine-readable schedule and never counts
    /// as expired on that basis.
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.scheduled_date.trim(), "%d-%m-%Y").ok()?;
        let time = NaiveTime::parse_from_str(self.scheduled_time.trim(), "%H:%M").ok()?;
        Some(date.and_time(time))
    }

    /// Whether the pod's parseable schedule lies in the past.
    ///
    /// # Arguments
    /// - `now_local` - Current Europe/Amsterdam wall time
    pub fn has_expired(&self, now_local: NaiveDateTime) -> bool {
        self.scheduled_at().map(|at| at < now_local).unwrap_or(false)
    }

    /// Validates a join attempt.
    pub fn check_join(&self, discord_id: &str, now_local: NaiveDateTime) -> Result<(), PodError> {
        if self.is_full() {
            return Err(PodError::Full);
        }
        if self.contains(discord_id) {
            return Err(PodError::AlreadyJoined);
        }
        if self.has_expired(now_local) {
            return Err(PodError::Expired);
        }
        Ok(())
    }

    /// Validates a leave attempt.
    pub fn check_leave(&self, discord_id: &str, now_local: NaiveDateTime) -> Result<(), PodError> {
        if self.has_expired(now_local) {
            return Err(PodError::Expired);
        }
        if self.is_host(discord_id) {
            return Err(PodError::HostCannotLeave);
        }
        if !self.contains(discord_id) {
            return Err(PodError::NotJoined);
        }
        Ok(())
    }

    /// Validates an edit attempt against the requested new player count.
    pub fn check_edit(
        &self,
        discord_id: &str,
        new_max_players: i32,
        now_local: NaiveDateTime,
    ) -> Result<(), PodError> {
        if self.has_expired(now_local) {
            return Err(PodError::Expired);
        }
        if !self.is_host(discord_id) {
            return Err(PodError::NotHostEdit);
        }
        if new_max_players < self.current_players() {
            return Err(PodError::BelowCurrentCount);
        }
        if new_max_players < MIN_PLAYERS {
            return Err(PodError::BelowMinimum);
        }
        Ok(())
    }

    /// Validates a delete attempt. Expired pods may still be deleted by the
    /// host.
    pub fn check_delete(&self, discord_id: &str) -> Result<(), PodError> {
        if !self.is_host(discord_id) {
            return Err(PodError::NotHostDelete);
        }
        Ok(())
    }
}

/// Validates the requested size for a new pod.
pub fn check_new_pod_size(max_players: i32) -> Result<(), PodError> {
    if max_players < MIN_PLAYERS {
        return Err(PodError::BelowMinimum);
    }
    Ok(())
}
