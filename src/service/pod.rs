//! Pod lifecycle operations.
//!
//! Every mutation runs inside a transaction that re-reads the pod, re-checks
//! the rules, and applies the change, so two button presses racing each other
//! cannot overfill a pod or double-seat a user. Database-level conflicts are
//! retried a bounded number of times; on retry the re-checked rules turn the
//! race into the right user-facing reply.

use sea_orm::{DatabaseConnection, DbErr, TransactionError, TransactionTrait};
use thiserror::Error;
use tracing::warn;

use crate::data::pod::PodRepository;
use crate::data::user::UserRepository;
use crate::model::pod::{check_new_pod_size, CreatePodParam, Pod, PodError, UpdatePodParam};
use crate::model::user::UpsertUserParam;
use crate::util::time::amsterdam_now;

pub const CREATED_REPLY: &str = "Pod created!";
pub const JOINED_REPLY: &str = "You've successively joined the pod!";
pub const LEFT_REPLY: &str = "You've left the pod!";
pub const UPDATED_REPLY: &str = "Pod updated!";
pub const DELETED_REPLY: &str = "The pod has been removed!";

const MAX_ATTEMPTS: u32 = 3;

#[derive(Error, Debug)]
pub enum PodServiceError {
    /// A rule violation with a user-facing message.
    #[error(transparent)]
    Rule(#[from] PodError),
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl From<TransactionError<PodServiceError>> for PodServiceError {
    fn from(err: TransactionError<PodServiceError>) -> Self {
        match err {
            TransactionError::Connection(e) => PodServiceError::Db(e),
            TransactionError::Transaction(e) => e,
        }
    }
}

/// Whether a failed attempt should be retried.
///
/// Rule errors are final; a database conflict gets another attempt, whose
/// fresh read turns a lost race into the right user-facing reply.
fn retryable(result: &Result<Pod, PodServiceError>, attempt: u32) -> bool {
    matches!(result, Err(PodServiceError::Db(_))) && attempt < MAX_ATTEMPTS
}

pub struct PodService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PodService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pod hosted by the given user
    ///
    /// # Arguments
    /// - `host`: Discord ID and display name of the creating user
    /// - `param`: Pod field values from the create modal
    ///
    /// # Returns
    /// - `Ok(Pod)`: The created pod with the host seated
    /// - `Err(PodServiceError::Rule)`: Too few seats or a schedule in the past
    /// - `Err(PodServiceError::Db)`: Database error
    pub async fn create_pod(
        &self,
        host: UpsertUserParam,
        param: CreatePodParam,
    ) -> Result<Pod, PodServiceError> {
        check_new_pod_size(param.max_players)?;
        check_schedule_not_past(&param.scheduled_date, &param.scheduled_time)?;

        let mut attempt = 1;
        loop {
            let host = host.clone();
            let param = param.clone();
            let result = self
                .db
                .transaction::<_, Pod, PodServiceError>(move |txn| {
                    Box::pin(async move {
                        let user = UserRepository::new(txn).upsert(host).await?;
                        let pod = PodRepository::new(txn).create(param, user.id).await?;
                        Ok(pod)
                    })
                })
                .await
                .map_err(PodServiceError::from);

            if retryable(&result, attempt) {
                warn!("create_pod attempt {} hit a database error, retrying", attempt);
                attempt += 1;
                continue;
            }
            return result;
        }
    }

    /// Seats a user in the pod behind a card message
    ///
    /// # Arguments
    /// - `message_id`: Discord message ID of the pod card
    /// - `user`: Discord ID and display name of the joining user
    ///
    /// # Returns
    /// - `Ok(Pod)`: The pod with the user seated
    /// - `Err(PodServiceError::Rule)`: Pod missing, full, expired, or already
    ///   joined
    /// - `Err(PodServiceError::Db)`: Database error
    pub async fn join_pod(
        &self,
        message_id: &str,
        user: UpsertUserParam,
    ) -> Result<Pod, PodServiceError> {
        let mut attempt = 1;
        loop {
            let message_id = message_id.to_string();
            let user = user.clone();
            let result = self
                .db
                .transaction::<_, Pod, PodServiceError>(move |txn| {
                    Box::pin(async move {
                        let pods = PodRepository::new(txn);
                        let pod = pods
                            .find_by_message_id(&message_id)
                            .await?
                            .ok_or(PodError::NotFound)?;

                        pod.check_join(&user.discord_id, amsterdam_now())?;

                        let seated = UserRepository::new(txn).upsert(user).await?;
                        pods.add_participant(pod.id, seated.id).await?;

                        let pod = pods.find_by_id(pod.id).await?.ok_or(PodError::NotFound)?;
                        Ok(pod)
                    })
                })
                .await
                .map_err(PodServiceError::from);

            if retryable(&result, attempt) {
                warn!("join_pod attempt {} hit a database error, retrying", attempt);
                attempt += 1;
                continue;
            }
            return result;
        }
    }

    /// Removes a user from the pod behind a card message
    ///
    /// # Returns
    /// - `Ok(Pod)`: The pod with the user unseated
    /// - `Err(PodServiceError::Rule)`: Pod missing or expired, user unknown,
    ///   the host, or not a member
    /// - `Err(PodServiceError::Db)`: Database error
    pub async fn leave_pod(
        &self,
        message_id: &str,
        discord_id: &str,
    ) -> Result<Pod, PodServiceError> {
        let mut attempt = 1;
        loop {
            let message_id = message_id.to_string();
            let discord_id = discord_id.to_string();
            let result = self
                .db
                .transaction::<_, Pod, PodServiceError>(move |txn| {
                    Box::pin(async move {
                        let pods = PodRepository::new(txn);
                        let pod = pods
                            .find_by_message_id(&message_id)
                            .await?
                            .ok_or(PodError::NotFound)?;

                        let user = UserRepository::new(txn)
                            .find_by_discord_id(&discord_id)
                            .await?
                            .ok_or(PodError::UserNotFound)?;

                        pod.check_leave(&discord_id, amsterdam_now())?;

                        pods.remove_participant(pod.id, user.id).await?;

                        let pod = pods.find_by_id(pod.id).await?.ok_or(PodError::NotFound)?;
                        Ok(pod)
                    })
                })
                .await
                .map_err(PodServiceError::from);

            if retryable(&result, attempt) {
                warn!("leave_pod attempt {} hit a database error, retrying", attempt);
                attempt += 1;
                continue;
            }
            return result;
        }
    }

    /// Replaces the fields of the pod behind a card message
    ///
    /// Only the host may edit; the new capacity must seat the current roster
    /// and at least two players, and the new schedule may not be in the past.
    ///
    /// # Returns
    /// - `Ok(Pod)`: The updated pod
    /// - `Err(PodServiceError::Rule)`: Rule violation with a user-facing reply
    /// - `Err(PodServiceError::Db)`: Database error
    pub async fn edit_pod(
        &self,
        message_id: &str,
        discord_id: &str,
        param: UpdatePodParam,
    ) -> Result<Pod, PodServiceError> {
        check_schedule_not_past(&param.scheduled_date, &param.scheduled_time)?;

        let mut attempt = 1;
        loop {
            let message_id = message_id.to_string();
            let discord_id = discord_id.to_string();
            let param = param.clone();
            let result = self
                .db
                .transaction::<_, Pod, PodServiceError>(move |txn| {
                    Box::pin(async move {
                        let pods = PodRepository::new(txn);
                        let pod = pods
                            .find_by_message_id(&message_id)
                            .await?
                            .ok_or(PodError::NotFound)?;

                        pod.check_edit(&discord_id, param.max_players, amsterdam_now())?;

                        let pod = pods.update_fields(pod.id, param).await?;
                        Ok(pod)
                    })
                })
                .await
                .map_err(PodServiceError::from);

            if retryable(&result, attempt) {
                warn!("edit_pod attempt {} hit a database error, retrying", attempt);
                attempt += 1;
                continue;
            }
            return result;
        }
    }

    /// Deletes the pod behind a card message
    ///
    /// Expired pods may still be deleted by their host.
    ///
    /// # Returns
    /// - `Ok(Pod)`: The pod as it was before deletion
    /// - `Err(PodServiceError::Rule)`: Pod missing or the caller is not the
    ///   host
    /// - `Err(PodServiceError::Db)`: Database error
    pub async fn delete_pod(
        &self,
        message_id: &str,
        discord_id: &str,
    ) -> Result<Pod, PodServiceError> {
        let mut attempt = 1;
        loop {
            let message_id = message_id.to_string();
            let discord_id = discord_id.to_string();
            let result = self
                .db
                .transaction::<_, Pod, PodServiceError>(move |txn| {
                    Box::pin(async move {
                        let pods = PodRepository::new(txn);
                        let pod = pods
                            .find_by_message_id(&message_id)
                            .await?
                            .ok_or(PodError::NotFound)?;

                        pod.check_delete(&discord_id)?;

                        pods.delete(pod.id).await?;
                        Ok(pod)
                    })
                })
                .await
                .map_err(PodServiceError::from);

            if retryable(&result, attempt) {
                warn!("delete_pod attempt {} hit a database error, retrying", attempt);
                attempt += 1;
                continue;
            }
            return result;
        }
    }

    /// Records the card message ID on a freshly created pod.
    pub async fn attach_message(&self, pod_id: i32, message_id: &str) -> Result<(), DbErr> {
        PodRepository::new(self.db)
            .set_message_id(pod_id, message_id.to_string())
            .await
    }

    /// Gets the pod behind a card message without any checks.
    ///
    /// Used to re-render a card after a rule rejection, for example when a
    /// leave press reveals the pod has expired.
    pub async fn get_by_message_id(&self, message_id: &str) -> Result<Option<Pod>, DbErr> {
        PodRepository::new(self.db)
            .find_by_message_id(message_id)
            .await
    }
}

/// Rejects a schedule that parses to a moment already past.
///
/// Free-form schedules that do not parse are accepted as written.
fn check_schedule_not_past(date: &str, time: &str) -> Result<(), PodError> {
    use chrono::{NaiveDate, NaiveTime};

    let parsed_date = NaiveDate::parse_from_str(date.trim(), "%d-%m-%Y").ok();
    let parsed_time = NaiveTime::parse_from_str(time.trim(), "%H:%M").ok();

    if let (Some(date), Some(time)) = (parsed_date, parsed_time) {
        if date.and_time(time) < amsterdam_now() {
            return Err(PodError::PastSchedule);
        }
    }

    Ok(())
}
