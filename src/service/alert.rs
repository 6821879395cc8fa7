//! New-pod alert fan-out.
//!
//! After a pod creation commits, every user opted into alerts (except the
//! host) receives a direct message with the pod card. Per-recipient failures
//! are logged and swallowed; the dispatcher returns once every attempt has
//! resolved.

use sea_orm::{DatabaseConnection, DbErr};
use serenity::all::{CreateMessage, UserId};
use serenity::http::Http;
use tracing::{info, warn};

use crate::data::user::UserRepository;
use crate::model::pod::Pod;
use crate::service::card::PodCard;

pub struct AlertService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Direct-messages every opted-in user about a newly created pod
    ///
    /// # Arguments
    /// - `http`: Discord HTTP client
    /// - `pod`: The committed pod; its host is excluded from the fan-out
    ///
    /// # Returns
    /// - `Ok(())`: All attempts resolved, failed sends logged
    /// - `Err(DbErr)`: Recipient list could not be loaded
    pub async fn notify_new_pod(&self, http: &Http, pod: &Pod) -> Result<(), DbErr> {
        let Some(host) = pod.host() else {
            return Ok(());
        };

        let recipients = UserRepository::new(self.db)
            .list_alert_recipients(&host.discord_id)
            .await?;
        if recipients.is_empty() {
            return Ok(());
        }

        let content = format!("A new pod has been created by {}!", host.display_name);
        let card = PodCard::from_pod(pod);

        let mut sent = 0;
        for recipient in &recipients {
            let user_id = match crate::util::parse::parse_u64_from_string(recipient.discord_id.clone())
            {
                Ok(id) => UserId::new(id),
                Err(e) => {
                    warn!(
                        "Skipping alert for user {} with bad Discord ID: {}",
                        recipient.id, e
                    );
                    continue;
                }
            };

            let channel = match user_id.create_dm_channel(http).await {
                Ok(channel) => channel,
                Err(e) => {
                    warn!("Failed to open DM channel for {}: {}", user_id, e);
                    continue;
                }
            };

            let message = CreateMessage::new()
                .content(&content)
                .embed(card.to_embed());
            match channel.send_message(http, message).await {
                Ok(_) => sent += 1,
                Err(e) => warn!("Failed to send pod alert to {}: {}", user_id, e),
            }
        }

        info!(
            "Dispatched pod {} alert to {}/{} recipients",
            pod.id,
            sent,
            recipients.len()
        );

        Ok(())
    }
}
