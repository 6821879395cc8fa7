use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::user::{UpsertUserParam, User};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by their Discord ID
    ///
    /// # Arguments
    /// - `discord_id`: Discord ID of the user (u64, stored as string)
    ///
    /// # Returns
    /// - `Ok(Some(User))`: The user
    /// - `Ok(None)`: No user with that Discord ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_discord_id(&self, discord_id: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(discord_id))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Creates a user if missing, refreshing the display name if it changed
    ///
    /// The alert preference is never touched here; it only changes through
    /// [`UserRepository::toggle_alert`].
    ///
    /// # Arguments
    /// - `param`: Discord ID and current display name
    ///
    /// # Returns
    /// - `Ok(User)`: The created or existing user
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let existing = entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(param.discord_id.as_str()))
            .one(self.db)
            .await?;

        let user = match existing {
            Some(user) if user.display_name == param.display_name => user,
            Some(user) => {
                let mut active: entity::user::ActiveModel = user.into();
                active.display_name = ActiveValue::Set(param.display_name);
                active.update(self.db).await?
            }
            None => {
                entity::user::ActiveModel {
                    discord_id: ActiveValue::Set(param.discord_id),
                    display_name: ActiveValue::Set(param.display_name),
                    alert_enabled: ActiveValue::Set(false),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(User::from_entity(user))
    }

    /// Flips the alert preference for a user, creating them opted in if they
    /// were unknown
    ///
    /// # Arguments
    /// - `param`: Discord ID and current display name
    ///
    /// # Returns
    /// - `Ok(bool)`: The new alert state
    /// - `Err(DbErr)`: Database error
    pub async fn toggle_alert(&self, param: UpsertUserParam) -> Result<bool, DbErr> {
        let existing = entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(param.discord_id.as_str()))
            .one(self.db)
            .await?;

        match existing {
            Some(user) => {
                let enabled = !user.alert_enabled;
                let mut active: entity::user::ActiveModel = user.into();
                active.alert_enabled = ActiveValue::Set(enabled);
                active.display_name = ActiveValue::Set(param.display_name);
                active.update(self.db).await?;
                Ok(enabled)
            }
            None => {
                entity::user::ActiveModel {
                    discord_id: ActiveValue::Set(param.discord_id),
                    display_name: ActiveValue::Set(param.display_name),
                    alert_enabled: ActiveValue::Set(true),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
                Ok(true)
            }
        }
    }

    /// Gets every user opted into alerts, excluding one Discord ID
    ///
    /// # Arguments
    /// - `exclude_discord_id`: Discord ID to leave out, typically the pod host
    ///
    /// # Returns
    /// - `Ok(users)`: Alert recipients
    /// - `Err(DbErr)`: Database error
    pub async fn list_alert_recipients(
        &self,
        exclude_discord_id: &str,
    ) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .filter(entity::user::Column::AlertEnabled.eq(true))
            .filter(entity::user::Column::DiscordId.ne(exclude_discord_id))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }
}
