//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .discord_id("123456789")
///     .display_name("CustomUser")
///     .alert_enabled(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    display_name: String,
    alert_enabled: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented numeric string
    /// - display_name: `"User {id}"`
    /// - alert_enabled: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            display_name: format!("User {}", id),
            alert_enabled: false,
        }
    }

    /// Sets the external Discord id for the user.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the display name snapshot for the user.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the alert opt-in flag for the user.
    pub fn alert_enabled(mut self, alert_enabled: bool) -> Self {
        self.alert_enabled = alert_enabled;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            display_name: ActiveValue::Set(self.display_name),
            alert_enabled: ActiveValue::Set(self.alert_enabled),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific external Discord id.
pub async fn create_user_with_id(
    db: &DatabaseConnection,
    discord_id: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).discord_id(discord_id).build().await
}
