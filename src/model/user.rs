/// Parameters for creating or refreshing a user record.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: String,
    pub display_name: String,
}

/// A known Discord user and their alert preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub discord_id: String,
    pub display_name: String,
    pub alert_enabled: bool,
}

impl User {
    /// Converts a user entity into a user model.
    ///
    /// # Arguments
    /// - `entity` - The user database entity
    ///
    /// # Returns
    /// - `User` - The user model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            display_name: entity.display_name,
            alert_enabled: entity.alert_enabled,
        }
    }
}
