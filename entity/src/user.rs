use sea_orm::entity::prelude::*;

/// A guild member known to the bot.
///
/// Rows are created lazily the first time a user participates in any pod or
/// toggles the alert flag, and are never deleted. `discord_id` is the external
/// Discord user id stored as a string; `display_name` is a guild-scoped
/// snapshot taken at creation time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Users")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "UserId", unique)]
    pub discord_id: String,
    #[sea_orm(column_name = "DisplayName")]
    pub display_name: String,
    #[sea_orm(column_name = "AlertEnabled")]
    pub alert_enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pod_user::Entity")]
    PodUser,
}

impl Related<super::pod_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PodUser.def()
    }
}

impl Related<super::pod::Entity> for Entity {
    fn to() -> RelationDef {
        super::pod_user::Relation::Pod.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pod_user::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
