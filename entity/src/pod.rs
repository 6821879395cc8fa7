use sea_orm::entity::prelude::*;

/// A scheduled kitchen-table pod backed by one Discord announcement message.
///
/// `message_id` is the external Discord message id, assigned after the
/// announcement is posted and unique across live pods once set. The schedule
/// is stored as two free-form strings (`dd-MM-yyyy` and `HH:mm` as last
/// written); `created_at` is the UTC creation timestamp the expiry sweeper
/// uses.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Pods")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "MessageId", unique)]
    pub message_id: Option<String>,
    #[sea_orm(column_name = "Location")]
    pub location: String,
    #[sea_orm(column_name = "Type")]
    pub format: String,
    #[sea_orm(column_name = "MaxPlayers")]
    pub max_players: i32,
    #[sea_orm(column_name = "Date")]
    pub scheduled_date: String,
    #[sea_orm(column_name = "Time")]
    pub scheduled_time: String,
    #[sea_orm(column_name = "CreatedAt")]
    pub created_at: DateTimeUtc,
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

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::pod_user::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pod_user::Relation::Pod.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
