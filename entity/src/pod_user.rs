use sea_orm::entity::prelude::*;

/// Pod membership edge.
///
/// `position` is the ordered linking column: participants are read back in
/// ascending `position` order and the row with the lowest position is the
/// pod's host for the pod's entire lifetime.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "PodUser")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "PodsId")]
    pub pod_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "UsersId")]
    pub user_id: i32,
    #[sea_orm(column_name = "Position")]
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pod::Entity",
        from = "Column::PodId",
        to = "super::pod::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Pod,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::pod::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pod.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
