use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20241229_000001_create_users_table::Users, m20241230_000002_create_pods_table::Pods,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PodUser::Table)
                    .if_not_exists()
                    .col(integer(PodUser::PodsId))
                    .col(integer(PodUser::UsersId))
                    .col(integer(PodUser::Position))
                    .primary_key(
                        Index::create()
                            .name("PK_PodUser")
                            .col(PodUser::PodsId)
                            .col(PodUser::UsersId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_PodUser_Pods_PodsId")
                            .from(PodUser::Table, PodUser::PodsId)
                            .to(Pods::Table, Pods::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_PodUser_Users_UsersId")
                            .from(PodUser::Table, PodUser::UsersId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Host lookup reads the edge rows ordered by position
        manager
            .create_index(
                Index::create()
                    .name("IX_PodUser_PodsId_Position")
                    .table(PodUser::Table)
                    .col(PodUser::PodsId)
                    .col(PodUser::Position)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("IX_PodUser_PodsId_Position")
                    .table(PodUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PodUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PodUser {
    #[sea_orm(iden = "PodUser")]
    Table,
    #[sea_orm(iden = "PodsId")]
    PodsId,
    #[sea_orm(iden = "UsersId")]
    UsersId,
    #[sea_orm(iden = "Position")]
    Position,
}
