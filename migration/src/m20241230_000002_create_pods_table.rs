use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pods::Table)
                    .if_not_exists()
                    .col(pk_auto(Pods::Id))
                    .col(string_null(Pods::MessageId))
                    .col(string(Pods::Location))
                    .col(string(Pods::Type))
                    .col(integer(Pods::MaxPlayers))
                    .col(timestamp(Pods::When))
                    .col(
                        timestamp(Pods::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One live pod per announcement message
        manager
            .create_index(
                Index::create()
                    .name("IX_Pods_MessageId")
                    .table(Pods::Table)
                    .col(Pods::MessageId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("IX_Pods_MessageId")
                    .table(Pods::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Pods::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pods {
    #[sea_orm(iden = "Pods")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "MessageId")]
    MessageId,
    #[sea_orm(iden = "Location")]
    Location,
    #[sea_orm(iden = "Type")]
    Type,
    #[sea_orm(iden = "MaxPlayers")]
    MaxPlayers,
    #[sea_orm(iden = "When")]
    When,
    #[sea_orm(iden = "CreatedAt")]
    CreatedAt,
}
