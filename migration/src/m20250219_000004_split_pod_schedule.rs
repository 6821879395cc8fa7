use sea_orm_migration::{prelude::*, schema::*};

use super::m20241230_000002_create_pods_table::Pods;

/// Replaces the hard `When` timestamp with free-form date and time strings.
///
/// The scheduled moment is user-entered text; parsing it eagerly caused more
/// failed pod creations than it prevented. The strings are parsed lazily
/// where an expiry check needs a real timestamp.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Pods::Table)
                    .add_column(string(Split::Date).default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Pods::Table)
                    .add_column(string(Split::Time).default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Pods::Table)
                    .drop_column(Pods::When)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Pods::Table)
                    .add_column(timestamp(Pods::When).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Pods::Table)
                    .drop_column(Split::Time)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Pods::Table)
                    .drop_column(Split::Date)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Split {
    #[sea_orm(iden = "Date")]
    Date,
    #[sea_orm(iden = "Time")]
    Time,
}
