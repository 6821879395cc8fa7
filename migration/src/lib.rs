pub use sea_orm_migration::prelude::*;

mod m20241229_000001_create_users_table;
mod m20241230_000002_create_pods_table;
mod m20241230_000003_create_pod_user_table;
mod m20250219_000004_split_pod_schedule;
mod m20250629_000005_add_alert_to_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241229_000001_create_users_table::Migration),
            Box::new(m20241230_000002_create_pods_table::Migration),
            Box::new(m20241230_000003_create_pod_user_table::Migration),
            Box::new(m20250219_000004_split_pod_schedule::Migration),
            Box::new(m20250629_000005_add_alert_to_users::Migration),
        ]
    }
}
