use crate::data::user::UserRepository;
use crate::model::user::UpsertUserParam;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::user::UserFactory;

mod find_by_discord_id;
mod list_alert_recipients;
mod upsert;
