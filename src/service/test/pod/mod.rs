use crate::model::pod::{CreatePodParam, Pod, PodError, UpdatePodParam};
use crate::model::user::UpsertUserParam;
use crate::service::pod::{PodService, PodServiceError};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::{add_participant, create_pod_with_host, create_user};

mod create;
mod delete;
mod edit;
mod join;

/// Unwraps a rule violation from a service result.
fn rule(result: Result<Pod, PodServiceError>) -> PodError {
    match result {
        Err(PodServiceError::Rule(e)) => e,
        Ok(pod) => panic!("expected rule error, got pod {:?}", pod.id),
        Err(e) => panic!("expected rule error, got {:?}", e),
    }
}

fn upsert_param(discord_id: &str, display_name: &str) -> UpsertUserParam {
    UpsertUserParam {
        discord_id: discord_id.to_string(),
        display_name: display_name.to_string(),
    }
}

fn create_param() -> CreatePodParam {
    CreatePodParam {
        location: "Tilburg Zuid".to_string(),
        format: "Commander".to_string(),
        max_players: 4,
        scheduled_date: "31-12-2099".to_string(),
        scheduled_time: "19:30".to_string(),
    }
}
