use super::*;

/// Tests creating a pod through the service.
///
/// Verifies that the host user is created lazily and seated at position 0.
///
/// Expected: Ok with a one-member roster and no message ID yet
#[tokio::test]
async fn creates_pod_and_host_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PodService::new(db);
    let pod = service
        .create_pod(upsert_param("100", "Anna"), create_param())
        .await
        .unwrap();

    assert_eq!(pod.participants.len(), 1);
    assert_eq!(pod.host().unwrap().discord_id, "100");
    assert_eq!(pod.host().unwrap().display_name, "Anna");
    assert!(pod.message_id.is_none());

    Ok(())
}

/// Tests creating a pod for a user the bot has seen before.
///
/// Verifies that the existing user row is reused rather than duplicated.
///
/// Expected: Ok with the host's existing internal ID
#[tokio::test]
async fn reuses_known_host_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = create_user(db).await?;

    let service = PodService::new(db);
    let pod = service
        .create_pod(
            upsert_param(&existing.discord_id, &existing.display_name),
            create_param(),
        )
        .await
        .unwrap();

    assert_eq!(pod.host().unwrap().user_id, existing.id);

    Ok(())
}

/// Tests creating a pod with fewer than two seats.
///
/// Expected: Err "Pod must have at least 2 players!"
#[tokio::test]
async fn rejects_single_seat_pod() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PodService::new(db);
    let mut param = create_param();
    param.max_players = 1;

    let result = service.create_pod(upsert_param("100", "Anna"), param).await;

    assert_eq!(rule(result), PodError::BelowMinimum);

    Ok(())
}

/// Tests creating a pod scheduled in the past.
///
/// Expected: Err "Pod can't be in the past!"
#[tokio::test]
async fn rejects_past_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PodService::new(db);
    let mut param = create_param();
    param.scheduled_date = "01-01-2020".to_string();
    param.scheduled_time = "18:00".to_string();

    let result = service.create_pod(upsert_param("100", "Anna"), param).await;

    assert_eq!(rule(result), PodError::PastSchedule);

    Ok(())
}

/// Tests creating a pod with a free-form schedule.
///
/// A schedule the bot cannot parse is stored verbatim and never rejected as
/// past.
///
/// Expected: Ok with the text preserved
#[tokio::test]
async fn accepts_free_form_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PodService::new(db);
    let mut param = create_param();
    param.scheduled_date = "next friday".to_string();
    param.scheduled_time = "after dinner".to_string();

    let pod = service
        .create_pod(upsert_param("100", "Anna"), param)
        .await
        .unwrap();

    assert_eq!(pod.scheduled_date, "next friday");
    assert_eq!(pod.scheduled_time, "after dinner");

    Ok(())
}
