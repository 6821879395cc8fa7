use super::*;

/// Tests joining a pod.
///
/// Verifies that the joiner lands after the host and their user row is
/// created lazily.
///
/// Expected: Ok with a two-member roster
#[tokio::test]
async fn seats_new_user_after_host() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, host) = create_pod_with_host(db).await?;
    let message_id = pod.message_id.unwrap();

    let service = PodService::new(db);
    let joined = service
        .join_pod(&message_id, upsert_param("777", "Bram"))
        .await
        .unwrap();

    assert_eq!(joined.participants.len(), 2);
    assert_eq!(joined.host().unwrap().discord_id, host.discord_id);
    assert_eq!(joined.participants[1].discord_id, "777");

    Ok(())
}

/// Tests joining through an unknown message.
///
/// Expected: Err "Pod not found! It might have expired."
#[tokio::test]
async fn rejects_unknown_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PodService::new(db);
    let result = service
        .join_pod("424242424242", upsert_param("777", "Bram"))
        .await;

    assert_eq!(rule(result), PodError::NotFound);

    Ok(())
}

/// Tests joining a full pod.
///
/// Expected: Err "Pod is full!"
#[tokio::test]
async fn rejects_join_when_full() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, _host) = create_pod_with_host(db).await?;
    let message_id = pod.message_id.unwrap();

    let service = PodService::new(db);
    service
        .join_pod(&message_id, upsert_param("201", "B"))
        .await
        .unwrap();
    service
        .join_pod(&message_id, upsert_param("202", "C"))
        .await
        .unwrap();
    service
        .join_pod(&message_id, upsert_param("203", "D"))
        .await
        .unwrap();

    let result = service.join_pod(&message_id, upsert_param("204", "E")).await;

    assert_eq!(rule(result), PodError::Full);

    Ok(())
}

/// Tests a member pressing join again.
///
/// Expected: Err "You've already joined this pod!"
#[tokio::test]
async fn rejects_double_join() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, _host) = create_pod_with_host(db).await?;
    let message_id = pod.message_id.unwrap();

    let service = PodService::new(db);
    service
        .join_pod(&message_id, upsert_param("777", "Bram"))
        .await
        .unwrap();
    let result = service.join_pod(&message_id, upsert_param("777", "Bram")).await;

    assert_eq!(rule(result), PodError::AlreadyJoined);

    Ok(())
}

/// Tests joining a pod whose scheduled moment has passed.
///
/// Expected: Err "Pod has expired!"
#[tokio::test]
async fn rejects_join_after_schedule() -> Result<(), DbErr> {
    use test_utils::factory::pod::PodFactory;

    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = create_user(db).await?;
    let pod = PodFactory::new(db)
        .scheduled("01-01-2020", "18:00")
        .build()
        .await?;
    add_participant(db, pod.id, host.id, 0).await?;

    let service = PodService::new(db);
    let result = service
        .join_pod(pod.message_id.as_deref().unwrap(), upsert_param("777", "Bram"))
        .await;

    assert_eq!(rule(result), PodError::Expired);

    Ok(())
}

/// Tests two users racing for the last seat.
///
/// The capacity check and the insert run in one transaction, so exactly one
/// of the racing joins wins and the pod never overfills.
///
/// Expected: one Ok and one "Pod is full!", roster at capacity
#[tokio::test]
async fn concurrent_joins_never_overfill() -> Result<(), DbErr> {
    use test_utils::factory::pod::PodFactory;

    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = create_user(db).await?;
    let pod = PodFactory::new(db).max_players(2).build().await?;
    add_participant(db, pod.id, host.id, 0).await?;
    let message_id = pod.message_id.unwrap();

    let service = PodService::new(db);
    let (first, second) = tokio::join!(
        service.join_pod(&message_id, upsert_param("201", "B")),
        service.join_pod(&message_id, upsert_param("202", "C")),
    );

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);

    let losing = if first.is_ok() { second } else { first };
    assert_eq!(rule(losing), PodError::Full);

    let pod = service.get_by_message_id(&message_id).await?.unwrap();
    assert_eq!(pod.current_players(), 2);

    Ok(())
}
