use super::*;

/// Tests the host deleting a pod.
///
/// Expected: Ok with the pod gone from the store
#[tokio::test]
async fn host_deletes_pod() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, host) = create_pod_with_host(db).await?;
    let message_id = pod.message_id.unwrap();

    let service = PodService::new(db);
    let deleted = service
        .delete_pod(&message_id, &host.discord_id)
        .await
        .unwrap();

    assert_eq!(deleted.id, pod.id);
    assert!(service.get_by_message_id(&message_id).await?.is_none());

    Ok(())
}

/// Tests a member attempting a delete.
///
/// Expected: Err "Only the host can delete the pod!" and the pod kept
#[tokio::test]
async fn rejects_delete_by_non_host() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, _host) = create_pod_with_host(db).await?;
    let member = create_user(db).await?;
    add_participant(db, pod.id, member.id, 1).await?;
    let message_id = pod.message_id.unwrap();

    let service = PodService::new(db);
    let result = service.delete_pod(&message_id, &member.discord_id).await;

    assert_eq!(rule(result), PodError::NotHostDelete);
    assert!(service.get_by_message_id(&message_id).await?.is_some());

    Ok(())
}

/// Tests deleting an expired pod.
///
/// Expiry does not block the host from cleaning up their own pod.
///
/// Expected: Ok
#[tokio::test]
async fn host_deletes_expired_pod() -> Result<(), DbErr> {
    use test_utils::factory::pod::PodFactory;

    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = create_user(db).await?;
    let pod = PodFactory::new(db)
        .scheduled("01-01-2020", "18:00")
        .build()
        .await?;
    add_participant(db, pod.id, host.id, 0).await?;
    let message_id = pod.message_id.unwrap();

    let service = PodService::new(db);
    service
        .delete_pod(&message_id, &host.discord_id)
        .await
        .unwrap();

    assert!(service.get_by_message_id(&message_id).await?.is_none());

    Ok(())
}
