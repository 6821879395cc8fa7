use super::*;

/// Tests seating a user in a pod.
///
/// Verifies that the new member lands after the existing roster.
///
/// Expected: Ok with the member appended at the next position
#[tokio::test]
async fn seats_user_at_next_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, host) = create_pod_with_host(db).await?;
    let joiner = create_user(db).await?;

    let repo = PodRepository::new(db);
    repo.add_participant(pod.id, joiner.id).await?;

    let found = repo.find_by_id(pod.id).await?.unwrap();
    assert_eq!(found.participants.len(), 2);
    assert_eq!(found.participants[0].discord_id, host.discord_id);
    assert_eq!(found.participants[1].discord_id, joiner.discord_id);

    Ok(())
}

/// Tests seating the same user twice.
///
/// The membership table's composite primary key forbids a second row for the
/// same pod and user.
///
/// Expected: Err on the duplicate insert
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, host) = create_pod_with_host(db).await?;

    let repo = PodRepository::new(db);
    let result = repo.add_participant(pod.id, host.id).await;

    assert!(result.is_err());

    Ok(())
}
