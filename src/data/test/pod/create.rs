use super::*;

/// Tests creating a pod.
///
/// Verifies that the repository inserts the pod row and seats the host at
/// position 0, returning the pod with its roster.
///
/// Expected: Ok with one participant, the host
#[tokio::test]
async fn creates_pod_with_host_at_position_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = create_user(db).await?;

    let repo = PodRepository::new(db);
    let pod = repo
        .create(
            CreatePodParam {
                location: "Tilburg Zuid".to_string(),
                format: "Commander".to_string(),
                max_players: 4,
                scheduled_date: "31-12-2099".to_string(),
                scheduled_time: "19:30".to_string(),
            },
            host.id,
        )
        .await?;

    assert_eq!(pod.location, "Tilburg Zuid");
    assert_eq!(pod.format, "Commander");
    assert_eq!(pod.max_players, 4);
    assert!(pod.message_id.is_none());
    assert_eq!(pod.participants.len(), 1);
    assert_eq!(pod.host().unwrap().discord_id, host.discord_id);

    Ok(())
}
