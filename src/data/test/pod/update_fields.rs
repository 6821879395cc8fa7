use super::*;

/// Tests replacing a pod's editable fields.
///
/// Expected: Ok with all five fields replaced and the roster intact
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, host) = create_pod_with_host(db).await?;

    let repo = PodRepository::new(db);
    let updated = repo
        .update_fields(
            pod.id,
            UpdatePodParam {
                location: "Eindhoven Centrum".to_string(),
                format: "Modern".to_string(),
                max_players: 6,
                scheduled_date: "01-01-2100".to_string(),
                scheduled_time: "20:00".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.location, "Eindhoven Centrum");
    assert_eq!(updated.format, "Modern");
    assert_eq!(updated.max_players, 6);
    assert_eq!(updated.scheduled_date, "01-01-2100");
    assert_eq!(updated.scheduled_time, "20:00");
    assert_eq!(updated.host().unwrap().discord_id, host.discord_id);

    Ok(())
}

/// Tests editing a missing pod.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn errors_for_missing_pod() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PodRepository::new(db);
    let result = repo
        .update_fields(
            9999,
            UpdatePodParam {
                location: "Nowhere".to_string(),
                format: "Commander".to_string(),
                max_players: 4,
                scheduled_date: "31-12-2099".to_string(),
                scheduled_time: "19:30".to_string(),
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
