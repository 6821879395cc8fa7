use super::*;

fn update_param() -> UpdatePodParam {
    UpdatePodParam {
        location: "Eindhoven Centrum".to_string(),
        format: "Modern".to_string(),
        max_players: 6,
        scheduled_date: "01-01-2100".to_string(),
        scheduled_time: "20:00".to_string(),
    }
}

/// Tests the host editing a pod.
///
/// Verifies that every mutable field is replaced and readable back through
/// the message lookup.
///
/// Expected: Ok with all fields replaced and the roster intact
#[tokio::test]
async fn host_replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, host) = create_pod_with_host(db).await?;
    let message_id = pod.message_id.unwrap();

    let service = PodService::new(db);
    service
        .edit_pod(&message_id, &host.discord_id, update_param())
        .await
        .unwrap();

    let reloaded = service.get_by_message_id(&message_id).await?.unwrap();
    assert_eq!(reloaded.location, "Eindhoven Centrum");
    assert_eq!(reloaded.format, "Modern");
    assert_eq!(reloaded.max_players, 6);
    assert_eq!(reloaded.scheduled_date, "01-01-2100");
    assert_eq!(reloaded.scheduled_time, "20:00");
    assert_eq!(reloaded.host().unwrap().discord_id, host.discord_id);

    Ok(())
}

/// Tests submitting the edit modal without changing anything.
///
/// Re-saving the currently stored values must be an identity operation on
/// both the stored pod and its rendered card.
///
/// Expected: Ok with the pod and card unchanged
#[tokio::test]
async fn edit_with_current_values_is_identity() -> Result<(), DbErr> {
    use crate::service::card::PodCard;

    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, host) = create_pod_with_host(db).await?;
    let message_id = pod.message_id.clone().unwrap();

    let service = PodService::new(db);
    let before = service.get_by_message_id(&message_id).await?.unwrap();

    let after = service
        .edit_pod(
            &message_id,
            &host.discord_id,
            UpdatePodParam {
                location: before.location.clone(),
                format: before.format.clone(),
                max_players: before.max_players,
                scheduled_date: before.scheduled_date.clone(),
                scheduled_time: before.scheduled_time.clone(),
            },
        )
        .await
        .unwrap();

    assert_eq!(after, before);
    assert_eq!(PodCard::from_pod(&after), PodCard::from_pod(&before));

    Ok(())
}

/// Tests a non-host attempting an edit.
///
/// Expected: Err "Only the host can edit the pod!"
#[tokio::test]
async fn rejects_edit_by_non_host() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, _host) = create_pod_with_host(db).await?;
    let member = create_user(db).await?;
    add_participant(db, pod.id, member.id, 1).await?;

    let service = PodService::new(db);
    let result = service
        .edit_pod(
            pod.message_id.as_deref().unwrap(),
            &member.discord_id,
            update_param(),
        )
        .await;

    assert_eq!(rule(result), PodError::NotHostEdit);

    Ok(())
}

/// Tests shrinking a pod below its current roster.
///
/// Expected: Err "Can't reduce the number of players below the current amount!"
#[tokio::test]
async fn rejects_capacity_below_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, host) = create_pod_with_host(db).await?;
    let second = create_user(db).await?;
    let third = create_user(db).await?;
    add_participant(db, pod.id, second.id, 1).await?;
    add_participant(db, pod.id, third.id, 2).await?;

    let service = PodService::new(db);
    let mut param = update_param();
    param.max_players = 2;
    let result = service
        .edit_pod(pod.message_id.as_deref().unwrap(), &host.discord_id, param)
        .await;

    assert_eq!(rule(result), PodError::BelowCurrentCount);

    Ok(())
}

/// Tests shrinking a pod below the two-player minimum.
///
/// Expected: Err "Pod must have at least 2 players!"
#[tokio::test]
async fn rejects_capacity_below_minimum() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, host) = create_pod_with_host(db).await?;

    let service = PodService::new(db);
    let mut param = update_param();
    param.max_players = 1;
    let result = service
        .edit_pod(pod.message_id.as_deref().unwrap(), &host.discord_id, param)
        .await;

    assert_eq!(rule(result), PodError::BelowMinimum);

    Ok(())
}

/// Tests rescheduling a pod into the past.
///
/// Expected: Err "Pod can't be in the past!"
#[tokio::test]
async fn rejects_past_reschedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pod, host) = create_pod_with_host(db).await?;

    let service = PodService::new(db);
    let mut param = update_param();
    param.scheduled_date = "01-01-2020".to_string();
    param.scheduled_time = "18:00".to_string();
    let result = service
        .edit_pod(pod.message_id.as_deref().unwrap(), &host.discord_id, param)
        .await;

    assert_eq!(rule(result), PodError::PastSchedule);

    Ok(())
}

/// Tests editing a pod whose scheduled moment has passed.
///
/// Expected: Err "Pod has expired!"
#[tokio::test]
async fn rejects_edit_of_expired_pod() -> Result<(), DbErr> {
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
        .edit_pod(
            pod.message_id.as_deref().unwrap(),
            &host.discord_id,
            update_param(),
        )
        .await;

    assert_eq!(rule(result), PodError::Expired);

    Ok(())
}
