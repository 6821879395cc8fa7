use super::*;
use test_utils::factory::pod::PodFactory;

/// Tests recording the posted message ID on a pod.
///
/// Expected: Ok with the message ID stored
#[tokio::test]
async fn stores_message_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pod = PodFactory::new(db).message_id(None).build().await?;

    let repo = PodRepository::new(db);
    repo.set_message_id(pod.id, "555000111".to_string()).await?;

    let found = repo.find_by_id(pod.id).await?.unwrap();
    assert_eq!(found.message_id.as_deref(), Some("555000111"));

    Ok(())
}

/// Tests recording a message ID for a missing pod.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn errors_for_missing_pod() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pod_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PodRepository::new(db);
    let result = repo.set_message_id(9999, "555000111".to_string()).await;

    assert!(result.is_err());

    Ok(())
}
