use super::*;

/// Tests listing alert recipients.
///
/// Verifies that only opted-in users are returned and that the excluded
/// Discord ID (the pod host) is left out even when opted in.
///
/// Expected: Ok with only the opted-in, non-excluded user
#[tokio::test]
async fn excludes_host_and_opted_out_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .discord_id("100")
        .alert_enabled(true)
        .build()
        .await?;
    let recipient = UserFactory::new(db)
        .discord_id("200")
        .alert_enabled(true)
        .build()
        .await?;
    UserFactory::new(db)
        .discord_id("300")
        .alert_enabled(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let recipients = repo.list_alert_recipients("100").await?;

    assert_eq!(recipients.len(), 1);
    assert_eq!(recipients[0].id, recipient.id);

    Ok(())
}

/// Tests listing alert recipients when nobody opted in.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_no_one_opted_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).discord_id("100").build().await?;

    let repo = UserRepository::new(db);
    let recipients = repo.list_alert_recipients("999").await?;

    assert!(recipients.is_empty());

    Ok(())
}
