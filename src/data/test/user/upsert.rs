use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository creates a record with the given Discord
/// ID and display name, with alerts disabled.
///
/// Expected: Ok with user created and alert_enabled false
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            display_name: "TestUser".to_string(),
        })
        .await?;

    assert_eq!(user.discord_id, "123456789");
    assert_eq!(user.display_name, "TestUser");
    assert!(!user.alert_enabled);

    Ok(())
}

/// Tests refreshing an existing user's display name.
///
/// Verifies that upserting an already known Discord ID with a new display name
/// updates the name while preserving the alert preference.
///
/// Expected: Ok with name updated and alert_enabled preserved
#[tokio::test]
async fn refreshes_display_name_preserves_alert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = UserFactory::new(db)
        .discord_id("123456789")
        .display_name("OldName")
        .alert_enabled(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            display_name: "NewName".to_string(),
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.display_name, "NewName");
    assert!(user.alert_enabled);

    Ok(())
}

/// Tests upserting an unchanged user.
///
/// Verifies that upserting the same Discord ID and display name twice returns
/// the same record instead of creating a second one.
///
/// Expected: Ok with the same internal ID both times
#[tokio::test]
async fn is_idempotent_for_unchanged_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = UpsertUserParam {
        discord_id: "123456789".to_string(),
        display_name: "TestUser".to_string(),
    };

    let first = repo.upsert(param.clone()).await?;
    let second = repo.upsert(param).await?;

    assert_eq!(first.id, second.id);

    Ok(())
}
