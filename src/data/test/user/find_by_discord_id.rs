use super::*;

/// Tests finding a user by Discord ID.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).discord_id("123456789").build().await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id("123456789").await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.discord_id, "123456789");

    Ok(())
}

/// Tests finding an unknown Discord ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id("987654321").await?;

    assert!(user.is_none());

    Ok(())
}
