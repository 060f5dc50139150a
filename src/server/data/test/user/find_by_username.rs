use super::*;

/// Tests finding an existing user by username.
///
/// Expected: Ok(Some(User)) with matching data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("tomas")
        .name("Tomas")
        .build()
        .await?;

    let found = UserRepository::new(db).find_by_username("tomas").await?;

    let user = found.expect("user should exist");
    assert_eq!(user.id, created.id);
    assert_eq!(user.name, "Tomas");

    Ok(())
}

/// Tests querying for a username nobody has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let found = UserRepository::new(db).find_by_username("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
