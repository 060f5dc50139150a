use super::*;

/// Tests creating a new user on first login.
///
/// Expected: Ok(User) with the provided username and name
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = UserRepository::new(db)
        .upsert(UpsertUserParam {
            username: "tomas".to_string(),
            name: "Tomas".to_string(),
        })
        .await?;

    assert_eq!(user.username, "tomas");
    assert_eq!(user.name, "Tomas");

    Ok(())
}

/// Tests that logging in again updates the display name without duplicating the user.
///
/// Expected: Ok(User) with the same id and the new name
#[tokio::test]
async fn updates_name_of_existing_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let repo = UserRepository::new(db);

    let first = repo
        .upsert(UpsertUserParam {
            username: "tomas".to_string(),
            name: "Tomas".to_string(),
        })
        .await?;
    let second = repo
        .upsert(UpsertUserParam {
            username: "tomas".to_string(),
            name: "Tomas N.".to_string(),
        })
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Tomas N.");

    Ok(())
}
