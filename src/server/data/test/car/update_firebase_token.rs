use super::*;

/// Tests replacing the device push token of a car.
///
/// Expected: Ok(Some(Car)) with the new token persisted
#[tokio::test]
async fn replaces_token() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let owner = factory::create_user(db).await?;
    let car = factory::car::CarFactory::new(db, &owner.username)
        .firebase_token("")
        .build()
        .await?;
    let repo = CarRepository::new(db);

    let updated = repo
        .update_firebase_token(car.id, "new-token".to_string())
        .await?;

    assert_eq!(
        updated.map(|car| car.firebase_token),
        Some("new-token".to_string())
    );
    let stored = repo.find_by_id(car.id).await?.expect("car should exist");
    assert_eq!(stored.firebase_token, "new-token");

    Ok(())
}

/// Tests updating the token of a car that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_car() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let updated = CarRepository::new(db)
        .update_firebase_token(404, "token".to_string())
        .await?;

    assert!(updated.is_none());

    Ok(())
}
