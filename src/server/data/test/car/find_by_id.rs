use super::*;

/// Tests finding an existing car.
///
/// Expected: Ok(Some(Car)) owned by the created user
#[tokio::test]
async fn finds_existing_car() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (owner, car) = factory::create_car_with_owner(db).await?;

    let found = CarRepository::new(db).find_by_id(car.id).await?;

    let found = found.expect("car should exist");
    assert_eq!(found.id, car.id);
    assert!(found.is_owned_by(&owner.username));
    assert_eq!(found.firebase_token, car.firebase_token);

    Ok(())
}

/// Tests querying a car id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_car() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let found = CarRepository::new(db).find_by_id(404).await?;

    assert!(found.is_none());

    Ok(())
}
