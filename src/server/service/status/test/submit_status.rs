use super::*;

/// Tests a submitted status reaches the request pending for the same car.
///
/// Expected: true and the waiting request resolves with the status
#[tokio::test]
async fn delivers_to_pending_request() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap().clone();

    let (_owner, car) = factory::create_car_with_owner(&db).await?;
    let bridge = disabled_bridge(Duration::from_secs(15));

    let pending = {
        let db = db.clone();
        let bridge = bridge.clone();
        tokio::spawn(async move { StatusService::new(&db, &bridge).request_status(car.id).await })
    };

    while !bridge.table().contains(&car.id) {
        tokio::task::yield_now().await;
    }

    assert!(StatusService::new(&db, &bridge).submit_status(sample_status(car.id)));
    assert_eq!(
        pending.await.unwrap()?,
        StatusOutcome::Resolved(sample_status(car.id))
    );

    Ok(())
}

/// Tests a status nobody asked for is dropped.
///
/// Expected: false and nothing pending afterwards
#[tokio::test]
async fn drops_status_without_request() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let bridge = disabled_bridge(Duration::from_secs(15));

    assert!(!StatusService::new(db, &bridge).submit_status(sample_status(5)));
    assert!(bridge.table().is_empty());

    Ok(())
}
