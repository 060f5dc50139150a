use super::*;

/// Tests the device's reply is returned to the requesting owner.
///
/// Verifies the pushed command addresses the car's stored token and names the owner.
///
/// Expected: Ok(Resolved) with the device's status
#[tokio::test]
async fn returns_status_reported_by_device() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let owner = factory::user::UserFactory::new(db)
        .username("tomas")
        .build()
        .await?;
    let car = factory::car::CarFactory::new(db, &owner.username)
        .firebase_token("device-token")
        .build()
        .await?;

    let table = Arc::new(CorrelationTable::new());
    let device = Arc::new(DeviceStub {
        table: Arc::clone(&table),
        car_id: car.id,
        sent: Mutex::new(Vec::new()),
    });
    let bridge = StatusBridge::new(table, device.clone(), Duration::from_secs(15));

    let outcome = StatusService::new(db, &bridge)
        .request_status(car.id)
        .await?;

    assert_eq!(outcome, StatusOutcome::Resolved(sample_status(car.id)));

    let sent = device.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], PushMessage::status_command("device-token", "tomas"));

    Ok(())
}

/// Tests a request for an unknown car fails before anything is registered.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_car() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let bridge = disabled_bridge(Duration::from_secs(15));
    let result = StatusService::new(db, &bridge).request_status(999).await;

    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(message, "Car does not exist"),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }
    assert!(bridge.table().is_empty());

    Ok(())
}

/// Tests a car whose device never registered a token times out instead of failing.
///
/// Expected: Ok(TimedOut) and no pending request left behind
#[tokio::test]
async fn times_out_without_device_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let owner = factory::create_user(db).await?;
    let car = factory::car::CarFactory::new(db, &owner.username)
        .firebase_token("")
        .build()
        .await?;

    let bridge = disabled_bridge(Duration::from_millis(200));
    let outcome = StatusService::new(db, &bridge)
        .request_status(car.id)
        .await?;

    assert_eq!(outcome, StatusOutcome::TimedOut);
    assert!(bridge.table().is_empty());

    Ok(())
}

/// Tests a car without a device token is still pushed so the dispatcher reports it.
///
/// The service does not filter blank tokens itself; the dispatcher's `MissingToken`
/// failure is the single place the missing token surfaces.
///
/// Expected: one push with an empty token, then Ok(TimedOut)
#[tokio::test]
async fn hands_blank_token_to_dispatcher() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let owner = factory::user::UserFactory::new(db)
        .username("tomas")
        .build()
        .await?;
    let car = factory::car::CarFactory::new(db, &owner.username)
        .firebase_token("")
        .build()
        .await?;

    let dispatcher = Arc::new(RecordingDispatcher::default());
    let bridge = StatusBridge::new(
        Arc::new(CorrelationTable::new()),
        dispatcher.clone(),
        Duration::from_millis(200),
    );

    let outcome = StatusService::new(db, &bridge)
        .request_status(car.id)
        .await?;

    assert_eq!(outcome, StatusOutcome::TimedOut);

    let sent = dispatcher.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], PushMessage::status_command("", "tomas"));

    Ok(())
}
