use super::*;

/// Tests the owner of a car passes the ownership check.
///
/// Expected: Ok(User) for the owner
#[tokio::test]
async fn grants_access_to_car_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (owner, car) = factory::create_car_with_owner(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_username(&owner.username).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::CarOwner(car.id)]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().username, owner.username);

    Ok(())
}

/// Tests a logged-in user is denied access to somebody else's car.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_users_car() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_owner, car) = factory::create_car_with_owner(db).await?;
    let intruder = factory::user::UserFactory::new(db)
        .username("intruder")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_username(&intruder.username).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::CarOwner(car.id)]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(username, message))) => {
            assert_eq!(username, "intruder");
            assert!(message.contains(&car.id.to_string()));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests an unknown car is reported before ownership is considered.
///
/// Expected: Err(AuthError::CarNotFound)
#[tokio::test]
async fn rejects_unknown_car() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_username(&user.username).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::CarOwner(404)]).await;

    match result {
        Err(AppError::AuthErr(AuthError::CarNotFound(car_id))) => assert_eq!(car_id, 404),
        other => panic!("Expected CarNotFound error, got: {:?}", other),
    }

    Ok(())
}

/// Tests that ownership of one car does not carry over to a second car.
///
/// Expected: Err(AuthError::AccessDenied) for the second car
#[tokio::test]
async fn checks_every_car_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (owner, own_car) = factory::create_car_with_owner(db).await?;
    let (_other, other_car) = factory::create_car_with_owner(db).await?;

    AuthSession::new(session).set_username(&owner.username).await?;

    let result = AuthGuard::new(db, session)
        .require(&[
            Permission::CarOwner(own_car.id),
            Permission::CarOwner(other_car.id),
        ])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
