use std::sync::Arc;

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::{
        push::{DisabledDispatcher, FcmDispatcher, PushDispatcher},
        status::{bridge::StatusBridge, correlation::CorrelationTable, CarStatusBridge},
    },
    state::OAuth2Client,
};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after seven days without activity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Builds the shared HTTP client.
///
/// Redirects are not followed, so a hostile endpoint cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str| {
        let name = name.to_string();
        move |e: url::ParseError| ConfigError::InvalidEnvVar {
            name,
            reason: e.to_string(),
        }
    };

    let client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.oauth_auth_url.clone()).map_err(invalid("OAUTH_AUTH_URL"))?,
        )
        .set_token_uri(
            TokenUrl::new(config.oauth_token_url.clone()).map_err(invalid("OAUTH_TOKEN_URL"))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.oauth_redirect_url.clone())
                .map_err(invalid("OAUTH_REDIRECT_URL"))?,
        );

    Ok(client)
}

/// Creates the status bridge with the configured push channel.
///
/// Without FCM credentials every dispatch fails and status requests end in a timeout.
pub fn setup_status_bridge(config: &Config, http_client: &reqwest::Client) -> CarStatusBridge {
    let dispatcher: Arc<dyn PushDispatcher> = match &config.fcm {
        Some(fcm) => {
            let dispatcher = FcmDispatcher::new(
                http_client.clone(),
                &fcm.endpoint,
                &fcm.project_id,
                fcm.access_token.clone(),
            );
            tracing::info!("Pushing device commands to {}", dispatcher.send_url());
            Arc::new(dispatcher)
        }
        None => {
            tracing::warn!("FCM is not configured; status requests will time out");
            Arc::new(DisabledDispatcher)
        }
    };

    StatusBridge::new(
        Arc::new(CorrelationTable::new()),
        dispatcher,
        config.status_timeout,
    )
}
