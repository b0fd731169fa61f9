use migration::{Migrator, MigratorTrait};
use oauth2::basic::BasicClient;
use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::{Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::config::{Config, OAuthProviderConfig};
use crate::server::error::AppError;
use crate::server::state::{OAuth2Client, OAuthClients};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const FACEBOOK_AUTH_URL: &str = "https://www.facebook.com/v12.0/dialog/oauth";
const FACEBOOK_TOKEN_URL: &str = "https://graph.facebook.com/v12.0/oauth/access_token";
const LINKEDIN_AUTH_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
const LINKEDIN_TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";

pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    tracing::info!("Connecting to database");
    let db = Database::connect(&config.database_url).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Builds the session layer backed by the same SQLite pool as the app.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .map_err(|err| AppError::InternalError(err.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// HTTP client for OAuth token exchange and outbound provider calls.
///
/// Following redirects would let a malicious token endpoint bounce
/// credentialed requests elsewhere, so redirects are disabled.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

pub fn setup_oauth_clients(config: &Config) -> Result<OAuthClients, AppError> {
    Ok(OAuthClients {
        google: build_oauth_client(
            &config.google,
            GOOGLE_AUTH_URL,
            GOOGLE_TOKEN_URL,
            config.url("/noo/login/google/oauth"),
        )?,
        facebook: build_oauth_client(
            &config.facebook,
            FACEBOOK_AUTH_URL,
            FACEBOOK_TOKEN_URL,
            config.url("/noo/login/facebook/oauth"),
        )?,
        linkedin: build_oauth_client(
            &config.linkedin,
            LINKEDIN_AUTH_URL,
            LINKEDIN_TOKEN_URL,
            config.url("/noo/login/linkedin/oauth"),
        )?,
        admin: build_oauth_client(
            &config.admin_google,
            GOOGLE_AUTH_URL,
            GOOGLE_TOKEN_URL,
            config.url("/admin/login/oauth"),
        )?,
    })
}

fn build_oauth_client(
    provider: &OAuthProviderConfig,
    auth_url: &str,
    token_url: &str,
    redirect_url: String,
) -> Result<OAuth2Client, AppError> {
    Ok(
        BasicClient::new(ClientId::new(provider.client_id.clone()))
            .set_client_secret(ClientSecret::new(provider.client_secret.clone()))
            .set_auth_uri(AuthUrl::new(auth_url.to_string())?)
            .set_token_uri(TokenUrl::new(token_url.to_string())?)
            .set_redirect_uri(RedirectUrl::new(redirect_url)?),
    )
}
