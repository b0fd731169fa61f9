use crate::server::error::{AppError, ConfigError};

/// Client id and secret for one OAuth provider registration.
#[derive(Clone, Debug)]
pub struct OAuthProviderConfig {
    pub client_id: String,
    pub client_secret: String,
}

impl OAuthProviderConfig {
    fn from_env(id_var: &str, secret_var: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: env_var(id_var)?,
            client_secret: env_var(secret_var)?,
        })
    }
}

/// Process configuration, read once from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Scheme used when building absolute URLs back to this server.
    pub protocol: String,
    /// Host used when building absolute URLs back to this server.
    pub domain: String,
    pub sendwithus_key: String,
    pub email_sender: String,
    /// Domain inbound reply addresses are minted under.
    pub mailgun_domain: String,
    /// Plaintext prefix mixed into every reply-address payload.
    pub email_salt: String,
    /// Base64-encoded 32-byte key for reply-address encryption.
    pub reply_address_key: String,
    pub analytics_key: String,
    /// Email domain allowed through the admin login.
    pub admin_email_domain: String,
    pub google: OAuthProviderConfig,
    pub facebook: OAuthProviderConfig,
    pub linkedin: OAuthProviderConfig,
    pub admin_google: OAuthProviderConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: env_var("DATABASE_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| String::from("0.0.0.0:3000")),
            protocol: std::env::var("PROTOCOL").unwrap_or_else(|_| String::from("https")),
            domain: env_var("DOMAIN")?,
            sendwithus_key: env_var("SENDWITHUS_KEY")?,
            email_sender: env_var("EMAIL_SENDER")?,
            mailgun_domain: env_var("MAILGUN_DOMAIN")?,
            email_salt: env_var("MAILGUN_EMAIL_SALT")?,
            reply_address_key: env_var("REPLY_ADDRESS_KEY")?,
            analytics_key: env_var("ANALYTICS_KEY")?,
            admin_email_domain: env_var("ADMIN_EMAIL_DOMAIN")?,
            google: OAuthProviderConfig::from_env("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET")?,
            facebook: OAuthProviderConfig::from_env(
                "FACEBOOK_CLIENT_ID",
                "FACEBOOK_CLIENT_SECRET",
            )?,
            linkedin: OAuthProviderConfig::from_env(
                "LINKEDIN_CLIENT_ID",
                "LINKEDIN_CLIENT_SECRET",
            )?,
            admin_google: OAuthProviderConfig::from_env(
                "ADMIN_GOOGLE_CLIENT_ID",
                "ADMIN_GOOGLE_CLIENT_SECRET",
            )?,
        })
    }

    /// Builds an absolute URL back to this server for the given path.
    pub fn url(&self, path: &str) -> String {
        format!("{}://{}{}", self.protocol, self.domain, path)
    }
}

fn env_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
