use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::data::user::UserRepository;
use crate::server::error::{AppError, AuthError};
use crate::server::model::user::UpsertUserParams;
use crate::server::state::OAuth2Client;

const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";
const FACEBOOK_USERINFO_URL: &str = "https://graph.facebook.com/me?fields=id,name,email";
const LINKEDIN_USERINFO_URL: &str = "https://api.linkedin.com/v2/userinfo";

/// Federated login providers available to regular users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    Facebook,
    Linkedin,
}

impl Provider {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "google" => Some(Self::Google),
            "facebook" => Some(Self::Facebook),
            "linkedin" => Some(Self::Linkedin),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
            Self::Linkedin => "linkedin",
        }
    }

    fn scopes(&self) -> Vec<Scope> {
        match self {
            Self::Google => vec![
                Scope::new(String::from("openid")),
                Scope::new(String::from("email")),
                Scope::new(String::from("profile")),
            ],
            Self::Facebook => vec![
                Scope::new(String::from("email")),
                Scope::new(String::from("public_profile")),
            ],
            Self::Linkedin => vec![
                Scope::new(String::from("openid")),
                Scope::new(String::from("email")),
                Scope::new(String::from("profile")),
            ],
        }
    }
}

/// Normalized profile fetched from a provider after token exchange.
#[derive(Debug, Clone)]
pub struct AuthedProfile {
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

#[derive(Deserialize)]
struct GoogleProfile {
    name: String,
    email: String,
    picture: Option<String>,
}

#[derive(Deserialize)]
struct FacebookProfile {
    name: String,
    email: String,
}

#[derive(Deserialize)]
struct LinkedinProfile {
    name: String,
    email: String,
    picture: Option<String>,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    pub fn login_url(&self, provider: Provider) -> (Url, CsrfToken) {
        let mut request = self.oauth_client.authorize_url(CsrfToken::new_random);
        for scope in provider.scopes() {
            request = request.add_scope(scope);
        }
        request.url()
    }

    /// Authorization URL for the admin login, which only needs identity
    /// scopes from the corporate Google registration.
    pub fn admin_login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new(String::from("openid")))
            .add_scope(Scope::new(String::from("email")))
            .url()
    }

    /// Completes a federated login: exchanges the code, fetches the
    /// provider profile, and upserts the user by email.
    pub async fn callback(
        &self,
        provider: Provider,
        code: String,
    ) -> Result<entity::user::Model, AppError> {
        let profile = self.exchange_and_fetch_profile(provider, code).await?;

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParams {
                name: profile.name,
                email: profile.email,
                avatar_url: profile.avatar_url,
            })
            .await?;
        Ok(user)
    }

    /// Completes an admin login. The profile is checked against the
    /// allowed email domain and never persisted.
    pub async fn admin_callback(
        &self,
        code: String,
        admin_email_domain: &str,
    ) -> Result<AuthedProfile, AppError> {
        let profile = self
            .exchange_and_fetch_profile(Provider::Google, code)
            .await?;

        if !email_in_domain(&profile.email, admin_email_domain) {
            return Err(AuthError::NotAuthorized(format!(
                "Not a {} address.",
                admin_email_domain
            ))
            .into());
        }
        Ok(profile)
    }

    async fn exchange_and_fetch_profile(
        &self,
        provider: Provider,
        code: String,
    ) -> Result<AuthedProfile, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchange(err.to_string()))?;
        let access_token = token.access_token().secret();

        self.fetch_profile(provider, access_token).await
    }

    async fn fetch_profile(
        &self,
        provider: Provider,
        access_token: &str,
    ) -> Result<AuthedProfile, AppError> {
        let url = match provider {
            Provider::Google => GOOGLE_USERINFO_URL,
            Provider::Facebook => FACEBOOK_USERINFO_URL,
            Provider::Linkedin => LINKEDIN_USERINFO_URL,
        };

        let response = self
            .http_client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?;

        let profile = match provider {
            Provider::Google => {
                let profile: GoogleProfile = response.json().await?;
                AuthedProfile {
                    name: profile.name,
                    email: profile.email,
                    avatar_url: profile.picture,
                }
            }
            Provider::Facebook => {
                let profile: FacebookProfile = response.json().await?;
                AuthedProfile {
                    name: profile.name,
                    email: profile.email,
                    avatar_url: None,
                }
            }
            Provider::Linkedin => {
                let profile: LinkedinProfile = response.json().await?;
                AuthedProfile {
                    name: profile.name,
                    email: profile.email,
                    avatar_url: profile.picture,
                }
            }
        };
        Ok(profile)
    }
}

/// Case-insensitive check that an email's domain part matches exactly.
pub fn email_in_domain(email: &str, domain: &str) -> bool {
    match email.rsplit_once('@') {
        Some((local, email_domain)) => {
            !local.is_empty() && email_domain.eq_ignore_ascii_case(domain)
        }
        None => false,
    }
}
