use oauth2::basic::{BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenResponse};
use oauth2::{
    Client, EndpointNotSet, EndpointSet, StandardRevocableToken, StandardTokenIntrospectionResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::service::analytics::Analytics;
use crate::server::service::auth::Provider;
use crate::server::service::email::ReplyAddressCodec;
use crate::server::service::queue::JobQueue;

/// Fully-configured OAuth client with auth and token endpoints set.
pub type OAuth2Client = Client<
    BasicErrorResponse,
    BasicTokenResponse,
    StandardTokenIntrospectionResponse<oauth2::EmptyExtraTokenFields, oauth2::basic::BasicTokenType>,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// One OAuth client per federated provider, plus the domain-restricted
/// admin registration.
#[derive(Clone)]
pub struct OAuthClients {
    pub google: OAuth2Client,
    pub facebook: OAuth2Client,
    pub linkedin: OAuth2Client,
    pub admin: OAuth2Client,
}

impl OAuthClients {
    pub fn for_provider(&self, provider: Provider) -> &OAuth2Client {
        match provider {
            Provider::Google => &self.google,
            Provider::Facebook => &self.facebook,
            Provider::Linkedin => &self.linkedin,
        }
    }
}

/// Shared application state. Every field is cheap to clone. Email
/// sending happens on the worker side of the job queue, so the mailer
/// itself never rides along with requests.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub http_client: reqwest::Client,
    pub oauth: OAuthClients,
    pub job_queue: JobQueue,
    pub analytics: Analytics,
    pub reply_codec: ReplyAddressCodec,
    pub admin_email_domain: String,
}
