mod model;
mod server;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use server::config::Config;
use server::error::AppError;
use server::service::analytics::Analytics;
use server::service::email::{Mailer, ReplyAddressCodec};
use server::service::queue::{self, JobQueue};
use server::state::AppState;
use server::{router, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth = startup::setup_oauth_clients(&config)?;

    let mailer = Mailer::new(
        http_client.clone(),
        config.sendwithus_key.clone(),
        config.email_sender.clone(),
    );
    let analytics = Analytics::new(http_client.clone(), config.analytics_key.clone());
    let reply_codec = ReplyAddressCodec::new(
        &config.reply_address_key,
        config.email_salt.clone(),
        config.mailgun_domain.clone(),
    )?;

    let (job_queue, jobs) = JobQueue::new();
    queue::start_worker(jobs, db.clone(), mailer, reply_codec.clone());

    let state = AppState {
        db,
        http_client,
        oauth,
        job_queue,
        analytics,
        reply_codec,
        admin_email_domain: config.admin_email_domain.clone(),
    };

    let app = router::router()
        .with_state(state)
        .layer(session_layer)
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
