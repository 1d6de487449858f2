use anyhow::Result;
use community_site::application::{
    ports::{
        ClockPort, ConfirmationNotifierPort, HumanVerifierPort, PostBodyRendererPort,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use community_site::config::{AppConfig, FlashSecret, HumanVerificationMode};
use community_site::domain::{
    event::EventRepository, link::LinkRepository, post::PostRepository,
    registration::RegistrationRepository,
};
use community_site::infrastructure::{
    database,
    notification::{LoggingMailTransport, MailConfirmationNotifier},
    rendering::MarkdownBodyRenderer,
    repositories::{
        PostgresEventRepository, PostgresLinkRepository, PostgresPostRepository,
        PostgresRegistrationRepository,
    },
    time::SystemClock,
    verification::{AllowAllVerifier, TokenPresenceVerifier},
};
use community_site::presentation::{
    http::{flash, routes::build_router, state::HttpState},
    syndication::{CalendarFeedRenderer, NewsFeedRenderer},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let event_repo: Arc<dyn EventRepository> = Arc::new(PostgresEventRepository::new(pool.clone()));
    let post_repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pool.clone()));
    let link_repo: Arc<dyn LinkRepository> = Arc::new(PostgresLinkRepository::new(pool.clone()));
    let registration_repo: Arc<dyn RegistrationRepository> =
        Arc::new(PostgresRegistrationRepository::new(pool));

    let human_verifier: Arc<HumanVerifierPort> = match config.human_verification() {
        HumanVerificationMode::Disabled => {
            tracing::warn!("human verification disabled, every registration attempt is accepted");
            Arc::new(AllowAllVerifier)
        }
        HumanVerificationMode::TokenPresence => {
            tracing::warn!(
                "human verification only checks that a challenge response is present, \
                 forged responses are accepted"
            );
            Arc::new(TokenPresenceVerifier)
        }
    };
    let notifier: Arc<ConfirmationNotifierPort> = Arc::new(MailConfirmationNotifier::new(
        config.mail_from(),
        Arc::new(LoggingMailTransport),
    ));
    let body_renderer: Arc<PostBodyRendererPort> = Arc::new(MarkdownBodyRenderer);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        event_repo,
        post_repo,
        link_repo,
        registration_repo,
        human_verifier,
        notifier,
        body_renderer: Arc::clone(&body_renderer),
        clock,
        feed_page_size: config.feed_page_size(),
    }));

    let state = HttpState {
        services,
        calendar: Arc::new(CalendarFeedRenderer::new(config.calendar().clone())),
        news_feed: Arc::new(NewsFeedRenderer::new(config.feed().clone(), body_renderer)),
        default_locale: config.default_locale().clone(),
        flash_key: flash::signing_key(config.flash_secret().map(FlashSecret::as_bytes)),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
