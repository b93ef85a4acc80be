use anyhow::Result;
use knowledge_articles::{
    application::{
        ports::{
            ClockPort, ContentClientProviderPort, DraftTokenIssuerPort, SecretVerifierPort,
            TaggedCachePort,
        },
        services::ApplicationServices,
    },
    config::AppConfig,
    infrastructure::{
        cache::MokaTaggedCache,
        contentful::ContentfulClients,
        security::{HmacDraftTokens, SharedSecret},
        time::SystemClock,
    },
    presentation::{
        http::{routes::build_router, state::HttpState},
        views::PageRenderer,
    },
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
    tracing::debug!(?config, "configuration loaded");

    let content_clients: Arc<ContentClientProviderPort> =
        Arc::new(ContentfulClients::new(config.contentful_settings().clone()));
    let cache: Arc<TaggedCachePort> = Arc::new(MokaTaggedCache::new(
        config.cache_ttl(),
        config.cache_max_entries(),
    ));

    let preview_secret = SharedSecret::new(config.preview_secret().map(str::to_string));
    if !preview_secret.is_configured() {
        tracing::warn!("CONTENTFUL_PREVIEW_SECRET is not set; draft mode cannot be enabled");
    }
    let revalidate_secret = SharedSecret::new(config.revalidate_secret().map(str::to_string));
    if !revalidate_secret.is_configured() {
        tracing::warn!("CONTENTFUL_REVALIDATE_SECRET is not set; revalidation requests will be rejected");
    }
    let preview_secret: Arc<SecretVerifierPort> = Arc::new(preview_secret);
    let revalidate_secret: Arc<SecretVerifierPort> = Arc::new(revalidate_secret);
    let draft_tokens: Arc<DraftTokenIssuerPort> =
        Arc::new(HmacDraftTokens::new(config.preview_secret()));
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&content_clients),
        Arc::clone(&cache),
        Arc::clone(&preview_secret),
        Arc::clone(&revalidate_secret),
        Arc::clone(&draft_tokens),
        Arc::clone(&clock),
        config.list_limit(),
    ));

    if config.prefetch_on_start() {
        let services = Arc::clone(&services);
        tokio::spawn(async move { services.prefetch_content().await });
    }

    let views = Arc::new(PageRenderer::new(config.site_title())?);
    let state = HttpState {
        services: Arc::clone(&services),
        views,
    };

    let app = build_router(state);
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
