use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_site::{
    background_task::start_limiter_eviction_task,
    cors::build_cors,
    db::store::MemoryStore,
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    telemetry::{init_tracing, LogFormat},
    AppState,
};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => {
            init_tracing(LogFormat::for_env(&cfg.env));
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            init_tracing(LogFormat::Pretty);
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState::new(&config, MemoryStore::new()));

    if config.seed_demo_data {
        if let Err(e) = app_state.seed_demo_data().await {
            tracing::error!("Failed to seed demo data: {}", e);
            std::process::exit(1);
        }
    }

    if let Some(limiter) = app_state.contact_limiter.clone() {
        actix_web::rt::spawn(start_limiter_eviction_task(limiter));
    }

    let server_addr = config.server_addr();
    let cors_origins = config.cors_origins();

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(build_cors(&cors_origins))
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .disable_signals()
    .bind(server_addr)?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        shutdown_signal().await;
        handle.stop(true).await;
    });

    server.await
}
