#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use movis::app::*;
    use movis::core::applications::{ApplicationsApiState, applications_router};
    use movis::core::config::Config;
    use movis::core::db::{
        ApplicationRepository, DbConfig, MemoryApplicationStore, create_pool_with_migrations,
    };
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("invalid configuration");

    // Log config status (without revealing secrets)
    tracing::info!(
        "Config loaded: database={}, applications_open={}",
        config.has_database(),
        config.applications_open
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).expect("invalid leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let applications_api = match DbConfig::from_config(&config) {
        Some(db_config) => {
            let pool = create_pool_with_migrations(&db_config)
                .await
                .expect("failed to connect to database");
            applications_router(ApplicationsApiState::new(
                ApplicationRepository::new(pool),
                config.applications_open,
            ))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, applications are kept in memory");
            applications_router(ApplicationsApiState::new(
                MemoryApplicationStore::new(),
                config.applications_open,
            ))
        }
    };

    // Serve pre-compressed static assets (.br / .gz) from /pkg
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = Router::new()
        .merge(applications_api)
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
