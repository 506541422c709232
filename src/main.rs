use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homestay_web::{api::ApiClient, config::Config, pages, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);
    let api = ApiClient::new(
        &config.api_base_url,
        Duration::from_secs(config.http_timeout_seconds),
    )?;
    info!("Booking API at {}", config.api_base_url);

    let state = AppState {
        api,
        config: config.clone(),
    };

    let app = Router::new()
        .route("/", get(pages::home::home))
        // Auth
        .route("/login", get(pages::login::login_page).post(pages::login::login))
        .route("/register", post(pages::login::register))
        .route("/logout", post(pages::login::logout))
        // Places
        .route(
            "/places/new",
            get(pages::place_new::new_place_page).post(pages::place_new::create_place),
        )
        .route("/places/{id}", get(pages::place::place_page))
        .route("/places/{id}/bookings", post(pages::place::submit_booking))
        .route(
            "/places/{id}/bookings/{booking_id}/{action}",
            post(pages::place::update_booking),
        )
        .route("/places/{id}/reviews", post(pages::place::submit_review))
        // Admin
        .route("/admin", get(pages::admin::admin_page))
        .route("/admin/users", post(pages::admin::create_user))
        .route("/admin/users/{id}/{action}", post(pages::admin::user_action))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("homestay web frontend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
