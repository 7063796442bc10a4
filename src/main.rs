use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gym_tracker::config::Config;
use gym_tracker::handlers::exercises;
use gym_tracker::repositories::ExerciseRepository;
use gym_tracker::services::ExerciseService;
use gym_tracker::version::GIT_VERSION;
use gym_tracker::{db, migrations, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gym_tracker=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing::info!("Gym-Tracker {}", GIT_VERSION);
    tracing::info!("Connecting to database: {}", config.database_url);

    let pool = db::create_pool(&config.database_url)?;
    migrations::run_migrations(&pool)?;

    let exercise_repo = ExerciseRepository::new(pool);
    let exercises_state = exercises::ExercisesState {
        exercise_service: ExerciseService::new(exercise_repo),
    };

    let app = routes::create_router(exercises_state, &config.cors_allowed_origins);

    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
