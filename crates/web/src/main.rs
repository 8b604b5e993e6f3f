use anyhow::Context;
use std::sync::Arc;
use storage::SubmissionStore;
use storage::models::Roster;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::roster::handlers::list_roster,
        features::submissions::handlers::create_submission,
        features::submissions::handlers::recent_submissions,
        features::submissions::handlers::clear_submissions,
        features::ranking::handlers::get_ranking,
        features::health::handlers::health,
    ),
    components(
        schemas(
            storage::dto::submission::CreateSubmissionRequest,
            storage::dto::submission::SubmissionResponse,
            storage::dto::ranking::RankingEntry,
            storage::dto::roster::OperativeResponse,
            storage::models::Operative,
            storage::models::Sector,
            storage::models::Submission,
            features::health::handlers::HealthResponse,
        )
    ),
    tags(
        (name = "roster", description = "Roster endpoints"),
        (name = "submissions", description = "Submission intake, recent activity and bulk clear"),
        (name = "rankings", description = "Leaderboard endpoints"),
        (name = "health", description = "Liveness and store connectivity"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting leaderboard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let roster = load_roster(config.roster_path.as_deref());

    let store = SubmissionStore::new();
    tracing::info!("Submission store ready");

    let state = AppState {
        store,
        roster: Arc::new(roster),
        recent_limit: config.recent_limit,
    };

    spawn_snapshot_observer(&state);
    spawn_connectivity_observer(&state);

    let openapi = ApiDoc::openapi();

    let app = axum::Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .nest("/api", features::routes())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Loads the roster file named by configuration, falling back to the
/// built-in roster when no file is configured or the file cannot be read.
/// A broken roster file must not keep the service down.
fn load_roster(roster_path: Option<&str>) -> Roster {
    match roster_path {
        Some(path) => match Roster::from_json_file(path) {
            Ok(roster) => {
                tracing::info!("Roster loaded from {} ({} operatives)", path, roster.len());
                roster
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load roster from {}: {}; using built-in roster",
                    path,
                    e
                );
                Roster::builtin()
            }
        },
        None => {
            let roster = Roster::builtin();
            tracing::info!("Using built-in roster ({} operatives)", roster.len());
            roster
        }
    }
}

/// Recomputes the leaderboard on every pushed snapshot and logs the state of
/// play. Handlers read the same snapshot on demand; this is the standing
/// subscription.
fn spawn_snapshot_observer(state: &AppState) {
    let roster = state.roster.clone();
    let mut snapshots = state.store.subscribe();

    tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let submissions = snapshots.borrow_and_update().decode();
            let entries = storage::services::ranking::rank(&roster, &submissions);
            if let Some(leader) = entries.first() {
                tracing::debug!(
                    "Snapshot: {} submissions; {} leads with {} points",
                    submissions.len(),
                    leader.operative_id,
                    leader.total_points
                );
            }
        }
    });
}

/// Logs store connectivity transitions; intake refuses writes while the
/// store is unreachable.
fn spawn_connectivity_observer(state: &AppState) {
    let mut connectivity = state.store.connectivity();

    tokio::spawn(async move {
        while connectivity.changed().await.is_ok() {
            if *connectivity.borrow_and_update() {
                tracing::info!("Submission store reachable");
            } else {
                tracing::warn!("Submission store unreachable; intake suspended");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_roster_without_path_uses_builtin() {
        let roster = load_roster(None);
        assert_eq!(roster.len(), 3);
        assert!(roster.contains("adriele"));
    }

    #[test]
    fn test_load_roster_unreadable_file_falls_back_to_builtin() {
        let roster = load_roster(Some("/nonexistent/roster.json"));
        assert_eq!(roster.len(), 3);
        assert!(roster.contains("esdras"));
    }
}
