use anyhow::Context;
use chrono::Utc;
use tower_http::trace::TraceLayer;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;
use crate::http::{self, AppState};

pub async fn handle(args: &ServeArgs, ctx: AppContext) -> anyhow::Result<()> {
    let bind = args
        .bind
        .clone()
        .unwrap_or_else(|| ctx.config.server.bind.clone());

    let purged = ctx
        .service
        .purge_expired_sessions(Utc::now())
        .await
        .context("failed to purge expired sessions")?;
    if purged > 0 {
        tracing::info!(purged, "removed expired sessions");
    }

    let state = AppState::new(ctx.service, ctx.config)?;
    let app = http::router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!(%bind, "ledger dashboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
