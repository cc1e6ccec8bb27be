use anyhow::Context;
use std::future::Future;

cfg_if::cfg_if! {
    if #[cfg(feature = "table-auth-backend")] {
        use userauth_auth::table_backend::TableAuthProvider as SelectedAuthProvider;
    } else {
        use userauth_auth::no_backend::NoAuthProvider as SelectedAuthProvider;
    }
}
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

pub mod cli;
pub mod config;

pub type SelectedConfig = config::Config<SelectedAuthProvider>;

/// Load the config, bind the listener and return the future that serves requests until SIGTERM.
pub async fn start_listening(
    args: cli::UserauthArgs,
) -> anyhow::Result<impl Future<Output = anyhow::Result<()>>> {
    let SelectedConfig {
        service,
        auth_config,
    } = SelectedConfig::from_path(&args.config)?;

    PrometheusBuilder::new()
        .with_http_listener(service.metrics_address)
        .set_buckets(&[
            100e-6, 500e-6, 1e-3, 5e-3, 1e-2, 5e-2, 1e-1, 2e-1, 3e-1, 4e-1, 5e-1, 6e-1, 7e-1, 8e-1,
            9e-1, 1.0, 5.0, 10.0,
        ])
        .context("Failed to set buckets for prometheus")?
        .install()
        .context("Failed to install prometheus exporter")?;

    let addr = service.address;

    let auth_client =
        SelectedAuthProvider::new(auth_config).context("Failed to initialize auth client")?;

    let router = userauth_server::router(service, auth_client);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(
        ?addr,
        "Starting userauth instance with {} auth",
        std::any::type_name::<SelectedAuthProvider>()
    );

    Ok(async move {
        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("userauth server exited with error")?;

        tracing::info!("Completed graceful shutdown");

        Ok(())
    })
}

// Based on: https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(?error, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal;

        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            },
            Err(error) => {
                tracing::error!(?error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, beginning graceful shutdown");
}
