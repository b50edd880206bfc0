#![allow(non_snake_case)]

mod client;

use phygital::model;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    {
        use phygital::server::config::Config;

        // Installed before `dioxus::serve` so configuration warnings are not dropped,
        // `serve` skips its own setup once a subscriber exists
        dioxus_logger::initialize_default();

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        // The runtime is created by `dioxus::serve`, which sizes its worker pool from this variable
        if std::env::var_os("TOKIO_WORKER_THREADS").is_none() {
            std::env::set_var("TOKIO_WORKER_THREADS", config.workers.to_string());
        }

        dioxus::serve(move || {
            let config = config.clone();

            async move {
                use dioxus_logger::tracing;
                use tower_http::trace::TraceLayer;

                use phygital::server::{model::app::AppState, router, startup};

                let http = startup::build_http_client()?;
                let directus = startup::build_directus_client(&config, http.clone());
                let spotify = startup::build_spotify_client(&config, http);

                startup::prepare_session_dir(&config).await?;
                let session = startup::connect_to_session(&config)?;
                startup::spawn_session_cleanup(&config);

                tracing::info!(
                    "Starting server with {} worker threads",
                    config.workers
                );

                let mut router = dioxus::server::router(client::App);
                let server_routes = router::routes()
                    .with_state(AppState::from((directus, spotify)))
                    .layer(session);
                router = router.merge(server_routes).layer(TraceLayer::new_for_http());

                Ok(router)
            }
        })
    }
}
