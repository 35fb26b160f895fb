use compass::server::{
    config::Config,
    model::app::AppState,
    report::artifact::{ArtifactStore, REPORTS_URL_PREFIX},
    router, startup,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let db = startup::connect_to_database(&config).await?;
    startup::prepare_reports_dir(&config).await?;

    let state = AppState {
        db,
        artifacts: ArtifactStore::new(&config.reports_dir),
        report_timeout: config.report_timeout,
    };

    let app = router::routes()
        .with_state(state)
        .nest_service(REPORTS_URL_PREFIX, ServeDir::new(&config.reports_dir))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address.as_str()).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
