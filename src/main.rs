use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use city_suggestions::args::CliArgs;
use city_suggestions::config::{LoggingSettings, Settings};
use city_suggestions::core::{Dataset, Matcher};
use city_suggestions::routes::{self, suggestions::handle_query_payload_error, AppState};
use clap::Parser;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let args = CliArgs::parse();

    let settings = match Settings::from_args(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&settings.logging);

    info!("Starting city suggestions service...");

    // The dataset is loaded once, before the server accepts requests
    let data = settings.data.clone();
    let dataset = tokio::task::spawn_blocking(move || Dataset::load(&data.file_path, &data.region_code))
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let dataset = match dataset {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to set up suggester: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(Matcher::new(dataset));

    let (host, port) = settings.bind_addr();
    let workers = settings
        .server
        .workers
        .unwrap_or_else(|| std::thread::available_parallelism().map_or(1, |n| n.get()));

    info!("Starting HTTP server on {}:{} with {} workers", host, port, workers);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
