// Textmorph server executable.
// Hosts the humanize pipeline and auxiliary tool endpoints.

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use std::str::FromStr;
use tracing::info;

use textmorph::api::{
    health, humanize, json_error_handler, score, summarize, transform_citations, AppState,
};
use textmorph::services::config_store::ConfigStore;
use textmorph::services::detection::external::DetectionService;
use textmorph::services::detection::panel::DetectionPanel;
use textmorph::services::humanizer::Humanizer;
use textmorph::services::providers::ProviderClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    textmorph::init_logging();

    let config = ConfigStore::default_config_dir()
        .map(ConfigStore::new)
        .and_then(|store| store.load_or_init().ok())
        .unwrap_or_default();

    // Unseeded deployments get per-process jitter; a configured seed pins it.
    let seed = config
        .detection
        .seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as u64);
    info!(
        roster_size = config.detection.roster.len(),
        seeded = config.detection.seed.is_some(),
        "detection panel configured"
    );

    let provider = ProviderClient::new();
    let detection = DetectionService::new(DetectionPanel::new(config.detection.roster.clone(), seed));
    let state = web::Data::new(AppState {
        humanizer: Humanizer::new(provider.clone(), detection),
        provider,
    });

    let origins = std::env::var("TEXTMORPH_UI_ORIGINS")
        .unwrap_or_else(|_| "http://127.0.0.1:5173,http://localhost:5173".to_string());
    let allowed_origins: Vec<String> = origins
        .split(',')
        .map(|value| value.trim())
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect();

    let listen_addr = std::env::var("TEXTMORPH_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let listen_port =
        u16::from_str(&std::env::var("TEXTMORPH_PORT").unwrap_or_else(|_| "8080".to_string()))
            .context("TEXTMORPH_PORT must be a u16 number")?;

    info!(host = %listen_addr, port = listen_port, "starting HTTP server");

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(3600);
        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }
        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(health)
            .service(humanize)
            .service(summarize)
            .service(score)
            .service(transform_citations)
    })
    .bind((listen_addr.clone(), listen_port))
    .with_context(|| format!("failed to bind {}:{}", listen_addr, listen_port))?
    .run()
    .await
    .context("server terminated with an error")
}
