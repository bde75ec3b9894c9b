mod config;
mod images;
mod llm;
mod ratelimit;
mod services;
mod state;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

use crate::config::Config;
use crate::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let port = config.port;
    let state = AppState::from_config(&config);

    info!("Server running at http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(2 * 1024 * 1024)) // 2 MB
            .app_data(web::Data::new(state.clone()))
            .service(services::content::configure_routes())
            .service(services::export::configure_routes())
            .route("/health", web::get().to(services::health::process))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
