use actix_web::{middleware::Logger, web, App, HttpServer};

use triviabot_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{cors_policy, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    config.warn_missing_secrets();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config())
            .wrap(Logger::default())
            .wrap(cors_policy())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
