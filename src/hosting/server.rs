use super::config::Config;
use super::handlers;
use super::state::AppState;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> Result<(), std::io::Error> {
        let state = AppState::from_config(&config)
            .await
            .map_err(std::io::Error::other)?;
        let state = web::Data::new(state);
        log::info!("starting strategy server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .configure(handlers::routes)
                .default_service(web::to(handlers::missing))
        })
        .bind(config.bind.as_str())?
        .run()
        .await
    }
}
