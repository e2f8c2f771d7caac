#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::HttpIdeaRepository;
#[cfg(feature = "server")]
use crate::routes::ideas::{show_ideas, update_controls};
#[cfg(feature = "server")]
use crate::routes::nav::select_nav;

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Page sizes offered by the page-size select.
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 20, 50];
/// Largest page size accepted from the controls form.
pub const MAX_PAGE_SIZE: u32 = 100;

pub const NAV_ITEMS: [&str; 6] = ["Work", "About", "Services", "Ideas", "Careers", "Contact"];
pub const DEFAULT_NAV_ITEM: &str = "Ideas";
pub const ACTIVE_NAV_COOKIE: &str = "active_nav";

/// Registers the listing routes and static assets on an application.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(Files::new("/assets", "./assets"))
        .service(show_ideas)
        .service(update_controls)
        .service(select_nav);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;

    let repo = HttpIdeaRepository::new(http, server_config.api_url.clone());

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Serving ideas from {} on {}:{}",
        repo.api_url(),
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
