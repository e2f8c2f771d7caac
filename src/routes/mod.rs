//! HTTP handlers and the helpers they share.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use tera::{Context, Tera};

use crate::models::config::ServerConfig;
use crate::services::nav::active_nav_item;
use crate::{ACTIVE_NAV_COOKIE, NAV_ITEMS};

pub mod ideas;
pub mod nav;

/// Redirects the browser to `location` with `303 See Other`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders `template`, answering `500` when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context shared by every page: navigation bar and static asset paths.
pub fn base_context(req: &HttpRequest, server_config: &ServerConfig) -> Context {
    let stored = req.cookie(ACTIVE_NAV_COOKIE);

    let mut context = Context::new();
    context.insert("nav_items", &NAV_ITEMS);
    context.insert(
        "active_nav",
        active_nav_item(stored.as_ref().map(|cookie| cookie.value())),
    );
    context.insert("fallback_image", &server_config.fallback_image);
    context
}
