use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::{HttpResponse, Responder, post, web};

use crate::ACTIVE_NAV_COOKIE;
use crate::forms::nav::NavForm;
use crate::routes::redirect;
use crate::services::nav as nav_service;

#[post("/nav")]
pub async fn select_nav(web::Form(form): web::Form<NavForm>) -> impl Responder {
    match nav_service::select_nav_item(form) {
        Ok(selection) => {
            let cookie = Cookie::build(ACTIVE_NAV_COOKIE, selection.label)
                .path("/")
                .max_age(Duration::days(365))
                .same_site(SameSite::Lax)
                .http_only(true)
                .finish();

            HttpResponse::SeeOther()
                .cookie(cookie)
                .insert_header((header::LOCATION, selection.back))
                .finish()
        }
        Err(_) => redirect("/"),
    }
}
