use actix_web::{HttpRequest, Responder, get, post, web};
use tera::Tera;

use crate::domain::query::QueryState;
use crate::dto::ideas::{ControlsView, IdeasPageData};
use crate::forms::controls::ControlsForm;
use crate::models::config::ServerConfig;
use crate::repository::HttpIdeaRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ideas as ideas_service;

#[get("/")]
pub async fn show_ideas(
    req: HttpRequest,
    repo: web::Data<HttpIdeaRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = req.query_string();
    let state = QueryState::decode(query);

    // Keep the address bar on the canonical form of the state being shown.
    if query != state.encode() {
        return redirect(&state.href());
    }

    let mut context = base_context(&req, &server_config);
    context.insert("controls", &ControlsView::new(state));
    context.insert("back", &state.href());

    let (data, error) = match ideas_service::load_ideas_page(repo.get_ref(), state).await {
        Ok(data) => (data, None),
        Err(err) => (IdeasPageData::default(), Some(err.user_message())),
    };

    context.insert("ideas", &data.ideas);
    context.insert("pagination", &data.pagination);
    context.insert("summary", &data.summary);
    context.insert("error", &error);

    render_template(&tera, "ideas/index.html", &context)
}

#[post("/controls")]
pub async fn update_controls(web::Form(form): web::Form<ControlsForm>) -> impl Responder {
    let current = QueryState::decode(&form.current);

    match ideas_service::apply_controls(form) {
        Ok(state) => redirect(&state.href()),
        Err(_) => redirect(&current.href()),
    }
}
