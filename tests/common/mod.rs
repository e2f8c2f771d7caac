//! In-process stand-in for the remote ideas API.

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::json;

async fn ideas() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "data": [
            {
                "id": 1,
                "title": "First idea",
                "published_at": "2022-09-05 10:00:00",
                "content": "<p>Hello</p><img src=\"https://cdn.example.com/inline.jpg\">",
                "small_image": [],
                "medium_image": [{ "url": "https://cdn.example.com/medium.jpg" }]
            },
            {
                "id": 2,
                "title": null,
                "published_at": "2022-09-04 10:00:00",
                "content": "<p>No image</p>",
                "small_image": [],
                "medium_image": []
            }
        ],
        "meta": { "current_page": 5, "last_page": 10, "from": 41, "to": 50, "total": 100 }
    }))
}

async fn echo(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "data": [],
        "query": req.query_string(),
        "accept": req
            .headers()
            .get("accept")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default(),
    }))
}

async fn missing_data() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "meta": { "current_page": 1, "last_page": 1 } }))
}

async fn server_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "message": "server error" }))
}

async fn plain_not_found() -> HttpResponse {
    HttpResponse::NotFound().body("nothing here")
}

async fn not_json() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("hello")
}

/// Starts the stub upstream on an ephemeral port and returns its base URL.
pub async fn spawn_upstream() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/ideas", web::get().to(ideas))
            .route("/echo", web::get().to(echo))
            .route("/missing-data", web::get().to(missing_data))
            .route("/server-error", web::get().to(server_error))
            .route("/not-found", web::get().to(plain_not_found))
            .route("/not-json", web::get().to(not_json))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind stub upstream");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    format!("http://{addr}")
}
