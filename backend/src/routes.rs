use actix_files::Files;
use actix_web::{HttpResponse, web};
use serde_json::json;
use shared::ClientConfig;
use std::path::PathBuf;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    cfg.service(web::resource("/api/config").route(web::get().to(get_client_config)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(Files::new("/", frontend_dir).index_file("index.html"));
}

async fn get_client_config(config: web::Data<ClientConfig>) -> HttpResponse {
    HttpResponse::Ok().json(config.get_ref())
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};

    fn client_config() -> ClientConfig {
        ClientConfig {
            prediction_url: "http://predictor.test/predict".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_config_endpoint_returns_injected_url() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client_config()))
                .configure(|cfg| configure_routes(cfg, std::env::temp_dir())),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: ClientConfig = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, client_config());
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client_config()))
                .configure(|cfg| configure_routes(cfg, std::env::temp_dir())),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_config_rejects_post() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client_config()))
                .configure(|cfg| configure_routes(cfg, std::env::temp_dir())),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
