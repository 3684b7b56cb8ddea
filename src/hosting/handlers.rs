use super::state::AppState;
use crate::Error;
use crate::analysis::Analysis;
use crate::dto::AnalysisRequest;
use crate::dto::BatchRequest;
use crate::dto::CacheStats;
use crate::dto::Health;
use crate::dto::StrategyRequest;
use crate::dto::StrategyResponse;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/strategy", web::post().to(strategy))
        .route("/analysis", web::post().to(analysis))
        .route("/training/batch", web::post().to(submit))
        .route("/training/batch/{batch_id}/status", web::get().to(status))
        .route("/cache/stats", web::get().to(stats));
}

async fn health(state: web::Data<AppState>) -> HttpResponse {
    let connected = state.service.cache().connected().await;
    HttpResponse::Ok().json(Health {
        status: String::from("healthy"),
        timestamp: crate::now(),
        cache: String::from(if connected { "connected" } else { "disconnected" }),
        workers: state.service.pool().workers(),
    })
}

async fn strategy(
    state: web::Data<AppState>,
    body: web::Json<StrategyRequest>,
) -> Result<HttpResponse, Error> {
    let req = body.into_inner();
    let (_, solution) = state
        .service
        .strategy(&req.decision_state, req.iterations, true)
        .await?;
    Ok(HttpResponse::Ok().json(StrategyResponse::from(&solution)))
}

async fn analysis(
    state: web::Data<AppState>,
    body: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, Error> {
    let req = body.into_inner();
    let (decision, solution) = state
        .service
        .strategy(&req.decision_state, req.iterations, true)
        .await?;
    Ok(HttpResponse::Ok().json(Analysis::new(&decision, &solution, req.opponent_style)))
}

async fn submit(
    state: web::Data<AppState>,
    body: web::Json<BatchRequest>,
) -> Result<HttpResponse, Error> {
    let accepted = state.batches.submit(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(accepted))
}

async fn status(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    HttpResponse::Ok().json(state.batches.status(&id).await)
}

async fn stats(state: web::Data<AppState>) -> HttpResponse {
    let cache = state.service.cache();
    let metrics = state.service.metrics();
    HttpResponse::Ok().json(CacheStats {
        cache_connected: cache.connected().await,
        backend: cache.backend().to_string(),
        cached_keys: cache.size().await,
        memory_nodes: metrics.nodes(),
        info_sets: metrics.infos(),
        solves: metrics.solves(),
        cache_hits: metrics.hits(),
        cache_misses: metrics.misses(),
        batches_tracked: state.batches.tracked().await,
    })
}

pub async fn missing(req: HttpRequest) -> Result<HttpResponse, Error> {
    Err(Error::NotFound(format!("route {}", req.path())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::Progress;
    use crate::service::tests::service;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use clap::Parser;

    fn state() -> web::Data<AppState> {
        let config = super::super::Config::parse_from(["server"]);
        web::Data::new(AppState::new(service(), &config))
    }

    fn body(hole: &str, iterations: usize) -> serde_json::Value {
        serde_json::json!({
            "decision_state": {
                "street": "preflop",
                "pot": 3,
                "players": [
                    { "hole_cards": hole, "stack": 99, "invested": 1, "position": "SB" },
                    { "stack": 98, "invested": 2, "position": "BB" }
                ],
                "current_player": 0
            },
            "iterations": iterations
        })
    }

    #[actix_web::test]
    async fn strategy_returns_a_distribution() {
        let app = test::init_service(App::new().app_data(state()).configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/strategy")
            .set_json(body("AhAd", 1000))
            .to_request();
        let res: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let strategy = &res["strategy"];
        let sum = ["fold", "call", "raise"]
            .iter()
            .map(|k| strategy[k].as_f64().unwrap())
            .sum::<f64>();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(strategy["raise"].as_f64().unwrap() >= 0.6);
        assert!(res["info_set_key"].as_str().unwrap().starts_with("preflop|AA|"));
        assert!((0.0..=1.0).contains(&res["confidence"].as_f64().unwrap()));
    }

    #[actix_web::test]
    async fn malformed_state_is_a_client_error() {
        let app = test::init_service(App::new().app_data(state()).configure(routes)).await;
        let mut bad = body("AhAd", 1000);
        bad["decision_state"]["current_player"] = serde_json::json!(9);
        let req = test::TestRequest::post().uri("/strategy").set_json(bad).to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn analysis_reports_odds_and_decision() {
        let app = test::init_service(App::new().app_data(state()).configure(routes)).await;
        let mut req = body("AhAd", 1000);
        req["opponent_style"] = serde_json::json!("nit");
        let req = test::TestRequest::post().uri("/analysis").set_json(req).to_request();
        let res: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(res["decision"]["action"] == "raise");
        assert!(res["position"] == "SB");
        let odds = res["pot_odds"].as_f64().unwrap();
        assert!((odds - 0.25).abs() < 1e-12);
        assert!(res["risk_assessment"]["drawouts"] == 0);
    }

    #[actix_web::test]
    async fn batch_lifecycle() {
        let app = test::init_service(App::new().app_data(state()).configure(routes)).await;
        let scenario = body("KsQs", 500)["decision_state"].clone();
        let req = test::TestRequest::post()
            .uri("/training/batch")
            .set_json(serde_json::json!({ "scenarios": [scenario], "iterations": 500 }))
            .to_request();
        let accepted: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let url = accepted["check_url"].as_str().unwrap().to_string();
        let mut progress = Progress::default();
        for _ in 0..200 {
            let req = test::TestRequest::get().uri(&url).to_request();
            progress = test::call_and_read_body_json(&app, req).await;
            if progress.is_done() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }
        assert!(progress.completed == 1 && progress.total == 1);
    }

    #[actix_web::test]
    async fn empty_batch_is_rejected() {
        let app = test::init_service(App::new().app_data(state()).configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/training/batch")
            .set_json(serde_json::json!({ "scenarios": [] }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn stats_and_health() {
        let app = test::init_service(App::new().app_data(state()).configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/strategy")
            .set_json(body("AhAd", 1000))
            .to_request();
        test::call_service(&app, req).await;
        let req = test::TestRequest::get().uri("/cache/stats").to_request();
        let stats: CacheStats = test::call_and_read_body_json(&app, req).await;
        assert!(stats.cache_connected);
        assert!(stats.solves == 1);
        assert!(stats.cached_keys == Some(1));
        let req = test::TestRequest::get().uri("/health").to_request();
        let health: Health = test::call_and_read_body_json(&app, req).await;
        assert!(health.status == "healthy");
        assert!(health.cache == "connected");
    }

    #[actix_web::test]
    async fn unknown_routes_are_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .configure(routes)
                .default_service(web::to(missing)),
        )
        .await;
        let req = test::TestRequest::get().uri("/nope").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status() == StatusCode::NOT_FOUND);
    }
}
