use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/no-such-route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vehicle_listing_contract() {
    // El contrato de la anotación PMS: cada vehículo listado lleva un
    // pms_status con uno de los tres valores publicados
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/vehicle")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    let vehicles = body.as_array().expect("la respuesta debe ser un array");

    for vehicle in vehicles {
        let status = vehicle["pms_status"].as_str().unwrap();
        assert!(matches!(status, "OK" | "DUE_SOON" | "OVERDUE"));
    }
}

// Función helper para crear la app de test
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/test",
            get(|| async { Json(json!({ "status": "ok", "message": "Fleet Backend funcionando correctamente" })) }),
        )
        .route(
            "/api/vehicle",
            get(|| async {
                Json(json!([
                    {
                        "name": "Dump Truck 01",
                        "category": "dump_truck",
                        "current_odometer": "10000",
                        "pms_status": "OVERDUE"
                    },
                    {
                        "name": "Loader 02",
                        "category": "loader",
                        "current_odometer": "4200",
                        "pms_status": "OK"
                    }
                ]))
            }),
        )
}
