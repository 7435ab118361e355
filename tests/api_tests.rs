use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use bearing_convert::api::create_router;
use bearing_convert::ServerConfig;
use serde_json::Value;
use tower::ServiceExt;

fn router() -> Router {
    create_router(&ServerConfig::default())
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let json = serde_json::from_str(&body_text(response).await).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_check() {
    let (status, json) = get_json("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn polar_to_rect_endpoint() {
    let (status, json) = get_json("/api/polar-to-rect?distance=100&angle=90").await;
    assert_eq!(status, StatusCode::OK);

    let easting = json["output"]["easting"].as_f64().unwrap();
    assert!((easting - 100.0).abs() < 1e-9);
    assert_eq!(json["output"]["system"], "rectangular");
    assert_eq!(json["input_text"], "Distance: 100.0000 m, Angle: 90.0000°");
    assert_eq!(json["bearing"], "N 90.00° E");
    assert_eq!(json["profile"], "survey");
}

#[tokio::test]
async fn polar_to_rect_rejects_negative_distance() {
    let (status, json) = get_json("/api/polar-to-rect?distance=-1&angle=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("non-negative"));
}

#[tokio::test]
async fn legacy_profile_accepts_negative_distance() {
    let (status, json) = get_json("/api/polar-to-rect?distance=-1&angle=0&profile=legacy").await;
    assert_eq!(status, StatusCode::OK);
    assert!((json["output"]["northing"].as_f64().unwrap() + 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn rect_to_polar_endpoint() {
    let (status, json) = get_json("/api/rect-to-polar?northing=100&easting=-100").await;
    assert_eq!(status, StatusCode::OK);

    let angle = json["output"]["angle"].as_f64().unwrap();
    assert!((angle - 315.0).abs() < 1e-9);
    assert_eq!(json["quadrant"], "NW (Second Quadrant)");
    assert_eq!(json["bearing"], "N 45.00° W");
}

#[tokio::test]
async fn batch_json_endpoint() {
    let body = serde_json::json!({
        "direction": "polar-to-rect",
        "input": "100.0, 45.0\nbad, data\n200.0, 135.0",
    });

    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/batch")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["successful"], 2);
    assert_eq!(json["failed"], 1);
    assert_eq!(json["rows"][1]["row"], 3);
    assert_eq!(json["warnings"][0]["row"], 2);
}

#[tokio::test]
async fn batch_json_all_lines_rejected_keeps_warnings() {
    let body = serde_json::json!({
        "direction": "polar-to-rect",
        "input": "bad, data\n1,2,3",
    });

    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/batch")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["total"], 2);
    assert_eq!(json["successful"], 0);
    assert_eq!(json["rows"].as_array().unwrap().len(), 0);
    assert_eq!(json["warnings"][0]["row"], 1);
    assert_eq!(json["warnings"][1]["row"], 2);
    assert_eq!(json["warnings"][1]["line"], "1,2,3");
}

#[tokio::test]
async fn rect_to_polar_rejects_non_finite_query() {
    let (status, json) = get_json("/api/rect-to-polar?northing=nan&easting=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("finite"));

    let (status, _) = get_json("/api/polar-to-rect?distance=5&angle=inf").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn batch_json_empty_input() {
    let body = serde_json::json!({ "direction": "rect-to-polar", "input": "  " });

    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/batch")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn batch_csv_endpoint() {
    let boundary = "XBOUNDARYX";
    let multipart = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"direction\"\r\n\r\nrect-to-polar\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"points.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n70.71, 70.71\n0, 150\n-100, 100\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/batch/csv")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(multipart))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.contains("rect_to_polar_results.csv"));

    let text = body_text(response).await;
    assert!(text.starts_with("# Statistics\n"));
    assert!(text.contains("# Successful: 3\n"));
    assert!(text.contains("Row,Northing (m),Easting (m),Distance (m),Angle (°)\n"));
    assert!(text.contains("\n2,0.0,150.0,150.0,90.0\n"));
}

#[tokio::test]
async fn batch_csv_all_lines_rejected() {
    let boundary = "XBOUNDARYX";
    let multipart = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"direction\"\r\n\r\npolar\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"input\"\r\n\r\nnan, 1\nfar, 10\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/batch/csv")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(multipart))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let text = body_text(response).await;
    assert!(text.contains("# Successful: 0\n"));
    assert!(text.contains("# Skipped row 1: "));
    assert!(text.contains("# Skipped row 2: "));
    assert!(text.ends_with("Row,Distance (m),Angle (°),Northing (m),Easting (m)\n"));
}

#[tokio::test]
async fn batch_csv_truncated_field_is_rejected() {
    let boundary = "XBOUNDARYX";
    let multipart = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"direction\"\r\n\r\nrect-to-polar",
        b = boundary
    );

    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/batch/csv")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(multipart))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(!json["error"].as_str().unwrap().contains("Unknown direction"));
}

#[tokio::test]
async fn batch_csv_requires_direction() {
    let boundary = "XBOUNDARYX";
    let multipart = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"input\"\r\n\r\n1, 2\r\n--{b}--\r\n",
        b = boundary
    );

    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/batch/csv")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(multipart))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
