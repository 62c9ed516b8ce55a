use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::{send, setup_test_app};

#[tokio::test]
async fn test_preferences_default_and_update() {
    let app = setup_test_app().await;

    let (status, _) = send(&app, Method::GET, "/preferences", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, Method::GET, "/preferences", Some("ana"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["difficulty"], json!({"facil": true, "intermedio": false, "avanzado": false}));
    assert_eq!(body["restricciones"], json!([]));

    let (status, _) = send(
        &app,
        Method::PUT,
        "/preferences",
        Some("ana"),
        Some(json!({"restricciones": ["Sin gluten"], "theme": "dark"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/preferences", Some("ana"), None).await;
    assert_eq!(body["restricciones"], json!(["Sin gluten"]));
    assert_eq!(body["theme"], "dark");

    let (_, other) = send(&app, Method::GET, "/preferences", Some("luis"), None).await;
    assert_eq!(other["restricciones"], json!([]));
}

#[tokio::test]
async fn test_recent_searches_are_capped() {
    let app = setup_test_app().await;

    for q in ["ceviche", "lomo", "causa", "juane", "LOMO", "%20"] {
        let uri = format!("/recipes/recommended?q={q}");
        let (status, _) = send(&app, Method::GET, &uri, Some("ana"), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(&app, Method::GET, "/preferences", Some("ana"), None).await;
    assert_eq!(body["ultimasBusquedas"], json!(["LOMO", "juane", "causa"]));
}

#[tokio::test]
async fn test_favorites() {
    let app = setup_test_app().await;

    for (id, nombre) in [("1", "Rocoto relleno"), ("2", "Adobo arequipeño")] {
        send(&app, Method::POST, "/recipes", None, Some(json!({"id": id, "nombre": nombre}))).await;
    }

    let (status, _) = send(&app, Method::PUT, "/favorites/missing", Some("ana"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for id in ["1", "2", "1"] {
        let (status, _) = send(&app, Method::PUT, &format!("/favorites/{id}"), Some("ana"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let (status, body) = send(&app, Method::GET, "/favorites", Some("ana"), None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body.as_array().unwrap().iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["2", "1"]);

    send(&app, Method::DELETE, "/recipes/2", None, None).await;
    let (status, _) = send(&app, Method::DELETE, "/favorites/1", Some("ana"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, "/favorites", Some("ana"), None).await;
    assert_eq!(body, json!([]));
}
