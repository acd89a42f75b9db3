//! Escenario completo del invariante de unicidad contra PostgreSQL
//!
//! Requiere una base de datos real (DATABASE_URL); se marca con #[ignore]
//! para correrlo explícitamente:
//!
//!   DATABASE_URL=postgres://... cargo test -- --ignored

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt;
use uuid::Uuid;

use fleet_management::config::environment::EnvironmentConfig;
use fleet_management::create_app;
use fleet_management::database::DatabaseConnection;
use fleet_management::state::AppState;

async fn db_app() -> (axum::Router, sqlx::PgPool) {
    let conn = DatabaseConnection::new_default()
        .await
        .expect("DATABASE_URL must point to a running PostgreSQL");
    conn.run_migrations().await.expect("migrations");
    let pool = conn.pool().clone();

    let config = EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        cors_origins: vec![],
    };

    (create_app(AppState::new(pool.clone(), config)), pool)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 64).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn list_len(app: &axum::Router) -> usize {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/assignments")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().len()
}

async fn seed_van(pool: &sqlx::PgPool) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO vans (id, plate_no, status) VALUES ($1, $2, 'active')")
        .bind(id)
        .bind(format!("VAN-{}", &id.to_string()[..8]))
        .execute(pool)
        .await
        .unwrap();
    id
}

async fn seed_operator(pool: &sqlx::PgPool) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO operators (
            id, firstname, middlename, lastname, license_no, contact, region,
            city, brgy, street, operator_type, dl_codes, conditions,
            expiration_date, emergency_name, emergency_address,
            emergency_contact, archived
        )
        VALUES ($1, 'Juan', '', 'Cruz', $2, '0917', 'NCR', 'QC', 'B', 'Main',
                'Driver', 'B', 'None', '2027-01-01', 'M', 'Main', '0918', FALSE)
        "#,
    )
    .bind(id)
    .bind(format!("LIC-{}", id))
    .execute(pool)
    .await
    .unwrap();
    id
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn assignment_uniqueness_scenario() {
    let (app, pool) = db_app().await;

    let van1 = seed_van(&pool).await;
    let van2 = seed_van(&pool).await;
    let op1 = seed_operator(&pool).await;
    let op2 = seed_operator(&pool).await;

    let baseline = list_len(&app).await;

    // create {van1, op1} -> 201
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/assignments",
            json!({ "van_id": van1, "operator_id": op1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    // La lista refleja cada alta: N creadas menos M borradas
    assert_eq!(list_len(&app).await, baseline + 1);

    // create {van1, op2} -> colisión por van
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/assignments",
            json!({ "van_id": van1, "operator_id": op2 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // create {van2, op1} -> colisión por operador
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/assignments",
            json!({ "van_id": van2, "operator_id": op1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Los intentos rechazados no persisten filas
    assert_eq!(list_len(&app).await, baseline + 1);

    // update a sus propios valores -> 200 (auto-exclusión)
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/assignments",
            json!({ "id": id, "van_id": van1, "operator_id": op1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["message"], "Assignment updated successfully");

    // delete -> 200 y libera ambos
    let response = app
        .clone()
        .oneshot(json_request("DELETE", "/api/assignments", json!({ "id": id })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(list_len(&app).await, baseline);

    // create {van1, op2} ahora sí -> 201
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/assignments",
            json!({ "van_id": van1, "operator_id": op2 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(list_len(&app).await, baseline + 1);

    // limpiar
    sqlx::query("DELETE FROM assignments WHERE van_id IN ($1, $2)")
        .bind(van1)
        .bind(van2)
        .execute(&pool)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn delete_nonexistent_assignment_is_404_and_mutates_nothing() {
    let (app, pool) = db_app().await;

    let before: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assignments")
        .fetch_one(&pool)
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "DELETE",
            "/api/assignments",
            json!({ "id": Uuid::new_v4() }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let after: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assignments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn update_nonexistent_assignment_is_404() {
    let (app, pool) = db_app().await;
    let van = seed_van(&pool).await;
    let op = seed_operator(&pool).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/assignments",
            json!({ "id": Uuid::new_v4(), "van_id": van, "operator_id": op }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn deleting_assigned_van_is_conflict() {
    let (app, pool) = db_app().await;
    let van = seed_van(&pool).await;
    let op = seed_operator(&pool).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/assignments",
            json!({ "van_id": van, "operator_id": op }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // La clave foránea retiene a la van asignada
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/vans/{}", van))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // La van sigue existiendo
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vans WHERE id = $1)")
        .bind(van)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(exists.0);

    // limpiar
    sqlx::query("DELETE FROM assignments WHERE van_id = $1")
        .bind(van)
        .execute(&pool)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn archive_is_soft_delete() {
    let (app, pool) = db_app().await;
    let op = seed_operator(&pool).await;

    let response = app
        .clone()
        .oneshot(json_request("DELETE", "/api/operators", json!({ "id": op })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // La fila sigue existiendo, marcada como archivada
    let archived: (bool,) = sqlx::query_as("SELECT archived FROM operators WHERE id = $1")
        .bind(op)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(archived.0);
}
