//! End-to-end tests for the category resource
//!
//! These tests drive the fully assembled router (authentication, validation,
//! handlers, service and in-memory storage) through `axum_test::TestServer`.

use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode, header};
use axum::{Router, routing::get};
use axum_test::TestServer;
use category_api::prelude::*;
use serde_json::{Value, json};

const TOKEN: &str = "test-token";

// =============================================================================
// Helper functions
// =============================================================================

fn create_test_server() -> (TestServer, Arc<InMemoryTaskRepository>) {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let repository = Arc::new(InMemoryCategoryRepository::with_tasks(tasks.clone()));

    let app = ServerBuilder::new()
        .with_auth_provider(StaticTokenProvider::new([TOKEN]))
        .register(CategoryDescriptor::new(repository))
        .build()
        .expect("Failed to build app");

    let server = TestServer::new(app).expect("Failed to create test server");
    (server, tasks)
}

async fn create_category(server: &TestServer, name: &str) -> Value {
    let response = server
        .post("/category")
        .authorization_bearer(TOKEN)
        .json(&json!({ "name": name }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

fn id_of(category: &Value) -> String {
    category["id"].as_str().expect("id is a string").to_string()
}

// =============================================================================
// Health Check Tests
// =============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint_is_public() {
        let (server, _) = create_test_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_healthz_endpoint_is_public() {
        let (server, _) = create_test_server();

        let response = server.get("/healthz").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

// =============================================================================
// Create Tests
// =============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_201_with_record() {
        let (server, _) = create_test_server();

        let body = create_category(&server, "Work").await;
        assert_eq!(body["name"], "Work");
        assert!(Uuid::parse_str(&id_of(&body)).is_ok());
        assert!(body["created_at"].is_string());
        assert!(body["updated_at"].is_string());
        assert!(body.get("tasks").is_none());
    }

    #[tokio::test]
    async fn test_create_trims_name() {
        let (server, _) = create_test_server();

        let body = create_category(&server, "  Home  ").await;
        assert_eq!(body["name"], "Home");
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let (server, _) = create_test_server();

        let first = create_category(&server, "Work").await;
        let second = create_category(&server, "Work").await;
        assert_ne!(id_of(&first), id_of(&second));
    }

    #[tokio::test]
    async fn test_create_ignores_unknown_fields() {
        let (server, _) = create_test_server();

        let response = server
            .post("/category")
            .authorization_bearer(TOKEN)
            .json(&json!({ "name": "Work", "color": "red" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert!(body.get("color").is_none());
    }

    #[tokio::test]
    async fn test_create_ignores_body_id() {
        let (server, _) = create_test_server();
        let requested = Uuid::new_v4();

        let response = server
            .post("/category")
            .authorization_bearer(TOKEN)
            .json(&json!({ "id": requested, "name": "Work" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert_ne!(id_of(&body), requested.to_string());

        server
            .get(&format!("/category/id/{}", requested))
            .authorization_bearer(TOKEN)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_name() {
        let (server, _) = create_test_server();

        let response = server
            .post("/category")
            .authorization_bearer(TOKEN)
            .json(&json!({}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let (server, _) = create_test_server();

        let response = server
            .post("/category")
            .authorization_bearer(TOKEN)
            .json(&json!({ "name": "   " }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["fields"][0]["field"], "name");
    }

    #[tokio::test]
    async fn test_create_rejects_wrong_type() {
        let (server, _) = create_test_server();

        let response = server
            .post("/category")
            .authorization_bearer(TOKEN)
            .json(&json!({ "name": 42 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let (server, _) = create_test_server();

        let response = server
            .post("/category")
            .authorization_bearer(TOKEN)
            .content_type("application/json")
            .bytes(Bytes::from_static(b"{\"name\": "))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_rejects_non_object_body() {
        let (server, _) = create_test_server();

        let response = server
            .post("/category")
            .authorization_bearer(TOKEN)
            .json(&json!(["Work"]))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rejected_create_stores_nothing() {
        let (server, _) = create_test_server();

        server
            .post("/category")
            .authorization_bearer(TOKEN)
            .json(&json!({ "name": "" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let listed: Vec<Value> = server.get("/category").authorization_bearer(TOKEN).await.json();
        assert!(listed.is_empty());
    }
}

// =============================================================================
// Read Tests
// =============================================================================

mod read_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_empty() {
        let (server, _) = create_test_server();

        let response = server.get("/category").authorization_bearer(TOKEN).await;
        response.assert_status_ok();

        let body: Vec<Value> = response.json();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_list_keeps_creation_order() {
        let (server, _) = create_test_server();

        for name in ["Work", "Home", "Errands"] {
            create_category(&server, name).await;
        }

        let body: Vec<Value> = server.get("/category").authorization_bearer(TOKEN).await.json();
        let names: Vec<&str> = body.iter().filter_map(|c| c["name"].as_str()).collect();
        assert_eq!(names, vec!["Work", "Home", "Errands"]);
    }

    #[tokio::test]
    async fn test_list_with_tasks() {
        let (server, tasks) = create_test_server();

        let work = create_category(&server, "Work").await;
        create_category(&server, "Home").await;
        let work_id = Uuid::parse_str(&id_of(&work)).unwrap();
        tasks.create(Task::new(work_id, "Write report")).await.unwrap();

        let body: Vec<Value> = server
            .get("/category")
            .add_query_param("tasks", "true")
            .authorization_bearer(TOKEN)
            .await
            .json();

        assert_eq!(body[0]["tasks"].as_array().unwrap().len(), 1);
        assert_eq!(body[0]["tasks"][0]["title"], "Write report");
        assert_eq!(body[1]["tasks"], json!([]));
    }

    #[tokio::test]
    async fn test_list_without_tasks_flag_omits_tasks() {
        let (server, tasks) = create_test_server();

        let work = create_category(&server, "Work").await;
        let work_id = Uuid::parse_str(&id_of(&work)).unwrap();
        tasks.create(Task::new(work_id, "Write report")).await.unwrap();

        let body: Vec<Value> = server.get("/category").authorization_bearer(TOKEN).await.json();
        assert!(body[0].get("tasks").is_none());

        for value in ["false", "yes", ""] {
            let body: Vec<Value> = server
                .get("/category")
                .add_query_param("tasks", value)
                .authorization_bearer(TOKEN)
                .await
                .json();
            assert!(body[0].get("tasks").is_none(), "tasks={value} should omit tasks");
        }
    }

    #[tokio::test]
    async fn test_list_tasks_flag_variants() {
        let (server, _) = create_test_server();
        create_category(&server, "Work").await;

        for value in ["TRUE", "1"] {
            let body: Vec<Value> = server
                .get("/category")
                .add_query_param("tasks", value)
                .authorization_bearer(TOKEN)
                .await
                .json();
            assert_eq!(body[0]["tasks"], json!([]), "tasks={value}");
        }
    }

    #[tokio::test]
    async fn test_list_repeated_tasks_key_uses_first() {
        let (server, _) = create_test_server();
        create_category(&server, "Work").await;

        let response = server
            .get("/category")
            .add_query_param("tasks", "true")
            .add_query_param("tasks", "false")
            .authorization_bearer(TOKEN)
            .await;
        response.assert_status_ok();

        let body: Vec<Value> = response.json();
        assert_eq!(body[0]["tasks"], json!([]));
    }

    #[tokio::test]
    async fn test_get_one() {
        let (server, _) = create_test_server();

        let created = create_category(&server, "Work").await;
        let id = id_of(&created);

        let response = server
            .get(&format!("/category/id/{}", id))
            .authorization_bearer(TOKEN)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body, created);
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_404() {
        let (server, _) = create_test_server();

        let response = server
            .get(&format!("/category/id/{}", Uuid::new_v4()))
            .authorization_bearer(TOKEN)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["code"], "ENTITY_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_non_utf8_id_returns_json_404() {
        let (server, _) = create_test_server();

        for path in ["/category/id/%FF", "/category/id/%C3%28"] {
            let response = server.get(path).authorization_bearer(TOKEN).await;
            response.assert_status(StatusCode::NOT_FOUND);

            let body: Value = response.json();
            assert_eq!(body["code"], "ENTITY_NOT_FOUND", "{path}");
        }

        server
            .delete("/category/id/%FF")
            .authorization_bearer(TOKEN)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_malformed_id_returns_404() {
        let (server, _) = create_test_server();

        let response = server
            .get("/category/id/not-a-uuid")
            .authorization_bearer(TOKEN)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}

// =============================================================================
// Update Tests
// =============================================================================

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_update_name() {
        let (server, _) = create_test_server();

        let created = create_category(&server, "Work").await;
        let id = id_of(&created);

        let response = server
            .patch(&format!("/category/id/{}", id))
            .authorization_bearer(TOKEN)
            .json(&json!({ "name": "Office" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["id"], created["id"]);
        assert_eq!(body["name"], "Office");
        assert_eq!(body["created_at"], created["created_at"]);

        let fetched: Value = server
            .get(&format!("/category/id/{}", id))
            .authorization_bearer(TOKEN)
            .await
            .json();
        assert_eq!(fetched["name"], "Office");
    }

    #[tokio::test]
    async fn test_update_ignores_body_id() {
        let (server, _) = create_test_server();

        let created = create_category(&server, "Work").await;
        let id = id_of(&created);
        let other = Uuid::new_v4();

        let response = server
            .patch(&format!("/category/id/{}", id))
            .authorization_bearer(TOKEN)
            .json(&json!({ "id": other, "name": "Office" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(id_of(&body), id);
        assert_eq!(body["name"], "Office");

        let fetched: Value = server
            .get(&format!("/category/id/{}", id))
            .authorization_bearer(TOKEN)
            .await
            .json();
        assert_eq!(id_of(&fetched), id);
        assert_eq!(fetched["name"], "Office");

        server
            .get(&format!("/category/id/{}", other))
            .authorization_bearer(TOKEN)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_empty_body_keeps_record() {
        let (server, _) = create_test_server();

        let created = create_category(&server, "Work").await;

        let response = server
            .patch(&format!("/category/id/{}", id_of(&created)))
            .authorization_bearer(TOKEN)
            .json(&json!({}))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["name"], "Work");
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let (server, _) = create_test_server();

        let created = create_category(&server, "Work").await;
        let id = id_of(&created);

        let response = server
            .patch(&format!("/category/id/{}", id))
            .authorization_bearer(TOKEN)
            .json(&json!({ "name": " " }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let fetched: Value = server
            .get(&format!("/category/id/{}", id))
            .authorization_bearer(TOKEN)
            .await
            .json();
        assert_eq!(fetched["name"], "Work");
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_404() {
        let (server, _) = create_test_server();

        let response = server
            .patch(&format!("/category/id/{}", Uuid::new_v4()))
            .authorization_bearer(TOKEN)
            .json(&json!({ "name": "Office" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}

// =============================================================================
// Delete Tests
// =============================================================================

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_then_get_returns_404() {
        let (server, _) = create_test_server();

        let created = create_category(&server, "Work").await;
        let path = format!("/category/id/{}", id_of(&created));

        let response = server.delete(&path).authorization_bearer(TOKEN).await;
        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.as_bytes().is_empty());

        server
            .get(&path)
            .authorization_bearer(TOKEN)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_twice_returns_404() {
        let (server, _) = create_test_server();

        let created = create_category(&server, "Work").await;
        let path = format!("/category/id/{}", id_of(&created));

        server
            .delete(&path)
            .authorization_bearer(TOKEN)
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .delete(&path)
            .authorization_bearer(TOKEN)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_removes_tasks() {
        let (server, tasks) = create_test_server();

        let created = create_category(&server, "Work").await;
        let id = Uuid::parse_str(&id_of(&created)).unwrap();
        tasks.create(Task::new(id, "Write report")).await.unwrap();

        server
            .delete(&format!("/category/id/{}", id))
            .authorization_bearer(TOKEN)
            .await
            .assert_status(StatusCode::NO_CONTENT);

        assert!(tasks.find_by_category(&id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_leaves_other_categories() {
        let (server, _) = create_test_server();

        let work = create_category(&server, "Work").await;
        create_category(&server, "Home").await;

        server
            .delete(&format!("/category/id/{}", id_of(&work)))
            .authorization_bearer(TOKEN)
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let body: Vec<Value> = server.get("/category").authorization_bearer(TOKEN).await.json();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["name"], "Home");
    }
}

// =============================================================================
// Authentication Tests
// =============================================================================

mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_token_returns_401() {
        let (server, _) = create_test_server();

        let response = server.get("/category").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let body: Value = response.json();
        assert_eq!(body["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_wrong_token_returns_401() {
        let (server, _) = create_test_server();

        server
            .get("/category")
            .authorization_bearer("wrong-token")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_returns_401() {
        let (server, _) = create_test_server();

        server
            .get("/category")
            .add_header(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unauthenticated_create_stores_nothing() {
        let (server, _) = create_test_server();

        server
            .post("/category")
            .json(&json!({ "name": "Work" }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let body: Vec<Value> = server.get("/category").authorization_bearer(TOKEN).await.json();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_auth_runs_before_validation() {
        let (server, _) = create_test_server();

        server
            .post("/category")
            .json(&json!({ "name": "" }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_disabled_auth_accepts_anonymous() {
        let repository = Arc::new(InMemoryCategoryRepository::new());
        let app = ServerBuilder::new()
            .with_auth_provider(NoAuthProvider)
            .register(CategoryDescriptor::new(repository))
            .build()
            .expect("Failed to build app");
        let server = TestServer::new(app).expect("Failed to create test server");

        server.get("/category").await.assert_status_ok();
    }
}

// =============================================================================
// Routing and Failure Tests
// =============================================================================

mod routing_tests {
    use super::*;

    async fn boom() -> StatusCode {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let (server, _) = create_test_server();

        let response = server.get("/nowhere").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["code"], "ROUTE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_500() {
        let repository = Arc::new(InMemoryCategoryRepository::new());
        let app = ServerBuilder::new()
            .with_auth_provider(StaticTokenProvider::new([TOKEN]))
            .register(CategoryDescriptor::new(repository))
            .with_custom_routes(Router::new().route("/boom", get(boom)))
            .build()
            .expect("Failed to build app");
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server.get("/boom").authorization_bearer(TOKEN).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "An internal error occurred");

        // The server keeps answering after a panic.
        server.get("/health").await.assert_status_ok();
    }
}
