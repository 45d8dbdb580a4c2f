//! HTTP API tests: the full router over an in-memory store
//! Run: cargo test -p task-server --test api_test

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use task_server::db::DbService;
use task_server::{Config, ServerState, build_router};

async fn app() -> Router {
    let db = DbService::memory().await.unwrap().db;
    build_router(ServerState::new(Config::in_memory(), db))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn ann() -> Value {
    json!({
        "id": "E1",
        "name": "Ann",
        "role": "Employee",
        "team": "Core",
        "mobile": "123",
        "email": "ann@x.com",
        "address": "1 Main St"
    })
}

fn bo() -> Value {
    json!({
        "id": "TL1",
        "name": "Bo",
        "team": "Core",
        "experience": 7,
        "salary": 90000,
        "mobile": "555",
        "email": "bo@x.com",
        "address": "2 Side St"
    })
}

fn ship_task() -> Value {
    json!({
        "taskName": "Ship release",
        "deadline": "2025-03-01",
        "team": "Core",
        "assignedTo": "Ann"
    })
}

// ========== Health ==========

#[tokio::test]
async fn health_reports_database_ok() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}

// ========== Employees ==========

#[tokio::test]
async fn create_employee_then_list_contains_it() {
    let app = app().await;
    let (status, created) = send(&app, Method::POST, "/api/employees", Some(ann())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(!created["_id"].as_str().unwrap().is_empty());
    assert_eq!(created["experience"], Value::Null);

    let (status, list) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], "E1");
    assert_eq!(list[0]["name"], "Ann");
    assert_eq!(list[0]["role"], "Employee");
    assert_eq!(list[0]["_id"], created["_id"]);

    let uri = format!("/api/employees/{}", created["_id"].as_str().unwrap());
    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["email"], "ann@x.com");
}

#[tokio::test]
async fn duplicate_employee_id_or_email_is_rejected() {
    let app = app().await;
    send(&app, Method::POST, "/api/employees", Some(ann())).await;

    let mut same_id = ann();
    same_id["email"] = json!("other@x.com");
    let (status, body) = send(&app, Method::POST, "/api/employees", Some(same_id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8002);

    let mut same_email = ann();
    same_email["id"] = json!("E2");
    let (status, body) = send(&app, Method::POST, "/api/employees", Some(same_email)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8003);
    assert!(body["message"].as_str().unwrap().contains("ann@x.com"));

    let (_, list) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn employee_validation_errors() {
    let app = app().await;

    let mut missing_name = ann();
    missing_name.as_object_mut().unwrap().remove("name");
    let (status, body) = send(&app, Method::POST, "/api/employees", Some(missing_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7);
    assert_eq!(body["message"], "name is required");

    let mut blank_team = ann();
    blank_team["team"] = json!("   ");
    let (status, _) = send(&app, Method::POST, "/api/employees", Some(blank_team)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_role = ann();
    bad_role["role"] = json!("Manager");
    let (status, body) = send(&app, Method::POST, "/api/employees", Some(bad_role)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);

    let mut negative_salary = ann();
    negative_salary["salary"] = json!(-5);
    let (status, body) = send(&app, Method::POST, "/api/employees", Some(negative_salary)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);

    let mut text_salary = ann();
    text_salary["salary"] = json!("lots");
    let (status, _) = send(&app, Method::POST, "/api/employees", Some(text_salary)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/tasks")
        .body(Body::from(ship_task().to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_employees_filters_by_role() {
    let app = app().await;
    send(&app, Method::POST, "/api/employees", Some(ann())).await;
    let mut lead = ann();
    lead["id"] = json!("E2");
    lead["email"] = json!("cy@x.com");
    lead["role"] = json!("Team Lead");
    // experience and salary stay optional on the employee collection
    let (status, created) = send(&app, Method::POST, "/api/employees", Some(lead)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["experience"].is_null());

    let (status, list) = send(&app, Method::GET, "/api/employees?role=Team%20Lead", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], "E2");

    let (status, list) = send(&app, Method::GET, "/api/employees?role=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, Method::GET, "/api/employees?role=Boss", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8004);
}

#[tokio::test]
async fn update_employee_changes_only_provided_fields() {
    let app = app().await;
    let (_, created) = send(&app, Method::POST, "/api/employees", Some(ann())).await;
    let uri = format!("/api/employees/{}", created["_id"].as_str().unwrap());

    let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({"team": "Ops"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["team"], "Ops");
    assert_eq!(updated["name"], "Ann");
    assert_eq!(updated["email"], "ann@x.com");
    assert_eq!(updated["_id"], created["_id"]);

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"name": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::PUT, "/api/employees/missing", Some(json!({"team": "Ops"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found");
}

#[tokio::test]
async fn update_employee_null_clears_experience_and_salary() {
    let app = app().await;
    let (_, created) = send(&app, Method::POST, "/api/employees", Some(ann())).await;
    let uri = format!("/api/employees/{}", created["_id"].as_str().unwrap());

    let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({"experience": 3, "salary": 1200}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["experience"], 3.0);
    assert_eq!(updated["salary"], 1200.0);

    let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({"experience": null}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(updated["experience"].is_null());
    assert_eq!(updated["salary"], 1200.0);

    let (_, fetched) = send(&app, Method::GET, &uri, None).await;
    assert!(fetched["experience"].is_null());
    assert_eq!(fetched["salary"], 1200.0);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"salary": -1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
}

#[tokio::test]
async fn update_employee_rejects_collision_with_other_record() {
    let app = app().await;
    send(&app, Method::POST, "/api/employees", Some(ann())).await;
    let mut ben = ann();
    ben["id"] = json!("E2");
    ben["name"] = json!("Ben");
    ben["email"] = json!("ben@x.com");
    let (_, ben) = send(&app, Method::POST, "/api/employees", Some(ben)).await;
    let uri = format!("/api/employees/{}", ben["_id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"email": "ann@x.com"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8003);

    // 保持自身的值不算冲突
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"email": "ben@x.com"}))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_employee_and_missing_is_not_found() {
    let app = app().await;
    let (_, created) = send(&app, Method::POST, "/api/employees", Some(ann())).await;
    let uri = format!("/api/employees/{}", created["_id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee deleted successfully");

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);
}

#[tokio::test]
async fn bulk_delete_employees_counts_only_existing() {
    let app = app().await;
    let mut ids = Vec::new();
    for (i, name) in ["Ann", "Ben", "Cy"].iter().enumerate() {
        let body = json!({
            "id": format!("E{i}"),
            "name": name,
            "role": "Employee",
            "team": "Core",
            "mobile": "1",
            "email": format!("{name}@x.com"),
            "address": "x"
        });
        let (_, created) = send(&app, Method::POST, "/api/employees", Some(body)).await;
        ids.push(created["_id"].as_str().unwrap().to_string());
    }

    let payload = json!({"employeeIds": [ids[0], ids[1], "does-not-exist"]});
    let (status, body) = send(&app, Method::DELETE, "/api/employees", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 2);
    assert_eq!(body["message"], "2 employees deleted successfully");

    let (_, list) = send(&app, Method::GET, "/api/employees", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Cy");
}

#[tokio::test]
async fn bulk_delete_requires_non_empty_array() {
    let app = app().await;
    let (status, body) = send(&app, Method::DELETE, "/api/employees", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
    assert_eq!(body["message"], "Invalid request. An array of employee IDs is required.");

    let (status, _) = send(&app, Method::DELETE, "/api/tasks", Some(json!({"taskIds": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::DELETE, "/api/teamleads", Some(json!({"teamLeadIds": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ========== Team Leads ==========

#[tokio::test]
async fn create_team_lead_forces_role_and_defaults() {
    let app = app().await;
    let mut payload = bo();
    payload["role"] = json!("Employee");
    let (status, lead) = send(&app, Method::POST, "/api/teamleads", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(lead["role"], "Team Lead");
    assert_eq!(lead["experience"], 7.0);
    assert_eq!(lead["salary"], 90000.0);
    assert_eq!(lead["certifications"], json!([]));
    assert_eq!(lead["leadershipExperience"], 0.0);

    let (_, list) = send(&app, Method::GET, "/api/teamleads", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn team_lead_unique_fields() {
    let app = app().await;
    send(&app, Method::POST, "/api/teamleads", Some(bo())).await;

    let mut same_mobile = bo();
    same_mobile["id"] = json!("TL2");
    same_mobile["email"] = json!("dee@x.com");
    let (status, body) = send(&app, Method::POST, "/api/teamleads", Some(same_mobile)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7004);

    let mut same_id = bo();
    same_id["email"] = json!("dee@x.com");
    same_id["mobile"] = json!("556");
    let (status, body) = send(&app, Method::POST, "/api/teamleads", Some(same_id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7002);

    let dee = json!({
        "id": "TL2", "name": "Dee", "team": "Ops", "experience": 3, "salary": 80000,
        "mobile": "556", "email": "dee@x.com", "address": "3 Road"
    });
    let (status, dee) = send(&app, Method::POST, "/api/teamleads", Some(dee)).await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/teamleads/{}", dee["_id"].as_str().unwrap());
    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"email": "bo@x.com"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7003);
}

#[tokio::test]
async fn team_lead_numeric_validation() {
    let app = app().await;

    let mut missing = bo();
    missing.as_object_mut().unwrap().remove("experience");
    let (status, body) = send(&app, Method::POST, "/api/teamleads", Some(missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "experience is required");

    let mut text = bo();
    text["experience"] = json!("five");
    let (status, _) = send(&app, Method::POST, "/api/teamleads", Some(text)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut negative = bo();
    negative["leadershipExperience"] = json!(-1);
    let (status, body) = send(&app, Method::POST, "/api/teamleads", Some(negative)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
}

#[tokio::test]
async fn update_team_lead_keeps_role() {
    let app = app().await;
    let (_, lead) = send(&app, Method::POST, "/api/teamleads", Some(bo())).await;
    let uri = format!("/api/teamleads/{}", lead["_id"].as_str().unwrap());

    let patch = json!({"role": "Employee", "certifications": ["PMP"], "salary": 95000});
    let (status, updated) = send(&app, Method::PUT, &uri, Some(patch)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["role"], "Team Lead");
    assert_eq!(updated["certifications"], json!(["PMP"]));
    assert_eq!(updated["salary"], 95000.0);
    assert_eq!(updated["experience"], 7.0);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Team Lead deleted successfully");

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Team Lead not found");
}

// ========== Tasks ==========

#[tokio::test]
async fn create_task_defaults_status_and_canonical_deadline() {
    let app = app().await;
    let (status, task) = send(&app, Method::POST, "/api/tasks", Some(ship_task())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["status"], "To Do");
    assert_eq!(task["deadline"], "2025-03-01T00:00:00.000Z");
    assert_eq!(task["assignedTo"], "Ann");
}

#[tokio::test]
async fn task_status_outside_the_four_is_rejected() {
    let app = app().await;
    let mut bad = ship_task();
    bad["status"] = json!("Blocked");
    let (status, _) = send(&app, Method::POST, "/api/tasks", Some(bad)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, task) = send(&app, Method::POST, "/api/tasks", Some(ship_task())).await;
    let uri = format!("/api/tasks/{}", task["_id"].as_str().unwrap());
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"status": "Done"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, Method::GET, "/api/tasks", None).await;
    assert_eq!(list[0]["status"], "To Do");
}

#[tokio::test]
async fn task_invalid_deadline_is_rejected() {
    let app = app().await;
    let mut bad = ship_task();
    bad["deadline"] = json!("next friday");
    let (status, body) = send(&app, Method::POST, "/api/tasks", Some(bad)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);
}

#[tokio::test]
async fn status_update_leaves_other_fields_unchanged() {
    let app = app().await;
    let (_, task) = send(&app, Method::POST, "/api/tasks", Some(ship_task())).await;
    let uri = format!("/api/tasks/{}", task["_id"].as_str().unwrap());

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"status": "Testing"}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, Method::GET, "/api/tasks", None).await;
    let after = &list[0];
    assert_eq!(after["status"], "Testing");
    assert_eq!(after["taskName"], task["taskName"]);
    assert_eq!(after["deadline"], task["deadline"]);
    assert_eq!(after["team"], task["team"]);
    assert_eq!(after["assignedTo"], task["assignedTo"]);
    assert_eq!(after["_id"], task["_id"]);

    // 状态可以任意回退
    let (status, back) = send(&app, Method::PUT, &uri, Some(json!({"status": "To Do"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(back["status"], "To Do");
}

#[tokio::test]
async fn task_path_accepts_table_prefix() {
    let app = app().await;
    let (_, task) = send(&app, Method::POST, "/api/tasks", Some(ship_task())).await;
    let uri = format!("/api/tasks/task:{}", task["_id"].as_str().unwrap());
    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["_id"], task["_id"]);
}

#[tokio::test]
async fn delete_task_and_bulk_delete() {
    let app = app().await;
    let (_, t1) = send(&app, Method::POST, "/api/tasks", Some(ship_task())).await;
    let (_, t2) = send(&app, Method::POST, "/api/tasks", Some(ship_task())).await;

    let (status, body) = send(&app, Method::DELETE, "/api/tasks/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task not found");

    let uri = format!("/api/tasks/{}", t1["_id"].as_str().unwrap());
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task deleted successfully");

    let payload = json!({"taskIds": [t1["_id"], t2["_id"]]});
    let (status, body) = send(&app, Method::DELETE, "/api/tasks", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 1);
    assert_eq!(body["message"], "1 tasks deleted successfully");
}
