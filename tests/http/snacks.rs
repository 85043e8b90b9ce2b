use serde_json::{json, Value};

use crate::support::start_server;

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|snack| snack["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn health_check() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn list_all_in_id_order() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/snacks")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5]);
    assert_eq!(
        body[0],
        json!({ "id": 1, "name": "Apple Slices with Peanut Butter", "calories": 200 })
    );
}

#[tokio::test]
async fn list_with_max_calories() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/snacks?max-calories=180"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(ids(&body), vec![3, 4, 5]);
    for snack in body.as_array().unwrap() {
        assert!(snack["calories"].as_i64().unwrap() <= 180);
    }
}

#[tokio::test]
async fn unparseable_filter_is_rejected() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/snacks?max-calories=lots"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn get_one_and_missing() {
    let base = start_server().await;

    let resp = reqwest::get(format!("{base}/snacks/3")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "id": 3, "name": "Mixed Nuts", "calories": 180 }));

    let resp = reqwest::get(format!("{base}/snacks/42")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Snack '42' not found." }));
}

#[tokio::test]
async fn create_assigns_next_id() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/snacks"))
        .json(&json!({ "id": 99, "name": "Trail Mix", "calories": 210 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "id": 6, "name": "Trail Mix", "calories": 210 }));

    let resp = client.get(format!("{base}/snacks/6")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn put_updates_snack() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/snacks/2"))
        .json(&json!({ "id": 2, "name": "Yogurt Bowl", "calories": 230 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = client
        .get(format!("{base}/snacks/2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "id": 2, "name": "Yogurt Bowl", "calories": 230 }));
}

#[tokio::test]
async fn put_with_mismatched_id_is_bad_request() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/snacks/2"))
        .json(&json!({ "id": 3, "name": "Yogurt Bowl", "calories": 230 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "error": "The Id '2' does not match the Snack Id '3'" })
    );

    let resp = client
        .put(format!("{base}/snacks/9"))
        .json(&json!({ "id": 9, "name": "Ghost", "calories": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn patch_applies_operations() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .patch(format!("{base}/snacks/5"))
        .json(&json!([
            { "op": "replace", "path": "/calories", "value": 160 },
            { "op": "test", "path": "/name", "value": "Dark Chocolate" },
        ]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "id": 5, "name": "Dark Chocolate", "calories": 160 }));
}

#[tokio::test]
async fn repeated_move_is_bad_request() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .patch(format!("{base}/snacks/1"))
        .json(&json!([
            { "op": "move", "from": "/name", "path": "/label" },
            { "op": "move", "from": "/name", "path": "/label" },
        ]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = client
        .get(format!("{base}/snacks/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["name"], "Apple Slices with Peanut Butter");
}

#[tokio::test]
async fn patch_missing_is_not_found() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .patch(format!("{base}/snacks/77"))
        .json(&json!([{ "op": "replace", "path": "/name", "value": "x" }]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/snacks/3"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
    assert!(resp.bytes().await.unwrap().is_empty());

    let resp = client.get(format!("{base}/snacks/3")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(format!("{base}/snacks/3"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
