use serde_json::Value;

use crate::support::start_server;

async fn document() -> Value {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

fn codes(doc: &Value, path: &str, verb: &str) -> Vec<String> {
    let mut codes: Vec<String> = doc["paths"][path][verb]["responses"]
        .as_object()
        .unwrap_or_else(|| panic!("no responses for {verb} {path}"))
        .keys()
        .cloned()
        .collect();
    codes.sort();
    codes
}

#[tokio::test]
async fn documents_every_operation() {
    let doc = document().await;
    assert_eq!(doc["info"]["title"], "Snacks API");
    for verb in ["get", "post"] {
        assert!(doc["paths"]["/snacks"][verb].is_object(), "missing {verb} /snacks");
    }
    for verb in ["get", "put", "patch", "delete"] {
        assert!(doc["paths"]["/snacks/{id}"][verb].is_object(), "missing {verb} /snacks/{{id}}");
    }
    assert!(doc["components"]["schemas"]["Snack"].is_object());
}

#[tokio::test]
async fn standard_responses_are_added() {
    let doc = document().await;

    assert_eq!(codes(&doc, "/snacks", "get"), ["200", "400", "401", "500"]);
    assert_eq!(codes(&doc, "/snacks", "post"), ["201", "400", "401", "500"]);
    assert_eq!(codes(&doc, "/snacks/{id}", "get"), ["200", "400", "401", "404", "500"]);
    assert_eq!(codes(&doc, "/snacks/{id}", "put"), ["200", "400", "401", "404", "500"]);
    assert_eq!(codes(&doc, "/snacks/{id}", "patch"), ["200", "400", "401", "404", "500"]);
    assert_eq!(codes(&doc, "/snacks/{id}", "delete"), ["204", "400", "401", "500"]);
}
