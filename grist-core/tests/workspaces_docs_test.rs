use grist_core::client::{AccessRole, RequestError};
use grist_core::http::{Method, StatusCode};
use mock_transport::{ENDPOINT, MockTransport, client};
use serde_json::json;

mod mock_transport;

#[tokio::test]
async fn test_list_workspaces_with_docs() {
    let client = client(MockTransport::new().respond_json(json!([
        {
            "id": 10,
            "name": "Home",
            "access": "owners",
            "orgDomain": "team",
            "docs": [
                { "id": "abc123", "name": "Budget", "access": "editors", "isPinned": true, "urlId": null }
            ]
        },
        { "id": 11, "name": "Archive", "access": "viewers", "docs": [] }
    ])));

    let workspaces = client.list_workspaces(1).await.unwrap();

    assert_eq!(
        client.transport().last_request().url.as_str(),
        format!("{ENDPOINT}/api/orgs/1/workspaces")
    );
    assert_eq!(workspaces.len(), 2);
    assert_eq!(workspaces[0].org_domain.as_deref(), Some("team"));
    assert_eq!(workspaces[0].docs[0].id, "abc123");
    assert_eq!(workspaces[0].docs[0].access, AccessRole::Editors);
    assert!(workspaces[0].docs[0].is_pinned);
    assert!(workspaces[1].docs.is_empty());
}

#[tokio::test]
async fn test_create_workspace_returns_id() {
    let client = client(MockTransport::new().respond(StatusCode::OK, "42"));

    let id = client.create_workspace(1, "Reports").await.unwrap();

    assert_eq!(id, 42);
    let request = client.transport().last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(client.transport().last_body(), json!({ "name": "Reports" }));
}

#[tokio::test]
async fn test_create_workspace_rejects_empty_name() {
    let client = client(MockTransport::new());

    let err = client.create_workspace(1, "").await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid argument: workspace name cannot be empty");
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_describe_workspace_rejects_non_positive_id() {
    let client = client(MockTransport::new());

    for id in [0, -4] {
        let err = client.describe_workspace(id).await.unwrap_err();
        assert!(matches!(err, RequestError::InvalidArgument(_)));
    }
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_describe_workspace_with_org() {
    let client = client(MockTransport::new().respond_json(json!({
        "id": 10,
        "name": "Home",
        "access": "owners",
        "org": {
            "id": 1,
            "name": "Team",
            "createdAt": "2024-01-01",
            "updatedAt": "2024-01-02",
            "access": "owners"
        }
    })));

    let workspace = client.describe_workspace(10).await.unwrap();

    assert_eq!(workspace.org.unwrap().name, "Team");
}

#[tokio::test]
async fn test_modify_and_delete_workspace() {
    let client = client(
        MockTransport::new()
            .respond(StatusCode::OK, "")
            .respond(StatusCode::OK, ""),
    );

    client.modify_workspace(10, "Renamed").await.unwrap();
    client.delete_workspace(10).await.unwrap();

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, Method::PATCH);
    assert_eq!(requests[0].body_str(), Some(r#"{"name":"Renamed"}"#));
    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(
        requests[1].url.as_str(),
        format!("{ENDPOINT}/api/workspaces/10")
    );
    assert!(requests[1].body.is_none());
}

#[tokio::test]
async fn test_create_doc_strips_quotes_from_id() {
    let client = client(MockTransport::new().respond(StatusCode::OK, "\"hT7yq3mWn2cX\"\n"));

    let doc_id = client.create_doc(10, "New document", true).await.unwrap();

    assert_eq!(doc_id, "hT7yq3mWn2cX");
    assert_eq!(
        client.transport().last_request().url.as_str(),
        format!("{ENDPOINT}/api/workspaces/10/docs")
    );
    assert_eq!(
        client.transport().last_body(),
        json!({ "name": "New document", "isPinned": true })
    );
}

#[tokio::test]
async fn test_modify_doc_returns_id() {
    let client = client(MockTransport::new().respond(StatusCode::OK, "\"hT7yq3mWn2cX\""));

    let doc_id = client
        .modify_doc("hT7yq3mWn2cX", "Renamed", false)
        .await
        .unwrap();

    assert_eq!(doc_id, "hT7yq3mWn2cX");
    let request = client.transport().last_request();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(
        client.transport().last_body(),
        json!({ "name": "Renamed", "isPinned": false })
    );
}

#[tokio::test]
async fn test_describe_doc_with_workspace() {
    let client = client(MockTransport::new().respond_json(json!({
        "id": "hT7yq3mWn2cX",
        "name": "Budget",
        "access": "owners",
        "isPinned": false,
        "urlId": "budget",
        "workspace": { "id": 10, "name": "Home", "access": "owners" }
    })));

    let doc = client.describe_doc("hT7yq3mWn2cX").await.unwrap();

    assert_eq!(doc.url_id.as_deref(), Some("budget"));
    assert_eq!(doc.workspace.unwrap().id, 10);
}

#[tokio::test]
async fn test_delete_doc() {
    let client = client(MockTransport::new().respond(StatusCode::OK, "null"));

    client.delete_doc("hT7yq3mWn2cX").await.unwrap();

    let request = client.transport().last_request();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(
        request.url.as_str(),
        format!("{ENDPOINT}/api/docs/hT7yq3mWn2cX")
    );
}
