use grist_core::client::{AccessRole, RequestError};
use grist_core::http::{Method, StatusCode};
use mock_transport::{ENDPOINT, MockTransport, client};
use serde_json::json;

mod mock_transport;

fn org_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "domain": "team",
        "host": null,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-02-01T00:00:00.000Z",
        "access": "owners",
        "owner": null
    })
}

#[tokio::test]
async fn test_list_orgs() {
    let client = client(
        MockTransport::new().respond_json(json!([org_json(1, "Personal"), org_json(2, "Team")])),
    );

    let orgs = client.list_orgs().await.unwrap();

    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[0].id, 1);
    assert_eq!(orgs[0].name, "Personal");
    assert_eq!(orgs[0].domain.as_deref(), Some("team"));
    assert_eq!(orgs[0].host, None);
    assert_eq!(orgs[0].access, AccessRole::Owners);
    assert_eq!(orgs[1].created_at, "2024-01-01T00:00:00.000Z");
}

#[tokio::test]
async fn test_describe_org() {
    let client = client(MockTransport::new().respond_json(org_json(7, "Acme")));

    let org = client.describe_org(7).await.unwrap();

    assert_eq!(org.name, "Acme");
    assert_eq!(
        client.transport().last_request().url.as_str(),
        format!("{ENDPOINT}/api/orgs/7")
    );
}

#[tokio::test]
async fn test_unknown_access_role_fails_decoding() {
    let mut org = org_json(7, "Acme");
    org["access"] = json!("admins");
    let client = client(MockTransport::new().respond_json(org));

    let err = client.describe_org(7).await.unwrap_err();

    assert!(matches!(err, RequestError::Decode { .. }));
}

#[tokio::test]
async fn test_modify_org_sends_new_name() {
    let client = client(MockTransport::new().respond(StatusCode::OK, ""));

    client.modify_org(3, "Renamed").await.unwrap();

    let request = client.transport().last_request();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.url.as_str(), format!("{ENDPOINT}/api/orgs/3"));
    assert_eq!(client.transport().last_body(), json!({ "name": "Renamed" }));
}

#[tokio::test]
async fn test_modify_org_rejects_empty_name_without_sending() {
    let client = client(MockTransport::new());

    let err = client.modify_org(3, "  ").await.unwrap_err();

    assert!(matches!(err, RequestError::InvalidArgument(_)));
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_delete_org_puts_name_in_path() {
    let client = client(MockTransport::new().respond(StatusCode::OK, ""));

    client.delete_org(3, "My Team").await.unwrap();

    let request = client.transport().last_request();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(
        request.url.as_str(),
        format!("{ENDPOINT}/api/orgs/3/My%20Team")
    );
}

#[tokio::test]
async fn test_delete_org_not_found() {
    let client = client(MockTransport::new().respond(StatusCode::NOT_FOUND, "not found"));

    let err = client.delete_org(3, "Ghost").await.unwrap_err();

    assert_eq!(err.to_string(), "api error: 404 Not Found - not found");
}

#[tokio::test]
async fn test_list_org_access() {
    let client = client(MockTransport::new().respond_json(json!({
        "users": [
            {
                "id": 1,
                "name": "Jane Doe",
                "email": "jane@example.com",
                "access": "owners",
                "isMember": true
            },
            {
                "id": 2,
                "name": "Guest",
                "email": "guest@example.com",
                "access": null,
                "ref": "abc",
                "picture": "https://example.com/guest.png"
            }
        ]
    })));

    let users = client.list_org_access(5).await.unwrap();

    assert_eq!(
        client.transport().last_request().url.as_str(),
        format!("{ENDPOINT}/api/orgs/5/access")
    );
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].access, Some(AccessRole::Owners));
    assert!(users[0].is_member);
    assert_eq!(users[1].access, None);
    assert_eq!(users[1].reference.as_deref(), Some("abc"));
    assert!(!users[1].is_member);
}
