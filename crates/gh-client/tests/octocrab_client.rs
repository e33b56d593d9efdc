//! Tests for `OctocrabClient` against a mock GitHub API

use gh_client::{ClientError, GitHubClient, OctocrabClient};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn profile_body(server: &MockServer, login: &str) -> Value {
    json!({
        "login": login,
        "id": 583231,
        "node_id": "MDQ6VXNlcjU4MzIzMQ==",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": format!("https://github.com/{login}"),
        "repos_url": format!("{}/users/{login}/repos", server.uri()),
        "type": "User",
        "site_admin": false,
        "name": "The Octocat",
        "bio": null,
        "public_repos": 8
    })
}

fn repo_body(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
        "name": name,
        "full_name": format!("octocat/{name}"),
        "private": false,
        "html_url": format!("https://github.com/octocat/{name}"),
        "description": format!("{name} description"),
        "fork": false,
        "stargazers_count": id * 10,
        "forks_count": id,
        "language": "Rust"
    })
}

fn not_found_body() -> Value {
    json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest/users/users#get-a-user",
        "status": "404"
    })
}

#[tokio::test]
async fn test_fetch_user_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body(&mock_server, "octocat")))
        .mount(&mock_server)
        .await;

    let client = OctocrabClient::with_base_url(&mock_server.uri()).unwrap();
    let profile = client.fetch_user("octocat").await.unwrap();

    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.bio, None);
    assert_eq!(
        profile.repos_url,
        format!("{}/users/octocat/repos", mock_server.uri())
    );
}

#[tokio::test]
async fn test_fetch_user_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/no-such-user-xyz"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .mount(&mock_server)
        .await;

    let client = OctocrabClient::with_base_url(&mock_server.uri()).unwrap();
    let err = client.fetch_user("no-such-user-xyz").await.unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err:?}");
    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn test_fetch_user_any_failure_status_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Server Error"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OctocrabClient::with_base_url(&mock_server.uri()).unwrap();
    let err = client.fetch_user("octocat").await.unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_fetch_user_not_found_without_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OctocrabClient::with_base_url(&mock_server.uri()).unwrap();
    let err = client.fetch_user("ghost").await.unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err:?}");
    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn test_fetch_user_html_error_page_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_raw("<html><body>Bad Gateway</body></html>", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OctocrabClient::with_base_url(&mock_server.uri()).unwrap();
    let err = client.fetch_user("octocat").await.unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_fetch_user_encodes_username() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/foo%20bar"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OctocrabClient::with_base_url(&mock_server.uri()).unwrap();
    let err = client.fetch_user("foo bar").await.unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_fetch_user_repositories_encodes_username() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/j%C3%BCrgen/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OctocrabClient::with_base_url(&mock_server.uri()).unwrap();
    let repos = client.fetch_user_repositories("jürgen", 2).await.unwrap();

    assert!(repos.is_empty());
}

#[tokio::test]
async fn test_fetch_user_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "octocat" })))
        .mount(&mock_server)
        .await;

    let client = OctocrabClient::with_base_url(&mock_server.uri()).unwrap();
    let err = client.fetch_user("octocat").await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_fetch_repositories_follows_repos_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_body(3, "linguist"),
            repo_body(1, "Hello-World"),
            repo_body(2, "Spoon-Knife"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OctocrabClient::with_base_url(&mock_server.uri()).unwrap();
    let repos_url = format!("{}/users/octocat/repos", mock_server.uri());
    let repos = client.fetch_repositories(&repos_url).await.unwrap();

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["linguist", "Hello-World", "Spoon-Knife"]);
    assert_eq!(repos[0].stargazers_count, 30);
    assert_eq!(repos[0].forks_count, 3);
}

#[tokio::test]
async fn test_fetch_repositories_failure_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .mount(&mock_server)
        .await;

    let client = OctocrabClient::with_base_url(&mock_server.uri()).unwrap();
    let repos_url = format!("{}/users/octocat/repos", mock_server.uri());
    let err = client.fetch_repositories(&repos_url).await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_user_repositories_requests_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([repo_body(31, "page-two")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OctocrabClient::with_base_url(&mock_server.uri()).unwrap();
    let repos = client.fetch_user_repositories("octocat", 2).await.unwrap();

    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].id, 31);
    assert_eq!(repos[0].name, "page-two");
}

#[tokio::test]
async fn test_fetch_user_repositories_past_last_page_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = OctocrabClient::with_base_url(&mock_server.uri()).unwrap();
    let repos = client.fetch_user_repositories("octocat", 9).await.unwrap();

    assert!(repos.is_empty());
}
