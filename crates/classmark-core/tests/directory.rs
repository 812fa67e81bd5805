// SPDX-License-Identifier: Apache-2.0

//! Directory client tests against a mock GitHub API.
//!
//! Exercises the octocrab-backed facade end to end: pagination across the
//! organization listing, partial results on a mid-listing failure, 404
//! mapping for exact-name lookups, and issue creation.

use classmark_core::{ClassmarkError, GitHubDirectory, RepoDirectory};
use octocrab::Octocrab;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORG: &str = "classroom-org";

fn client_for(server: &MockServer) -> Octocrab {
    Octocrab::builder()
        .base_uri(server.uri())
        .expect("valid base uri")
        .personal_token("test-token".to_string())
        .build()
        .expect("build octocrab client")
}

fn repo_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "node_id": format!("R_{id}"),
        "name": name,
        "full_name": format!("{ORG}/{name}"),
        "private": true,
        "url": format!("https://api.github.com/repos/{ORG}/{name}"),
        "html_url": format!("https://github.com/{ORG}/{name}"),
    })
}

fn page_json(start: u64, count: u64) -> Value {
    let repos: Vec<Value> = (start..start + count)
        .map(|i| repo_json(i, &format!("hw1-student{i}")))
        .collect();
    Value::Array(repos)
}

fn next_link(server: &MockServer, page: u32) -> String {
    format!(
        "<{}/orgs/{ORG}/repos?per_page=100&page={page}>; rel=\"next\"",
        server.uri()
    )
}

/// A realistic GitHub user object, required by octocrab's issue model.
fn user_json() -> Value {
    json!({
        "login": "grader",
        "id": 1,
        "node_id": "U_1",
        "avatar_url": "https://avatars.githubusercontent.com/u/1",
        "gravatar_id": "",
        "url": "https://api.github.com/users/grader",
        "html_url": "https://github.com/grader",
        "followers_url": "https://api.github.com/users/grader/followers",
        "following_url": "https://api.github.com/users/grader/following{/other_user}",
        "gists_url": "https://api.github.com/users/grader/gists{/gist_id}",
        "starred_url": "https://api.github.com/users/grader/starred{/owner}{/repo}",
        "subscriptions_url": "https://api.github.com/users/grader/subscriptions",
        "organizations_url": "https://api.github.com/users/grader/orgs",
        "repos_url": "https://api.github.com/users/grader/repos",
        "events_url": "https://api.github.com/users/grader/events{/privacy}",
        "received_events_url": "https://api.github.com/users/grader/received_events",
        "type": "User",
        "site_admin": false,
    })
}

fn issue_json(repo: &str, number: u64, title: &str, body: &str) -> Value {
    let api = format!("https://api.github.com/repos/{ORG}/{repo}");
    json!({
        "id": 4242,
        "node_id": "I_4242",
        "url": format!("{api}/issues/{number}"),
        "repository_url": api,
        "labels_url": format!("{api}/issues/{number}/labels{{/name}}"),
        "comments_url": format!("{api}/issues/{number}/comments"),
        "events_url": format!("{api}/issues/{number}/events"),
        "html_url": format!("https://github.com/{ORG}/{repo}/issues/{number}"),
        "number": number,
        "state": "open",
        "state_reason": null,
        "title": title,
        "body": body,
        "user": user_json(),
        "labels": [],
        "assignee": null,
        "assignees": [],
        "milestone": null,
        "locked": false,
        "active_lock_reason": null,
        "comments": 0,
        "pull_request": null,
        "closed_at": null,
        "created_at": "2026-01-15T10:00:00Z",
        "updated_at": "2026-01-15T10:00:00Z",
        "author_association": "COLLABORATOR",
    })
}

#[tokio::test]
async fn list_all_repositories_pages_through_three_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/orgs/{ORG}/repos")))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(100, 100))
                .insert_header("Link", next_link(&server, 3)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/orgs/{ORG}/repos")))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(200, 17)))
        .mount(&server)
        .await;

    // First page carries no page parameter; mounted last so the
    // page-specific mocks above take precedence.
    Mock::given(method("GET"))
        .and(path(format!("/orgs/{ORG}/repos")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(0, 100))
                .insert_header("Link", next_link(&server, 2)),
        )
        .mount(&server)
        .await;

    let directory = GitHubDirectory::new(client_for(&server));
    let repos = directory
        .list_all_repositories(ORG)
        .await
        .expect("listing should succeed");

    assert_eq!(repos.len(), 217);
    assert_eq!(repos[0].name, "hw1-student0");
    assert_eq!(repos[100].name, "hw1-student100");
    assert_eq!(repos[216].name, "hw1-student216");
    // Original page order is preserved.
    for (i, repo) in repos.iter().enumerate() {
        assert_eq!(repo.name, format!("hw1-student{i}"));
    }
}

#[tokio::test]
async fn list_all_repositories_returns_partial_on_mid_listing_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/orgs/{ORG}/repos")))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(100, 100))
                .insert_header("Link", next_link(&server, 3)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/orgs/{ORG}/repos")))
        .and(query_param("page", "3"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "server error"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/orgs/{ORG}/repos")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(0, 100))
                .insert_header("Link", next_link(&server, 2)),
        )
        .mount(&server)
        .await;

    let directory = GitHubDirectory::new(client_for(&server));
    let err = directory
        .list_all_repositories(ORG)
        .await
        .expect_err("third page should fail");

    // The first two pages survive alongside the error.
    assert_eq!(err.fetched.len(), 200);
    assert_eq!(err.fetched[0].name, "hw1-student0");
    assert_eq!(err.fetched[199].name, "hw1-student199");
    assert!(matches!(
        err.source,
        ClassmarkError::DirectoryAccess { .. }
    ));
}

#[tokio::test]
async fn get_repository_returns_handle_with_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/repos/{ORG}/hw1-alice")))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_json(7, "hw1-alice")))
        .mount(&server)
        .await;

    let directory = GitHubDirectory::new(client_for(&server));
    let repo = directory
        .get_repository(ORG, "hw1-alice")
        .await
        .expect("repository exists");

    assert_eq!(repo.org, ORG);
    assert_eq!(repo.name, "hw1-alice");
    assert_eq!(repo.url, format!("https://github.com/{ORG}/hw1-alice"));
}

#[tokio::test]
async fn get_repository_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/repos/{ORG}/hw1-ghost")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/repos/repos#get-a-repository",
        })))
        .mount(&server)
        .await;

    let directory = GitHubDirectory::new(client_for(&server));
    let err = directory
        .get_repository(ORG, "hw1-ghost")
        .await
        .expect_err("repository does not exist");

    assert!(matches!(
        err,
        ClassmarkError::RepositoryNotFound { org, name }
            if org == ORG && name == "hw1-ghost"
    ));
}

#[tokio::test]
async fn get_repository_maps_auth_failure_to_directory_access() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/repos/{ORG}/hw1-alice")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest",
        })))
        .mount(&server)
        .await;

    let directory = GitHubDirectory::new(client_for(&server));
    let err = directory
        .get_repository(ORG, "hw1-alice")
        .await
        .expect_err("credentials are bad");

    assert!(matches!(err, ClassmarkError::DirectoryAccess { .. }));
}

#[tokio::test]
async fn create_issue_returns_issue_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/repos/{ORG}/hw1-alice/issues")))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(issue_json("hw1-alice", 12, "[FEEDBACK]", "Nice work")),
        )
        .mount(&server)
        .await;

    let directory = GitHubDirectory::new(client_for(&server));
    let url = directory
        .create_issue(ORG, "hw1-alice", "[FEEDBACK]", "Nice work")
        .await
        .expect("issue creation should succeed");

    assert_eq!(
        url,
        format!("https://github.com/{ORG}/hw1-alice/issues/12")
    );
}

#[tokio::test]
async fn create_issue_surfaces_unsupported_repository() {
    let server = MockServer::start().await;

    // Repositories with issues disabled return 410 Gone.
    Mock::given(method("POST"))
        .and(path(format!("/repos/{ORG}/hw1-fork/issues")))
        .respond_with(ResponseTemplate::new(410).set_body_json(json!({
            "message": "Issues are disabled for this repo",
            "documentation_url": "https://docs.github.com/rest/issues/issues#create-an-issue",
        })))
        .mount(&server)
        .await;

    let directory = GitHubDirectory::new(client_for(&server));
    let err = directory
        .create_issue(ORG, "hw1-fork", "[FEEDBACK]", "text")
        .await
        .expect_err("issues are disabled");

    assert!(matches!(err, ClassmarkError::DirectoryAccess { .. }));
}
