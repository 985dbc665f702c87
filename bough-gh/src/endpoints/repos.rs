//! # GitHub Repository Endpoints

use tracing::{debug, instrument};

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::models::GitHubRepository;

impl GitHubClient {
  /// Get repository metadata, including its declared default branch
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<GitHubRepository, GitHubError> {
    let url = format!("{}/repos/{}/{}", self.base_url, owner, repo);
    let repository: GitHubRepository = self.get_json(&url).await?;

    debug!("Default branch of {}/{} is {}", owner, repo, repository.default_branch);
    Ok(repository)
  }

  /// Name of the repository's default branch
  pub async fn get_default_branch_name(&self, owner: &str, repo: &str) -> Result<String, GitHubError> {
    Ok(self.get_repository(owner, repo).await?.default_branch)
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::{ClientOptions, GitHubClient};
  use crate::error::GitHubError;

  fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new(ClientOptions {
      base_url: server.uri(),
      ..ClientOptions::default()
    })
    .unwrap()
  }

  #[tokio::test]
  async fn test_get_repository() -> Result<(), GitHubError> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/repos/octocat/hello-world"))
      .and(header("Accept", "application/vnd.github.v3+json"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": 1296269,
          "name": "hello-world",
          "full_name": "octocat/hello-world",
          "private": false,
          "default_branch": "trunk",
          "visibility": "public"
      })))
      .mount(&mock_server)
      .await;

    let repository = client.get_repository("octocat", "hello-world").await?;
    assert_eq!(repository.default_branch, "trunk");

    assert_eq!(client.get_default_branch_name("octocat", "hello-world").await?, "trunk");
    Ok(())
  }

  #[tokio::test]
  async fn test_get_repository_server_error() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/repos/octocat/hello-world"))
      .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
      .mount(&mock_server)
      .await;

    let err = client.get_repository("octocat", "hello-world").await.unwrap_err();
    match err {
      GitHubError::Status { status, message } => {
        assert_eq!(status, 503);
        assert_eq!(message, None);
      }
      other => panic!("expected a status error, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn test_get_repository_missing_default_branch() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/repos/octocat/hello-world"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": "hello-world" })))
      .mount(&mock_server)
      .await;

    let err = client.get_default_branch_name("octocat", "hello-world").await.unwrap_err();
    assert!(matches!(err, GitHubError::Decode(_)));
  }
}
