//! Live [`ProfileSource`] backed by the GitHub GraphQL API.

use crate::config::GithubConfig;
use crate::error::FetchError;
use crate::profile::{ProfileSource, ProfileStats};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const PROFILE_QUERY: &str = r#"
query userInfo($login: String!) {
  user(login: $login) {
    name
    login
    avatarUrl
    followers { totalCount }
    repositories(first: 100, ownerAffiliations: OWNER, orderBy: {direction: DESC, field: STARGAZERS}) {
      totalCount
      nodes { stargazers { totalCount } }
    }
    contributionsCollection {
      contributionCalendar { totalContributions }
    }
  }
}
"#;

pub struct GithubClient {
    client: reqwest::Client,
    graphql_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>, config: &GithubConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            graphql_url: config.graphql_url.clone(),
            token: token.into(),
        })
    }

    /// Reads the token from the environment variable named in the config.
    pub fn from_env(config: &GithubConfig) -> Result<Self, FetchError> {
        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| FetchError::MissingToken(config.token_env.clone()))?;
        Self::new(token, config)
    }
}

impl ProfileSource for GithubClient {
    async fn fetch_profile(&self, username: &str) -> Result<ProfileStats, FetchError> {
        let body = json!({
            "query": PROFILE_QUERY,
            "variables": { "login": username },
        });
        let response = self
            .client
            .post(&self.graphql_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.graphql_url.clone(),
            });
        }
        let parsed: GraphqlResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        if let Some(error) = parsed.errors.and_then(|errors| errors.into_iter().next()) {
            return Err(FetchError::Decode(error.message));
        }
        let user = parsed
            .data
            .and_then(|data| data.user)
            .ok_or_else(|| FetchError::MissingUser(username.to_string()))?;
        Ok(user.into_stats())
    }

    async fn fetch_avatar(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<GraphqlData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    user: Option<GithubUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GithubUser {
    name: Option<String>,
    login: String,
    avatar_url: String,
    followers: TotalCount,
    repositories: Repositories,
    contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TotalCount {
    total_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Repositories {
    total_count: u64,
    #[serde(default)]
    nodes: Vec<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    stargazers: TotalCount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionCalendar {
    total_contributions: u64,
}

impl GithubUser {
    fn into_stats(self) -> ProfileStats {
        let stars = self
            .repositories
            .nodes
            .iter()
            .map(|repo| repo.stargazers.total_count)
            .sum();
        ProfileStats {
            login: self.login,
            name: self.name,
            avatar_url: self.avatar_url,
            followers: self.followers.total_count,
            repositories: self.repositories.total_count,
            stars,
            contributions: self.contributions_collection.contribution_calendar.total_contributions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_graphql_payload_and_sums_stars() {
        let payload = r#"{
            "data": {
                "user": {
                    "name": null,
                    "login": "octocat",
                    "avatarUrl": "https://avatars.example/u/1",
                    "followers": {"totalCount": 12},
                    "repositories": {
                        "totalCount": 3,
                        "nodes": [
                            {"stargazers": {"totalCount": 5}},
                            {"stargazers": {"totalCount": 0}},
                            {"stargazers": {"totalCount": 37}}
                        ]
                    },
                    "contributionsCollection": {
                        "contributionCalendar": {"totalContributions": 811}
                    }
                }
            }
        }"#;
        let parsed: GraphqlResponse = serde_json::from_str(payload).unwrap();
        let stats = parsed.data.unwrap().user.unwrap().into_stats();
        assert_eq!(stats.login, "octocat");
        assert_eq!(stats.name, None);
        assert_eq!(stats.stars, 42);
        assert_eq!(stats.repositories, 3);
        assert_eq!(stats.contributions, 811);
    }

    #[test]
    fn missing_token_is_reported() {
        let config = GithubConfig {
            token_env: "SKILLSVG_TEST_TOKEN_THAT_IS_NOT_SET".to_string(),
            ..GithubConfig::default()
        };
        assert!(matches!(
            GithubClient::from_env(&config),
            Err(FetchError::MissingToken(_))
        ));
    }
}
