//! GitHub project feed: list the user's repositories, probe each one for a
//! root-level cover image, and map the results into display records.
//!
//! The mapping layer is pure and feeds the ssr-only fetch path; failures
//! degrade (empty feed, fallback image) instead of reaching the UI.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::{GITHUB_API_URL, GITHUB_USERNAME};

/// Feed results keyed by `limit:sort`, the same resource-cache shape the
/// browser uses to avoid refetching on back-navigation.
pub static GLOBAL_FEED_CACHE: LazyLock<DashMap<String, Vec<Project>>> = LazyLock::new(DashMap::new);

pub fn feed_cache_key(limit: u8, sort: RepoSort) -> String {
    format!("{limit}:{}", sort.api_key())
}

/// One repository as returned by `GET /users/{user}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub homepage: Option<String>,
    pub html_url: String,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub fork: bool,
}

/// One entry of `GET /repos/{user}/{repo}/contents`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    Created,
    #[default]
    Updated,
    Pushed,
    FullName,
    Stars,
}

impl RepoSort {
    /// The value passed to the list endpoint. The API has no star sort;
    /// `Stars` fetches by update recency and sorts locally.
    pub fn api_key(self) -> &'static str {
        match self {
            RepoSort::Created => "created",
            RepoSort::Updated | RepoSort::Stars => "updated",
            RepoSort::Pushed => "pushed",
            RepoSort::FullName => "full_name",
        }
    }
}

/// Display-ready record consumed by the projects grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub short_description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub live_url: Option<String>,
    pub code_url: String,
    pub stars: u32,
    pub forks: u32,
    pub updated_at: DateTime<Utc>,
    pub language: Option<String>,
    pub is_fork: bool,
}

/// Social-preview image used when a repository has no root-level PNG.
pub fn fallback_image_url(username: &str, repo: &str) -> String {
    format!("https://opengraph.githubassets.com/1/{username}/{repo}")
}

/// First root-level PNG file with a raw download URL, if any.
pub fn root_cover_image(entries: &[ContentEntry]) -> Option<String> {
    entries
        .iter()
        .find(|e| e.kind == "file" && e.name.to_lowercase().ends_with(".png"))
        .and_then(|e| e.download_url.clone())
}

/// Primary language (lowercased) plus up to three topics.
pub fn project_tags(language: Option<&str>, topics: &[String]) -> Vec<String> {
    language
        .map(|l| l.to_lowercase())
        .into_iter()
        .chain(topics.iter().take(3).cloned())
        .collect()
}

impl Project {
    pub fn from_repo(repo: RepoSummary, cover: Option<String>, username: &str) -> Self {
        let image = cover.unwrap_or_else(|| fallback_image_url(username, &repo.name));
        let tags = project_tags(repo.language.as_deref(), &repo.topics);
        Self {
            id: repo.id,
            title: repo.name,
            short_description: repo
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "No description available".to_string()),
            image,
            tags,
            featured: repo.stargazers_count > 0,
            live_url: repo.homepage.filter(|h| !h.is_empty()),
            code_url: repo.html_url,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated_at: repo.updated_at,
            language: repo.language,
            is_fork: repo.fork,
        }
    }
}

/// Assemble the feed from fetched repositories and their resolved covers.
/// A star sort is applied here since the list endpoint cannot.
pub fn build_feed(
    fetched: Vec<(RepoSummary, Option<String>)>,
    sort: RepoSort,
    username: &str,
) -> Vec<Project> {
    let mut projects: Vec<Project> = fetched
        .into_iter()
        .map(|(repo, cover)| Project::from_repo(repo, cover, username))
        .collect();
    if sort == RepoSort::Stars {
        projects.sort_by(|a, b| b.stars.cmp(&a.stars).then_with(|| a.title.cmp(&b.title)));
    }
    projects
}

#[cfg(feature = "ssr")]
pub use fetch::fetch_projects;

#[cfg(feature = "ssr")]
mod fetch {
    use super::*;
    use reqwest::header::ACCEPT;
    use thiserror::Error;

    const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

    #[derive(Error, Debug)]
    pub enum FeedError {
        #[error("GitHub API returned {0}")]
        Status(reqwest::StatusCode),
        #[error(transparent)]
        Http(#[from] reqwest::Error),
    }

    /// Fetch the project feed. Never fails toward the caller: any error in
    /// the list request logs and yields an empty feed, a failed cover probe
    /// degrades to the fallback image.
    pub async fn fetch_projects(limit: u8, sort: RepoSort) -> Vec<Project> {
        match try_fetch_projects(limit, sort).await {
            Ok(projects) => projects,
            Err(err) => {
                log::error!("failed to fetch GitHub project feed: {err}");
                Vec::new()
            }
        }
    }

    async fn try_fetch_projects(limit: u8, sort: RepoSort) -> Result<Vec<Project>, FeedError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("portfolio-site/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let url = format!(
            "{GITHUB_API_URL}/users/{GITHUB_USERNAME}/repos?sort={}&per_page={limit}&type=all",
            sort.api_key()
        );
        let response = client
            .get(&url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }
        let repos: Vec<RepoSummary> = response.json().await?;

        // Unbounded fan-out: every probe settles (cover or fallback) before
        // the feed is returned.
        let probes = repos.into_iter().map(|repo| {
            let client = client.clone();
            async move {
                let cover = probe_cover(&client, &repo.name).await;
                (repo, cover)
            }
        });
        let fetched = futures::future::join_all(probes).await;
        Ok(build_feed(fetched, sort, GITHUB_USERNAME))
    }

    /// Contents lookup for a root-level PNG; any failure means "no cover".
    async fn probe_cover(client: &reqwest::Client, repo: &str) -> Option<String> {
        let url = format!("{GITHUB_API_URL}/repos/{GITHUB_USERNAME}/{repo}/contents");
        let response = client
            .get(&url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await
            .ok()?;
        if !response.status().is_success() {
            return None;
        }
        let entries: Vec<ContentEntry> = response.json().await.ok()?;
        root_cover_image(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u32) -> RepoSummary {
        RepoSummary {
            id: 1,
            name: name.to_string(),
            description: Some("A demo".to_string()),
            language: Some("Rust".to_string()),
            topics: vec![],
            stargazers_count: stars,
            forks_count: 0,
            homepage: None,
            html_url: format!("https://github.com/user/{name}"),
            updated_at: Utc::now(),
            fork: false,
        }
    }

    #[test]
    fn empty_feed_builds_to_empty() {
        assert!(build_feed(vec![], RepoSort::Updated, "user").is_empty());
        assert!(build_feed(vec![], RepoSort::Stars, "user").is_empty());
    }

    #[test]
    fn fallback_image_matches_opengraph_pattern() {
        assert_eq!(
            fallback_image_url("user", "demo-repo"),
            "https://opengraph.githubassets.com/1/user/demo-repo"
        );
    }

    #[test]
    fn missing_cover_falls_back_to_opengraph() {
        let project = Project::from_repo(repo("demo", 0), None, "user");
        assert_eq!(project.image, fallback_image_url("user", "demo"));

        let project = Project::from_repo(
            repo("demo", 0),
            Some("https://raw.example/cover.png".to_string()),
            "user",
        );
        assert_eq!(project.image, "https://raw.example/cover.png");
    }

    #[test]
    fn cover_lookup_wants_a_root_png_file() {
        let entries = vec![
            ContentEntry {
                name: "assets".to_string(),
                kind: "dir".to_string(),
                download_url: None,
            },
            ContentEntry {
                name: "README.md".to_string(),
                kind: "file".to_string(),
                download_url: Some("https://raw.example/README.md".to_string()),
            },
            ContentEntry {
                name: "Cover.PNG".to_string(),
                kind: "file".to_string(),
                download_url: Some("https://raw.example/Cover.PNG".to_string()),
            },
        ];
        assert_eq!(
            root_cover_image(&entries),
            Some("https://raw.example/Cover.PNG".to_string())
        );
        assert_eq!(root_cover_image(&entries[..2]), None);
        assert_eq!(root_cover_image(&[]), None);
    }

    #[test]
    fn tags_are_language_plus_three_topics() {
        let topics = vec![
            "web".to_string(),
            "wasm".to_string(),
            "ui".to_string(),
            "extra".to_string(),
        ];
        assert_eq!(
            project_tags(Some("Rust"), &topics),
            vec!["rust", "web", "wasm", "ui"]
        );
        assert_eq!(project_tags(None, &topics[..1]), vec!["web"]);
    }

    #[test]
    fn display_record_fallbacks() {
        let mut source = repo("demo", 2);
        source.description = None;
        source.homepage = Some(String::new());
        let project = Project::from_repo(source, None, "user");
        assert_eq!(project.short_description, "No description available");
        assert_eq!(project.live_url, None);
        assert!(project.featured);

        let unstarred = Project::from_repo(repo("demo", 0), None, "user");
        assert!(!unstarred.featured);
    }

    #[test]
    fn star_sort_is_applied_locally() {
        let feed = build_feed(
            vec![
                (repo("low", 1), None),
                (repo("high", 9), None),
                (repo("mid", 4), None),
            ],
            RepoSort::Stars,
            "user",
        );
        let titles: Vec<&str> = feed.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "mid", "low"]);
        assert_eq!(RepoSort::Stars.api_key(), "updated");
    }

    #[test]
    fn repo_summary_deserializes_from_api_payload() {
        let payload = r#"{
            "id": 42,
            "name": "demo",
            "description": null,
            "language": "Rust",
            "topics": ["web"],
            "stargazers_count": 3,
            "forks_count": 1,
            "homepage": "https://demo.example",
            "html_url": "https://github.com/user/demo",
            "updated_at": "2025-06-01T12:00:00Z",
            "fork": false,
            "default_branch": "main"
        }"#;
        let repo: RepoSummary = serde_json::from_str(payload).unwrap();
        assert_eq!(repo.name, "demo");
        assert_eq!(repo.stargazers_count, 3);
        assert_eq!(repo.topics, vec!["web"]);
        assert!(repo.description.is_none());
    }
}
