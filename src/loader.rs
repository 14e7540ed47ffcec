//! Fetching the three portfolio documents.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::data::{HobbyData, Portfolio, ProfileData, WorkoutData};
use crate::error::{FolioError, Result};

pub const PROFILE_DOCUMENT: &str = "about";
pub const HOBBIES_DOCUMENT: &str = "hobbies";
pub const WORKOUTS_DOCUMENT: &str = "workouts";

/// Somewhere the raw JSON of a named document can be fetched from
#[async_trait]
pub trait DataSource: Send + Sync {
    fn describe(&self) -> String;

    async fn fetch(&self, document: &str) -> Result<String>;
}

/// Reads `<root>/<document>.json`
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DataSource for DirSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch(&self, document: &str) -> Result<String> {
        let path = self.root.join(format!("{document}.json"));
        tracing::debug!(path = %path.display(), "reading document");
        Ok(fs::read_to_string(path).await?)
    }
}

/// GETs `<base_url>/<document>.json`
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch(&self, document: &str) -> Result<String> {
        let url = format!("{}/{document}.json", self.base_url);
        tracing::debug!(url = %url, "fetching document");
        let http_err = |source| FolioError::Http {
            document: document.to_string(),
            source,
        };

        let res = self.client.get(&url).send().await.map_err(http_err)?;
        let status = res.status().as_u16();
        if status >= 400 {
            return Err(FolioError::Status {
                document: document.to_string(),
                status,
            });
        }

        res.text().await.map_err(http_err)
    }
}

async fn fetch_json<T: DeserializeOwned>(source: &dyn DataSource, document: &str) -> Result<T> {
    let raw = source.fetch(document).await?;
    serde_json::from_str(&raw).map_err(|source| FolioError::Parse {
        document: document.to_string(),
        source,
    })
}

/// Fetch all three documents concurrently, failing as soon as one of them does
pub async fn try_load_portfolio(source: &dyn DataSource) -> Result<Portfolio> {
    let (profile, hobbies, workouts) = tokio::try_join!(
        fetch_json::<ProfileData>(source, PROFILE_DOCUMENT),
        fetch_json::<HobbyData>(source, HOBBIES_DOCUMENT),
        fetch_json::<WorkoutData>(source, WORKOUTS_DOCUMENT),
    )?;

    Ok(Portfolio {
        profile,
        hobbies,
        workouts,
    })
}

/// Load the portfolio, substituting empty records for all three documents if any fetch fails
pub async fn load_portfolio(source: &dyn DataSource) -> Portfolio {
    match try_load_portfolio(source).await {
        Ok(portfolio) => {
            tracing::info!(source = %source.describe(), "portfolio data loaded");
            portfolio
        }
        Err(err) => {
            tracing::warn!(source = %source.describe(), error = %err, "loading portfolio data failed, using fallback records");
            Portfolio::default()
        }
    }
}

#[cfg(test)]
mod test {
    use std::fs as std_fs;
    use std::io;

    use super::*;

    struct FailingSource;

    #[async_trait]
    impl DataSource for FailingSource {
        fn describe(&self) -> String {
            "failing".into()
        }

        async fn fetch(&self, _document: &str) -> Result<String> {
            Err(io::Error::new(io::ErrorKind::ConnectionRefused, "offline").into())
        }
    }

    fn write_documents(dir: &std::path::Path, workouts: &str) {
        std_fs::write(
            dir.join("about.json"),
            r#"{ "personalInfo": { "name": "Ada", "location": "Earth" }, "bio": "Hi",
                 "skills": [ { "name": "Rust", "level": 80, "label": "Advanced" } ] }"#,
        )
        .unwrap();
        std_fs::write(
            dir.join("hobbies.json"),
            r#"{ "projects": [ { "title": "Site", "description": "This one", "tags": ["rust"] } ] }"#,
        )
        .unwrap();
        std_fs::write(dir.join("workouts.json"), workouts).unwrap();
    }

    #[tokio::test]
    async fn loads_documents_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_documents(dir.path(), r#"{ "lastUpdated": "2024-01-01" }"#);

        let portfolio = try_load_portfolio(&DirSource::new(dir.path())).await.unwrap();
        assert_eq!(portfolio.profile.personal_info.name, "Ada");
        assert_eq!(portfolio.profile.skills[0].level, 80.0);
        assert_eq!(portfolio.hobbies.projects[0].tags, ["rust"]);
        assert_eq!(portfolio.workouts.last_updated.as_deref(), Some("2024-01-01"));
    }

    #[tokio::test]
    async fn bundled_sample_data_loads() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let portfolio = try_load_portfolio(&DirSource::new(dir)).await.unwrap();
        assert!(!portfolio.profile.personal_info.name.is_empty());
        assert!(!portfolio.hobbies.projects.is_empty());
        assert_eq!(portfolio.workouts.week_stats.len(), 4);
    }

    #[tokio::test]
    async fn one_missing_document_falls_back_for_all() {
        let dir = tempfile::tempdir().unwrap();
        write_documents(dir.path(), "{}");
        std_fs::remove_file(dir.path().join("workouts.json")).unwrap();

        let source = DirSource::new(dir.path());
        assert!(matches!(
            try_load_portfolio(&source).await,
            Err(FolioError::Io(_))
        ));
        assert_eq!(load_portfolio(&source).await, Portfolio::default());
    }

    #[tokio::test]
    async fn malformed_document_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_documents(dir.path(), "{ not json");

        match try_load_portfolio(&DirSource::new(dir.path())).await {
            Err(FolioError::Parse { document, .. }) => assert_eq!(document, WORKOUTS_DOCUMENT),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failing_source_yields_fallback() {
        assert_eq!(load_portfolio(&FailingSource).await, Portfolio::default());
    }

    #[tokio::test]
    async fn http_source_loads_all_documents() {
        let mut server = mockito::Server::new_async().await;
        let mut mocks = Vec::new();
        for (document, body) in [
            (PROFILE_DOCUMENT, r#"{ "bio": "hi" }"#),
            (HOBBIES_DOCUMENT, r#"{ "projects": [ { "title": "Site" } ] }"#),
            (WORKOUTS_DOCUMENT, r#"{ "lastUpdated": "2024-06-01" }"#),
        ] {
            let mock = server
                .mock("GET", format!("/data/{document}.json").as_str())
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create_async()
                .await;
            mocks.push(mock);
        }

        let source = HttpSource::new(format!("{}/data/", server.url()));
        let portfolio = try_load_portfolio(&source).await.unwrap();
        assert_eq!(portfolio.profile.bio, "hi");
        assert_eq!(portfolio.hobbies.projects[0].title, "Site");
        assert_eq!(portfolio.workouts.last_updated.as_deref(), Some("2024-06-01"));
        for mock in mocks {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn http_error_status_is_reported_and_masked() {
        let mut server = mockito::Server::new_async().await;
        let _missing = server
            .mock("GET", "/about.json")
            .with_status(404)
            .create_async()
            .await;

        let source = HttpSource::new(server.url());
        match source.fetch(PROFILE_DOCUMENT).await {
            Err(FolioError::Status { document, status }) => {
                assert_eq!(document, PROFILE_DOCUMENT);
                assert_eq!(status, 404);
            }
            other => panic!("expected status error, got {other:?}"),
        }
        assert_eq!(load_portfolio(&source).await, Portfolio::default());
    }

    #[test]
    fn http_source_trims_trailing_slash() {
        assert_eq!(
            HttpSource::new("http://localhost:8000/data/").describe(),
            "http://localhost:8000/data"
        );
    }
}
