use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::mindmap::TaskRecord;

/// Where task records come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSource {
    /// Local JSON file
    File(PathBuf),
    /// JSON document served over HTTP(S)
    Url(Url),
}

impl TaskSource {
    /// `http://` / `https://` strings become URLs, everything else a path.
    pub fn parse(s: &str) -> Result<Self, StoreError> {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s).map_err(|e| StoreError::InvalidUrl {
                url: s.to_string(),
                message: e.to_string(),
            })?;
            Ok(Self::Url(url))
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl std::fmt::Display for TaskSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Url(u) => write!(f, "{}", u),
        }
    }
}

/// Error while reading the task store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed task list from {origin}: {message}")]
    Parse { origin: String, message: String },
    #[error("invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Read the ordered task list from `source` (blocking).
pub fn load_tasks(source: &TaskSource) -> Result<Vec<TaskRecord>, StoreError> {
    match source {
        TaskSource::File(path) => load_tasks_from_file(path),
        TaskSource::Url(url) => fetch_tasks(url),
    }
}

pub fn load_tasks_from_file(path: &Path) -> Result<Vec<TaskRecord>, StoreError> {
    let body = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let tasks = parse_tasks(&body, &path.display().to_string())?;
    log::info!("Loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

fn client_builder() -> reqwest::blocking::ClientBuilder {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("planet-mindmap/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(15))
        .redirect(reqwest::redirect::Policy::limited(10))
}

/// Fetch the task list over HTTP.
pub fn fetch_tasks(url: &Url) -> Result<Vec<TaskRecord>, StoreError> {
    let client = client_builder().build()?;
    fetch_tasks_with(&client, url)
}

fn fetch_tasks_with(
    client: &reqwest::blocking::Client,
    url: &Url,
) -> Result<Vec<TaskRecord>, StoreError> {
    let response = client
        .get(url.as_str())
        .header("Accept", "application/json")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text()?;
    let tasks = parse_tasks(&body, url.as_str())?;
    log::info!("Fetched {} tasks from {}", tasks.len(), url);
    Ok(tasks)
}

/// Parse a JSON array of task records, keeping document order.
pub fn parse_tasks(body: &str, origin: &str) -> Result<Vec<TaskRecord>, StoreError> {
    serde_json::from_str(body).map_err(|e| StoreError::Parse {
        origin: origin.to_string(),
        message: e.to_string(),
    })
}
