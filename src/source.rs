// SPDX-License-Identifier: MPL-2.0
//! Where static site resources come from.
//!
//! Locale dictionaries and component partials are addressed by a relative
//! path (`locales/en.json`, `components/header.html`). A [`SiteSource`]
//! turns such a path into bytes:
//!
//! - [`DirectorySource`] reads below a directory on disk
//! - [`HttpSource`] requests below a base URL
//! - [`EmbeddedSource`] serves the resources compiled into the binary

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::future::Future;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

#[derive(RustEmbed)]
#[folder = "assets/site/"]
struct Asset;

/// A read-only provider of site resources.
pub trait SiteSource: Send + Sync {
    /// Fetches the resource at `path`, relative to the site root.
    fn fetch(&self, path: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;

    /// Human-readable location used in log messages.
    fn describe(&self) -> String;
}

/// Resources below a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(Error::Io(format!("path escapes site root: {path}")));
        }
        Ok(self.root.join(relative))
    }
}

impl SiteSource for DirectorySource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.resolve(path)?;
        debug!(path = %full.display(), "reading site resource");
        Ok(tokio::fs::read(&full).await?)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Resources below an HTTP(S) base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Uses a preconfigured client, e.g. one with a proxy or timeouts.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl SiteSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url_for(path);
        debug!(%url, "requesting site resource");
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "HTTP status {} for {url}",
                response.status()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Resources bundled into the binary from `assets/site/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Relative paths of every embedded resource.
    pub fn paths() -> Vec<String> {
        Asset::iter().map(|p| p.into_owned()).collect()
    }
}

impl SiteSource for EmbeddedSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        Asset::get(path.trim_start_matches('/'))
            .map(|file| file.data.into_owned())
            .ok_or_else(|| Error::Io(format!("{path} is not embedded")))
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

/// Runtime choice between the adapters, as selected by `site.toml`.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Directory(DirectorySource),
    Http(HttpSource),
    Embedded(EmbeddedSource),
}

impl SiteSource for ConfiguredSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        match self {
            ConfiguredSource::Directory(source) => source.fetch(path).await,
            ConfiguredSource::Http(source) => source.fetch(path).await,
            ConfiguredSource::Embedded(source) => source.fetch(path).await,
        }
    }

    fn describe(&self) -> String {
        match self {
            ConfiguredSource::Directory(source) => source.describe(),
            ConfiguredSource::Http(source) => source.describe(),
            ConfiguredSource::Embedded(source) => source.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn directory_source_reads_relative_paths() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("locales")).unwrap();
        std::fs::write(dir.path().join("locales/en.json"), b"{}").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.fetch("locales/en.json").await.unwrap(), b"{}");
        assert_eq!(source.fetch("/locales/en.json").await.unwrap(), b"{}");
    }

    #[tokio::test]
    async fn directory_source_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let source = DirectorySource::new(dir.path());
        assert!(matches!(
            source.fetch("locales/ru.json").await,
            Err(Error::Io(_))
        ));
    }

    #[tokio::test]
    async fn directory_source_rejects_parent_traversal() {
        let dir = tempdir().expect("failed to create temp dir");
        let source = DirectorySource::new(dir.path());
        let err = source.fetch("../secret.json").await.unwrap_err();
        assert!(format!("{err}").contains("escapes"));
    }

    #[test]
    fn http_source_joins_without_double_slashes() {
        let source = HttpSource::new("https://example.org/site/");
        assert_eq!(
            source.url_for("/locales/ru.json"),
            "https://example.org/site/locales/ru.json"
        );
    }

    /// Answers exactly one request on a local port with `status` and `body`.
    async fn serve_once(status: &'static str, body: &'static str) -> HttpSource {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind local port");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = vec![0u8; 4096];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("client builds");
        HttpSource::with_client(format!("http://{addr}/site/"), client)
    }

    #[tokio::test]
    async fn http_source_returns_body_on_success() {
        let source = serve_once("200 OK", r#"{"nav": {"home": "Home"}}"#).await;
        let bytes = source.fetch("locales/en.json").await.expect("200 is success");
        assert_eq!(bytes, br#"{"nav": {"home": "Home"}}"#);
    }

    #[tokio::test]
    async fn http_source_non_success_status_is_network_error() {
        let source = serve_once("404 Not Found", "").await;
        let result = source.fetch("locales/en.json").await;
        match result {
            Err(Error::Network(message)) => assert!(message.contains("404")),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn loader_over_missing_http_locale_reports_failure() {
        let source = serve_once("404 Not Found", "").await;
        let loader = crate::i18n::TranslationLoader::new(source);
        assert!(loader.load(crate::i18n::Language::En).await.is_none());
    }

    #[tokio::test]
    async fn embedded_source_serves_bundled_locales() {
        let paths = EmbeddedSource::paths();
        assert!(paths.iter().any(|p| p == "locales/en.json"));
        assert!(paths.iter().any(|p| p == "locales/ru.json"));

        let bytes = EmbeddedSource.fetch("locales/en.json").await.unwrap();
        assert!(!bytes.is_empty());
    }

    #[tokio::test]
    async fn embedded_source_unknown_path_errors() {
        assert!(EmbeddedSource.fetch("locales/de.json").await.is_err());
    }
}
