//! Resolves an opaque document reference to a byte stream.
//!
//! A reference is either an http(s) URL, fetched upstream, or a relative
//! path under the configured `DOCUMENTS_ROOT` directory.

use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use tokio_util::io::ReaderStream;

pub type DocumentByteStream = BoxStream<'static, anyhow::Result<Bytes>>;

pub async fn get_document_content_stream(file: &str) -> anyhow::Result<(u64, DocumentByteStream)> {
    if file.starts_with("http://") || file.starts_with("https://") {
        get_url_content_stream(file).await
    } else {
        get_local_content_stream(file).await
    }
}

async fn get_url_content_stream(url: &str) -> anyhow::Result<(u64, DocumentByteStream)> {
    tracing::info!("Fetching document from upstream: {}", url);
    let response = reqwest::get(url).await?.error_for_status()?;
    let size = response
        .content_length()
        .context("Upstream did not report a content length")?;
    let stream = response.bytes_stream().map_err(anyhow::Error::from).boxed();
    Ok((size, stream))
}

async fn get_local_content_stream(file: &str) -> anyhow::Result<(u64, DocumentByteStream)> {
    let root = std::env::var("DOCUMENTS_ROOT").context("DOCUMENTS_ROOT is not set")?;
    let path = resolve_under_root(Path::new(&root), file)?;
    open_file_stream(&path).await
}

async fn open_file_stream(path: &Path) -> anyhow::Result<(u64, DocumentByteStream)> {
    tracing::info!("Reading document from disk: {}", path.display());
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open document: {}", path.display()))?;
    let size = file.metadata().await?.len();
    let stream = ReaderStream::new(file).map_err(anyhow::Error::from).boxed();
    Ok((size, stream))
}

/// Joins a document reference onto the documents root. Absolute paths and
/// parent-directory components are rejected, so references can never
/// escape the root.
pub fn resolve_under_root(root: &Path, file: &str) -> anyhow::Result<PathBuf> {
    if file.is_empty() {
        anyhow::bail!("Empty document reference");
    }
    let relative = Path::new(file);
    let is_plain = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if !is_plain {
        anyhow::bail!("Invalid document reference: {}", file);
    }
    Ok(root.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_relative_references() {
        let path = resolve_under_root(Path::new("/srv/docs"), "reports/q3.pdf").unwrap();
        assert_eq!(path, PathBuf::from("/srv/docs/reports/q3.pdf"));
    }

    #[test]
    fn resolve_rejects_traversal_and_absolute_paths() {
        assert!(resolve_under_root(Path::new("/srv/docs"), "../etc/passwd").is_err());
        assert!(resolve_under_root(Path::new("/srv/docs"), "a/../../b.pdf").is_err());
        assert!(resolve_under_root(Path::new("/srv/docs"), "/etc/passwd").is_err());
        assert!(resolve_under_root(Path::new("/srv/docs"), "").is_err());
    }

    #[tokio::test]
    async fn file_stream_reports_size_and_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.pdf");
        std::fs::write(&path, b"not really a pdf").unwrap();

        let (size, mut stream) = open_file_stream(&path).await.unwrap();
        assert_eq!(size, 16);

        let mut collected = Vec::new();
        while let Some(chunk) = stream.next().await {
            collected.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(collected, b"not really a pdf");
    }
}
