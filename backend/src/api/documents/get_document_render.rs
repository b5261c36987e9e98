//! Delegates document rendering to the external conversion service.
//!
//! The service receives the raw document bytes and answers with one HTML
//! fragment per page plus shared stylesheets (see
//! `common::document_render`). Parsing and layout are entirely its
//! concern; this module only moves bytes, decodes the response and caches
//! it so page flips do not re-upload the whole document.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use common::document_render::{DocumentInfo, RenderedDocument};
use reqwest::Body;
use tokio::sync::Mutex;

use crate::api::documents::get_document_content::get_document_content_stream;

const RENDER_CACHE_CAPACITY: usize = 16;

/// Rendered documents keyed by file reference, bounded by dropping the
/// oldest entry. Conversion is by far the most expensive step, so one
/// document is converted once and every page is served from the cached
/// result.
#[derive(Default)]
pub struct RenderCache {
    entries: Mutex<CacheState>,
}

#[derive(Default)]
struct CacheState {
    order: VecDeque<String>,
    rendered: HashMap<String, Arc<RenderedDocument>>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, file: &str) -> Option<Arc<RenderedDocument>> {
        self.entries.lock().await.rendered.get(file).cloned()
    }

    pub async fn insert(&self, file: String, rendered: Arc<RenderedDocument>) {
        let mut state = self.entries.lock().await;
        if state.rendered.insert(file.clone(), rendered).is_none() {
            state.order.push_back(file);
        }
        while state.order.len() > RENDER_CACHE_CAPACITY {
            if let Some(oldest) = state.order.pop_front() {
                state.rendered.remove(&oldest);
            }
        }
    }
}

fn render_cache() -> &'static RenderCache {
    static CACHE: OnceLock<RenderCache> = OnceLock::new();
    CACHE.get_or_init(RenderCache::new)
}

pub async fn get_document_info(file: String) -> anyhow::Result<DocumentInfo> {
    let rendered = get_document_render(file).await?;
    Ok(rendered.document_info())
}

pub async fn get_page_html(file: String, page_number: u32) -> anyhow::Result<String> {
    let rendered = get_document_render(file).await?;
    rendered
        .page_html(page_number)
        .with_context(|| format!("Page {} is out of range (document has {} pages)", page_number, rendered.pages.len()))
}

pub async fn get_document_render(file: String) -> anyhow::Result<Arc<RenderedDocument>> {
    let cache = render_cache();
    if let Some(rendered) = cache.get(&file).await {
        return Ok(rendered);
    }
    let rendered = Arc::new(render_document(&file).await?);
    cache.insert(file, rendered.clone()).await;
    Ok(rendered)
}

async fn render_document(file: &str) -> anyhow::Result<RenderedDocument> {
    let (stream_size, doc_stream) = get_document_content_stream(file).await?;
    tracing::info!("Document stream received ({} bytes), rendering", stream_size);

    let endpoint = std::env::var("DOC_RENDER_ENDPOINT").context("DOC_RENDER_ENDPOINT is not set")?;
    let client = reqwest::Client::new();
    let response = client
        .post(endpoint)
        .body(Body::wrap_stream(doc_stream))
        .header("Content-Length", format!("{}", stream_size))
        .send()
        .await?;
    let response = response.error_for_status()?;
    let body = response.text().await?;
    let rendered = serde_json::from_str::<RenderedDocument>(&body)?;
    tracing::info!("Rendered document has {} pages", rendered.pages.len());
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_stub(tag: &str) -> Arc<RenderedDocument> {
        Arc::new(RenderedDocument {
            pages: vec![format!("<div>{}</div>", tag)],
            styles: vec![],
            page_width_px: 100.0,
            page_height_px: 200.0,
        })
    }

    #[tokio::test]
    async fn cached_documents_are_served_back() {
        let cache = RenderCache::new();
        assert!(cache.get("a.pdf").await.is_none());
        cache.insert("a.pdf".to_string(), rendered_stub("a")).await;
        let hit = cache.get("a.pdf").await.unwrap();
        assert_eq!(hit.pages[0], "<div>a</div>");
    }

    #[tokio::test]
    async fn reinserting_a_document_replaces_the_entry() {
        let cache = RenderCache::new();
        cache.insert("a.pdf".to_string(), rendered_stub("old")).await;
        cache.insert("a.pdf".to_string(), rendered_stub("new")).await;
        let hit = cache.get("a.pdf").await.unwrap();
        assert_eq!(hit.pages[0], "<div>new</div>");
    }

    #[tokio::test]
    async fn oldest_entry_is_evicted_at_capacity() {
        let cache = RenderCache::new();
        for i in 0..=RENDER_CACHE_CAPACITY {
            let file = format!("doc-{}.pdf", i);
            cache.insert(file, rendered_stub("x")).await;
        }
        assert!(cache.get("doc-0.pdf").await.is_none());
        assert!(cache.get("doc-1.pdf").await.is_some());
        let newest = format!("doc-{}.pdf", RENDER_CACHE_CAPACITY);
        assert!(cache.get(&newest).await.is_some());
    }
}
