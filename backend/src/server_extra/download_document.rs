//! Streaming download endpoint for source documents.
//!
//! Routed as `/_download_document/{document}/{filename}` where `document`
//! is the url-safe base64 encoding of the opaque file reference and
//! `filename` is the encoding of the name suggested to the browser. Both
//! segments are encoded so titles with slashes or query characters can
//! never change the route shape.

use anyhow::Context;
use axum::body::Body;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use common::viewer_const::DEFAULT_DOWNLOAD_FILENAME;

use crate::api::documents::get_document_content::get_document_content_stream;

/// Decodes one url-safe base64 path segment of a download URL.
pub fn decode_path_segment(encoded: &str) -> anyhow::Result<String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded.as_bytes())
        .context("Path segment is not valid base64")?;
    String::from_utf8(bytes).context("Path segment is not valid UTF-8")
}

/// Strips characters that would corrupt the Content-Disposition header.
pub fn sanitize_filename(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    if cleaned.trim().is_empty() {
        DEFAULT_DOWNLOAD_FILENAME.to_string()
    } else {
        cleaned
    }
}

async fn _download_document(document: String, filename: String) -> anyhow::Result<Response> {
    let file = decode_path_segment(&document)?;
    // A mangled filename segment is not worth failing the download over.
    let filename =
        decode_path_segment(&filename).unwrap_or_else(|_| DEFAULT_DOWNLOAD_FILENAME.to_string());
    tracing::info!("Downloading document: {} as {:?}", file, filename);

    let (size, stream) = get_document_content_stream(&file).await?;
    let headers: [(String, String); 3] = [
        ("Content-Type".to_string(), "application/octet-stream".to_string()),
        ("Content-Length".to_string(), format!("{}", size)),
        (
            "Content-Disposition".to_string(),
            format!("attachment; filename=\"{}\"", sanitize_filename(&filename)),
        ),
    ];
    let body = Body::from_stream(stream);
    Ok((headers, body).into_response())
}

pub async fn download_document(Path((document, filename)): Path<(String, String)>) -> Response {
    match _download_document(document, filename).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("download_document: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_round_trip_through_base64() {
        for value in ["reports/2026/q3 final.pdf", "A/B test #3?.pdf"] {
            let encoded = URL_SAFE_NO_PAD.encode(value.as_bytes());
            assert!(!encoded.contains('/'));
            assert_eq!(decode_path_segment(&encoded).unwrap(), value);
        }
    }

    #[test]
    fn path_segments_reject_garbage() {
        assert!(decode_path_segment("not base64!!").is_err());
    }

    #[test]
    fn filenames_lose_header_breaking_characters() {
        assert_eq!(sanitize_filename("report.pdf"), "report.pdf");
        assert_eq!(sanitize_filename("re\"port\n.pdf"), "report.pdf");
        assert_eq!(sanitize_filename("\n\""), DEFAULT_DOWNLOAD_FILENAME);
    }
}
