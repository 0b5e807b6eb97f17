//! HTML → PDF conversion behind a pluggable backend trait.
//!
//! The default backend ships the assembled document to a Gotenberg-style
//! Chromium converter over HTTP; swapping converters means implementing
//! `PdfBackend`, nothing upstream changes.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("converter request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("converter returned status {status}: {message}")]
    Converter { status: u16, message: String },
}

#[async_trait]
pub trait PdfBackend: Send + Sync {
    async fn html_to_pdf(&self, html: &str) -> Result<Bytes, RenderError>;
}

/// Gotenberg Chromium conversion route.
const CONVERT_PATH: &str = "/forms/chromium/convert/html";

pub struct GotenbergBackend {
    base_url: String,
    client: reqwest::Client,
}

impl GotenbergBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PdfBackend for GotenbergBackend {
    async fn html_to_pdf(&self, html: &str) -> Result<Bytes, RenderError> {
        let url = format!("{}{CONVERT_PATH}", self.base_url);
        debug!("Converting {} bytes of HTML via {url}", html.len());

        // The converter expects the document as a file part named index.html
        let part = Part::text(html.to_string())
            .file_name("index.html")
            .mime_str("text/html")?;
        let form = Form::new().part("files", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("PDF conversion failed ({status}): {message}");
            return Err(RenderError::Converter {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?)
    }
}

/// Wraps an assembled body fragment into a standalone HTML document with the
/// stylesheet inlined, ready for conversion or direct serving.
pub fn wrap_document(title: &str, body: &str, css: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{css}\n</style>\n</head>\n\
         <body>\n{body}\n</body>\n</html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_document_inlines_css() {
        let html = wrap_document("Ada Lovelace", "<p>hi</p>", "body { margin: 0; }");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ada Lovelace</title>"));
        assert!(html.contains("body { margin: 0; }"));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let backend = GotenbergBackend::new("http://converter:3000/".into());
        assert_eq!(backend.base_url, "http://converter:3000");
    }
}
