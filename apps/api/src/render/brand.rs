//! Logo resolution for report headers. Every failure yields `None`.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::warn;

use crate::models::brand::BrandConfig;

const LOGO_FETCH_TIMEOUT: Duration = Duration::from_secs(3);
const MAX_LOGO_BYTES: usize = 2 * 1024 * 1024;

/// Raw image bytes for the brand logo, if one was supplied and could be obtained.
///
/// Accepts an `http(s)` URL, a `data:` URL, or bare base64. Image decoding happens
/// in the PDF writer, which skips undecodable bytes.
pub async fn resolve_logo(brand: Option<&BrandConfig>, http: &reqwest::Client) -> Option<Vec<u8>> {
    let raw = brand?.logo.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }

    let bytes = if raw.starts_with("http://") || raw.starts_with("https://") {
        fetch(raw, http).await
    } else {
        decode_inline(raw)
    }?;

    if bytes.is_empty() || bytes.len() > MAX_LOGO_BYTES {
        warn!(len = bytes.len(), "logo skipped: size out of range");
        return None;
    }
    Some(bytes)
}

/// Decodes `data:<mime>;base64,<payload>` or a bare base64 payload.
pub fn decode_inline(raw: &str) -> Option<Vec<u8>> {
    let payload = match raw.split_once("base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => raw,
    };
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    match STANDARD.decode(compact) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!(error = %e, "logo skipped: invalid base64");
            None
        }
    }
}

async fn fetch(url: &str, http: &reqwest::Client) -> Option<Vec<u8>> {
    let mut response = match http.get(url).timeout(LOGO_FETCH_TIMEOUT).send().await {
        Ok(r) => r,
        Err(e) => {
            warn!(url, error = %e, "logo skipped: fetch failed");
            return None;
        }
    };
    if !response.status().is_success() {
        warn!(url, status = response.status().as_u16(), "logo skipped: bad status");
        return None;
    }
    if let Some(len) = response.content_length() {
        if len > MAX_LOGO_BYTES as u64 {
            warn!(url, len, "logo skipped: declared size too large");
            return None;
        }
    }

    // Chunked bodies carry no length up front; stop reading past the cap.
    let mut body = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                if body.len() + chunk.len() > MAX_LOGO_BYTES {
                    warn!(url, "logo skipped: body exceeds size cap");
                    return None;
                }
                body.extend_from_slice(&chunk);
            }
            Ok(None) => return Some(body),
            Err(e) => {
                warn!(url, error = %e, "logo skipped: body read failed");
                return None;
            }
        }
    }
}
