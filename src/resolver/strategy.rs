// src/resolver/strategy.rs
// =============================================================================
// Turns a bare domain ("example.com") into a favicon URL.
//
// For each URL prefix, in order:
// 1. Probe `prefix + domain + /favicon.ico`. A 200 means we are done.
//    (Skipped in DOM-only mode.)
// 2. Download `prefix + domain`, look for a favicon <link> tag and build
//    the URL from its href.
// 3. If either step fails (timeout, refused connection, no tag), move on
//    to the next prefix.
//
// Running out of prefixes is a normal outcome and returns None. Retrying is
// the caller's business (see crawl/retry.rs).
// =============================================================================

use super::fetch::Fetch;
use super::html::find_icon_href;
use crate::config::URL_PREFIXES;
use reqwest::StatusCode;
use tracing::debug;

/// Resolves favicons through an injected fetcher. Holds no other state.
#[derive(Debug, Clone)]
pub struct Resolver<F> {
    fetcher: F,
    dom_only: bool,
}

impl<F: Fetch> Resolver<F> {
    pub fn new(fetcher: F, dom_only: bool) -> Self {
        Self { fetcher, dom_only }
    }

    /// One resolution attempt. `None` means no prefix produced a favicon.
    pub async fn resolve(&self, domain: &str) -> Option<String> {
        for prefix in URL_PREFIXES {
            if !self.dom_only {
                if let Some(url) = self.probe(prefix, domain).await {
                    return Some(url);
                }
            }

            if let Some(url) = self.inspect_page(prefix, domain).await {
                return Some(url);
            }
        }

        None
    }

    // Optimistically asks for /favicon.ico at the site root
    async fn probe(&self, prefix: &str, domain: &str) -> Option<String> {
        let url = format!("{}{}/favicon.ico", prefix, domain);

        match self.fetcher.status(&url).await {
            Ok(StatusCode::OK) => Some(url),
            Ok(status) => {
                debug!(url = %url, status = status.as_u16(), "favicon probe missed");
                None
            }
            Err(e) => {
                debug!(url = %url, error = %e, "failed to connect");
                None
            }
        }
    }

    // Falls back to reading the homepage markup
    async fn inspect_page(&self, prefix: &str, domain: &str) -> Option<String> {
        let url = format!("{}{}", prefix, domain);

        let body = match self.fetcher.page(&url).await {
            Ok(body) => body,
            Err(e) => {
                debug!(url = %url, error = %e, "failed to connect");
                return None;
            }
        };

        match find_icon_href(&body) {
            Some(href) => Some(absolutize(prefix, domain, &href)),
            None => {
                debug!(url = %url, "no favicon link in page");
                None
            }
        }
    }
}

/// Builds the final favicon URL from a link tag's href.
///
/// Anything mentioning `http`, `www.` or `.com` is taken to be absolute
/// already and returned as is. Everything else is glued onto
/// `prefix + domain` with no normalization, so `favicon.png` (no leading
/// slash) yields `https://example.comfavicon.png`.
pub fn absolutize(prefix: &str, domain: &str, href: &str) -> String {
    if looks_absolute(href) {
        href.to_string()
    } else {
        format!("{}{}{}", prefix, domain, href)
    }
}

fn looks_absolute(href: &str) -> bool {
    href.contains("http") || href.contains("www.") || href.contains(".com")
}
