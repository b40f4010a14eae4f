// src/resolver/mod.rs
// =============================================================================
// This module contains all favicon lookup logic.
//
// Submodules:
// - fetch: the Fetch trait and the reqwest-backed HttpFetcher
// - html: finds the favicon <link> tag in a page
// - strategy: the ordered prefix / probe / DOM fallback algorithm
// =============================================================================

mod fetch;
mod html;
mod strategy;

pub use fetch::{Fetch, HttpFetcher};
pub use strategy::Resolver;

#[cfg(test)]
pub use fetch::MockFetch;
