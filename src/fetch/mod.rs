//! Page fetching.
//!
//! Bounded-timeout GETs that turn every transport problem into a
//! `FetchResult::Failure`, plus the `robots.txt` / `sitemap.xml` probes.

mod request;
mod types;

pub use request::{fetch_page, probe_resource};
pub use types::{FetchFailure, FetchResult, FetchedPage};
