//! # Routes
//!
//! Atlas has two screens and addresses them with paths:
//!
//! ```text
//! /                      → Route::List
//! /country/{name}        → Route::Detail(name)   (name percent-encoded)
//! ```
//!
//! The detail screen reads nothing but the name segment.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters left alone in a path segment (RFC 3986 unreserved).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const DETAIL_PREFIX: &str = "/country/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(name) => {
                format!("{DETAIL_PREFIX}{}", utf8_percent_encode(name, SEGMENT))
            }
        }
    }

    /// Parses a path back into a route. Unknown paths and empty names are `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Some(Route::List);
        }
        let segment = path.strip_prefix(DETAIL_PREFIX)?.trim_end_matches('/');
        if segment.is_empty() || segment.contains('/') {
            return None;
        }
        let name = percent_decode_str(segment).decode_utf8().ok()?;
        Some(Route::Detail(name.into_owned()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
