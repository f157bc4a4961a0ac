/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a route in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteName {
    /// Root listing of items
    Home,
    /// Login form
    Login,
    /// Detail page of a single item
    ItemDetail,
    /// Form for posting a new item
    PostItem,
}

/// A resolved view, carrying the parameters captured from the path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// Root listing of items
    Home,
    /// Login form
    Login,
    /// Detail page of the item with identifier `id`
    ItemDetail {
        /// Item identifier segment, verbatim
        id: String,
    },
    /// Form for posting a new item
    PostItem,
}

impl View {
    /// The route this view was resolved from
    pub fn name(&self) -> RouteName {
        match self {
            View::Home => RouteName::Home,
            View::Login => RouteName::Login,
            View::ItemDetail { .. } => RouteName::ItemDetail,
            View::PostItem => RouteName::PostItem,
        }
    }

    /// Canonical path that resolves to this view
    pub fn path(&self) -> String {
        match self {
            View::Home => "/".to_string(),
            View::Login => "/login".to_string(),
            View::ItemDetail { id } => format!("/item/{id}"),
            View::PostItem => "/post".to_string(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::ItemDetail { id } => write!(f, "ItemDetail({id})"),
            other => write!(f, "{:?}", other.name()),
        }
    }
}

/// A path pattern and the route it leads to.
///
/// Patterns are `/`-separated; a segment starting with `:` captures exactly one
/// non-empty path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    /// Path pattern
    pub pattern: &'static str,
    /// Route reached through the pattern
    pub name: RouteName,
}

/// The route table, matched in order
pub const ROUTES: [RouteRecord; 4] = [
    RouteRecord {
        pattern: "/",
        name: RouteName::Home,
    },
    RouteRecord {
        pattern: "/login",
        name: RouteName::Login,
    },
    RouteRecord {
        pattern: "/item/:id",
        name: RouteName::ItemDetail,
    },
    RouteRecord {
        pattern: "/post",
        name: RouteName::PostItem,
    },
];

/// Returns the route table
pub fn routes() -> &'static [RouteRecord] {
    &ROUTES
}

/// Resolves a navigated path to its view.
///
/// Query string and fragment are ignored, one trailing slash is tolerated and
/// literal segments compare case-insensitively. Returns `None` when no route
/// matches.
pub fn resolve(path: &str) -> Option<View> {
    let segments = path_segments(path)?;
    ROUTES.iter().find_map(|route| route.capture(&segments))
}

impl RouteRecord {
    /// Matches an already split path against this pattern
    fn capture(&self, segments: &[&str]) -> Option<View> {
        let pattern = path_segments(self.pattern)?;
        if pattern.len() != segments.len() {
            return None;
        }

        let mut params: Vec<(&str, &str)> = Vec::new();
        for (expected, actual) in pattern.iter().zip(segments) {
            match expected.strip_prefix(':') {
                Some(_) if actual.is_empty() => return None,
                Some(param) => params.push((param, *actual)),
                None if expected.eq_ignore_ascii_case(actual) => {}
                None => return None,
            }
        }
        self.name.view(&params)
    }

    /// Whether `path` resolves through this record
    pub fn matches(&self, path: &str) -> bool {
        path_segments(path).is_some_and(|segments| self.capture(&segments).is_some())
    }
}

impl RouteName {
    fn view(self, params: &[(&str, &str)]) -> Option<View> {
        let param = |name: &str| {
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        };

        Some(match self {
            RouteName::Home => View::Home,
            RouteName::Login => View::Login,
            RouteName::ItemDetail => View::ItemDetail { id: param("id")? },
            RouteName::PostItem => View::PostItem,
        })
    }
}

/// Splits an absolute path into segments, dropping query, fragment and one trailing slash
fn path_segments(path: &str) -> Option<Vec<&str>> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let rest = path.strip_prefix('/')?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() {
        return Some(Vec::new());
    }
    Some(rest.split('/').collect())
}
