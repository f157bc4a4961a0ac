/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::router::route::{self, View};
use tracing::{debug, warn};

/// An entry of the navigation history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path as navigated, including any query string
    pub path: String,
    /// View the path resolved to
    pub view: View,
}

/// Router backed by a browser-style history stack.
///
/// Every entry has already been resolved, so the current view is always known.
/// Navigating to a path no route matches fails and leaves the history untouched.
#[derive(Debug, Clone)]
pub struct Router {
    entries: Vec<Location>,
    position: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Creates a router positioned at the root listing
    pub fn new() -> Self {
        Self {
            entries: vec![Location {
                path: "/".to_string(),
                view: View::Home,
            }],
            position: 0,
        }
    }

    /// Creates a router whose first entry is `path`
    pub fn with_initial_path(path: &str) -> Result<Self, AppError> {
        let location = Self::locate(path)?;
        Ok(Self {
            entries: vec![location],
            position: 0,
        })
    }

    /// Resolves `path` without navigating
    pub fn resolve(&self, path: &str) -> Option<View> {
        route::resolve(path)
    }

    /// Navigates to `path`, discarding any forward entries.
    ///
    /// Pushing the current path again does not add an entry.
    pub fn push(&mut self, path: &str) -> Result<View, AppError> {
        if self.current_path() == path {
            debug!("Already at {}", path);
            return Ok(self.current_view().clone());
        }

        let location = Self::locate(path)?;
        let view = location.view.clone();
        self.entries.truncate(self.position + 1);
        self.entries.push(location);
        self.position = self.entries.len() - 1;
        debug!("Navigated to {} ({})", path, view);
        Ok(view)
    }

    /// Replaces the current entry with `path`
    pub fn replace(&mut self, path: &str) -> Result<View, AppError> {
        let location = Self::locate(path)?;
        let view = location.view.clone();
        self.entries[self.position] = location;
        debug!("Replaced current entry with {} ({})", path, view);
        Ok(view)
    }

    /// Moves `delta` entries through the history.
    ///
    /// Returns `None` and stays put when the target is outside the history.
    pub fn go(&mut self, delta: isize) -> Option<View> {
        let target = self.position.checked_add_signed(delta)?;
        let location = self.entries.get(target)?;
        self.position = target;
        debug!("History moved to {} ({})", location.path, location.view);
        Some(location.view.clone())
    }

    /// Goes one entry back
    pub fn back(&mut self) -> Option<View> {
        self.go(-1)
    }

    /// Goes one entry forward
    pub fn forward(&mut self) -> Option<View> {
        self.go(1)
    }

    /// Path of the current entry
    pub fn current_path(&self) -> &str {
        &self.entries[self.position].path
    }

    /// View of the current entry
    pub fn current_view(&self) -> &View {
        &self.entries[self.position].view
    }

    /// Whether there is an entry behind the current one
    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    /// Whether there is an entry ahead of the current one
    pub fn can_go_forward(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    /// Number of entries in the history
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A history always holds at least one entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn locate(path: &str) -> Result<Location, AppError> {
        match route::resolve(path) {
            Some(view) => Ok(Location {
                path: path.to_string(),
                view,
            }),
            None => {
                warn!("No route matches {}", path);
                Err(AppError::RouteNotFound(path.to_string()))
            }
        }
    }
}
