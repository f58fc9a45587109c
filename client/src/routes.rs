//! Static route table mapping URL paths to top-level views.
//!
//! DESIGN
//! ======
//! The table is a `const` array built once and never mutated. `App` declares
//! one `leptos_router` `<Route>` per `View` using `View::segment`, so the
//! router only ever matches canonical paths. `resolve` is the lenient lookup:
//! the server's fallback and the client's not-found view both run it through
//! `canonical_redirect` to send non-canonical spellings of a table path to
//! the canonical one.
//!
//! Matching is exact and case-sensitive. A query string, a fragment, and a
//! single trailing slash on non-root paths are ignored, so `/login/?next=/`
//! still selects the login view while `/login/extra` selects nothing.

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

/// Top-level screen selected by the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    Home,
}

impl View {
    /// Every view, in table order.
    pub const ALL: [View; 3] = [View::Login, View::Register, View::Home];

    /// Canonical path for this view.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            View::Login => "/login",
            View::Register => "/register",
            View::Home => "/",
        }
    }

    /// Path without the leading slash, as `leptos_router` segments expect.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            View::Login => "login",
            View::Register => "register",
            View::Home => "",
        }
    }

    /// Stable identifier rendered as the page root's `data-view` attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            View::Login => "login",
            View::Register => "register",
            View::Home => "home",
        }
    }

    /// Document title shown while the view is mounted.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            View::Login => "Sign in",
            View::Register => "Create account",
            View::Home => "Home",
        }
    }
}

/// One path-to-view mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: View,
}

/// The application's route table.
pub const ROUTES: [RouteEntry; 3] = [
    RouteEntry { path: View::Login.path(), view: View::Login },
    RouteEntry { path: View::Register.path(), view: View::Register },
    RouteEntry { path: View::Home.path(), view: View::Home },
];

/// Strip query, fragment, and one trailing slash (except on the root path).
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// Select the view for a navigation path, or `None` when no entry matches.
#[must_use]
pub fn resolve(path: &str) -> Option<View> {
    let path = normalize_path(path);
    ROUTES.iter().find(|entry| entry.path == path).map(|entry| entry.view)
}

/// Canonical path to redirect to when `path` names a table view by a
/// non-canonical spelling (e.g. `/login/`). `None` for canonical paths and
/// for paths outside the table.
#[must_use]
pub fn canonical_redirect(path: &str) -> Option<&'static str> {
    let view = resolve(path)?;
    let end = path.find(['?', '#']).unwrap_or(path.len());
    (&path[..end] != view.path()).then_some(view.path())
}
