//! Route table: named paths, view handles, and the authentication flag.

use crate::error::RouteError;
use std::collections::HashSet;

/// Path of the login view; the only route that may never be gated.
pub const LOGIN_PATH: &str = "/login";

/// Path of the application root, the landing target after login.
pub const ROOT_PATH: &str = "/";

/// Opaque handle naming the view mounted at a route. Rendering is the
/// embedding shell's business; this crate only hands the identifier back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View(pub &'static str);

/// One declared route, possibly nesting children under its path.
///
/// A `requires_auth` flag on a parent gates every descendant; children
/// cannot opt back out.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    path: String,
    name: String,
    view: View,
    requires_auth: bool,
    children: Vec<RouteEntry>,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
            requires_auth: false,
            children: Vec::new(),
        }
    }

    /// Require an authenticated session for this entry and all children.
    pub fn gated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn with_children(mut self, children: Vec<RouteEntry>) -> Self {
        self.children = children;
        self
    }
}

/// A navigable leaf after flattening: full path, inherited gating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub path: String,
    pub name: String,
    pub view: View,
    pub requires_auth: bool,
}

/// The validated route table. Construction checks the invariants once so
/// lookups and the guard never have to.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<ResolvedRoute>,
}

impl RouteTable {
    /// Flatten the declared entries and validate the table.
    ///
    /// Entries with children act as layouts: only their leaves become
    /// navigation targets, with paths joined onto the parent's and the
    /// parent's `requires_auth` inherited. Fails on duplicate names, on a
    /// missing login route, and on a login route behind the gate.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let mut names = HashSet::new();
        let mut routes = Vec::new();
        for entry in entries {
            flatten(&entry, "", false, &mut names, &mut routes)?;
        }

        let login = routes
            .iter()
            .find(|route| route.path == LOGIN_PATH)
            .ok_or(RouteError::MissingLogin)?;
        if login.requires_auth {
            return Err(RouteError::GatedLogin);
        }

        Ok(Self { routes })
    }

    /// Look up the route mounted at `path`.
    pub fn resolve(&self, path: &str) -> Result<&ResolvedRoute, RouteError> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .ok_or_else(|| RouteError::NotFound(path.to_string()))
    }

    /// All navigable routes, in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &ResolvedRoute> {
        self.routes.iter()
    }
}

fn flatten(
    entry: &RouteEntry,
    parent_path: &str,
    parent_gated: bool,
    names: &mut HashSet<String>,
    routes: &mut Vec<ResolvedRoute>,
) -> Result<(), RouteError> {
    if !names.insert(entry.name.clone()) {
        return Err(RouteError::DuplicateName(entry.name.clone()));
    }

    let path = join_paths(parent_path, &entry.path);
    let requires_auth = parent_gated || entry.requires_auth;

    if entry.children.is_empty() {
        routes.push(ResolvedRoute {
            path,
            name: entry.name.clone(),
            view: entry.view,
            requires_auth,
        });
    } else {
        for child in &entry.children {
            flatten(child, &path, requires_auth, names, routes)?;
        }
    }
    Ok(())
}

fn join_paths(parent: &str, child: &str) -> String {
    let child = child.trim_start_matches('/');
    if child.is_empty() {
        if parent.is_empty() {
            ROOT_PATH.to_string()
        } else {
            parent.to_string()
        }
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), child)
    }
}

/// The application's route surface: login is the only ungated path, and
/// everything under the root layout requires a session.
pub fn default_table() -> Result<RouteTable, RouteError> {
    RouteTable::new(vec![
        RouteEntry::new("/login", "Login", View("login")),
        RouteEntry::new("/", "Main", View("main-layout"))
            .gated()
            .with_children(vec![
                RouteEntry::new("", "Home", View("home")),
                RouteEntry::new("rtd", "RTDTest", View("rtd")),
                RouteEntry::new("ezdfs", "EzDFSTest", View("ezdfs")),
                RouteEntry::new("mypage", "MyPage", View("mypage")),
                RouteEntry::new("admin", "Admin", View("admin")),
            ]),
    ])
}
