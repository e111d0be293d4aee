//! Route table of the front end.
//!
//! The table is an ordered list of view routes and redirects. It is built
//! once, validated, and then only read: every navigation resolves the current
//! path against it, and the first entry whose path is equal to it wins.

use std::collections::HashSet;

use lazy_static::lazy_static;
use log::debug;
use thiserror::Error;

mod entry;

pub use entry::{Entry, Redirect, Route, View};

pub const BUFFET: Route = Route {
    path: "/buffet",
    name: "buffet",
    view: View::Buffet,
};

pub const PROSECUTOR: Route = Route {
    path: "/prosecutor",
    name: "prosecutor",
    view: View::Prosecutor,
};

pub const ROOT: Redirect = Redirect {
    from: "/",
    to: "/buffet",
};

pub fn default_entries() -> Vec<Entry> {
    vec![BUFFET.into(), PROSECUTOR.into(), ROOT.into()]
}

lazy_static! {
    /// The table the application mounts.
    pub static ref ROUTES: Result<RouteTable, RouteTableError> = RouteTable::new(default_entries());
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route path `{0}` does not start with `/`")]
    RelativePath(&'static str),

    #[error("path `{0}` is declared more than once")]
    DuplicatePath(&'static str),

    #[error("route name `{0}` is declared more than once")]
    DuplicateName(&'static str),

    #[error("redirect from `{from}` points to `{to}`, which is not a view route")]
    DanglingRedirect { from: &'static str, to: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Show `route.view`. When a redirect was followed, the browser location
    /// becomes `route.path` and `redirected_from` holds the requested path.
    Render {
        route: Route,
        redirected_from: Option<&'static str>,
    },
    /// Nothing in the table matches; what happens is up to the host router.
    Unhandled,
}

impl Resolution {
    pub fn view(&self) -> Option<View> {
        match self {
            Resolution::Render { route, .. } => Some(route.view),
            Resolution::Unhandled => None,
        }
    }

    pub fn location(&self) -> Option<&'static str> {
        match self {
            Resolution::Render { route, .. } => Some(route.path),
            Resolution::Unhandled => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<Entry>,
}

impl RouteTable {
    pub fn new(entries: Vec<Entry>) -> Result<Self, RouteTableError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for entry in &entries {
            let path = entry.path();
            if !path.starts_with('/') {
                return Err(RouteTableError::RelativePath(path));
            }
            if !paths.insert(path) {
                return Err(RouteTableError::DuplicatePath(path));
            }
            if let Entry::View(route) = entry {
                if !names.insert(route.name) {
                    return Err(RouteTableError::DuplicateName(route.name));
                }
            }
        }

        let table = Self { entries };
        if let Some(redirect) = table
            .redirects()
            .find(|redirect| table.redirect_target(redirect).is_none())
        {
            return Err(RouteTableError::DanglingRedirect {
                from: redirect.from,
                to: redirect.to,
            });
        }
        Ok(table)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn views(&self) -> impl Iterator<Item = &Route> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::View(route) => Some(route),
            Entry::Redirect(_) => None,
        })
    }

    pub fn redirects(&self) -> impl Iterator<Item = &Redirect> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Redirect(redirect) => Some(redirect),
            Entry::View(_) => None,
        })
    }

    pub fn find(&self, path: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.matches(path))
    }

    /// View route a redirect lands on, looked up by path first, then by name.
    pub fn redirect_target(&self, redirect: &Redirect) -> Option<&Route> {
        self.views()
            .find(|route| route.path == redirect.to)
            .or_else(|| self.views().find(|route| route.name == redirect.to))
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        match self.find(path) {
            Some(Entry::View(route)) => Resolution::Render {
                route: *route,
                redirected_from: None,
            },
            Some(Entry::Redirect(redirect)) => match self.redirect_target(redirect) {
                Some(route) => {
                    debug!("redirecting {} to {}", redirect.from, route.path);
                    Resolution::Render {
                        route: *route,
                        redirected_from: Some(redirect.from),
                    }
                }
                // Construction rejects dangling redirects.
                None => Resolution::Unhandled,
            },
            None => {
                debug!("no route for {path}");
                Resolution::Unhandled
            }
        }
    }

    pub fn path_for(&self, name: &str) -> Option<&'static str> {
        self.views()
            .find(|route| route.name == name)
            .map(|route| route.path)
    }

    pub fn route_for(&self, view: View) -> Option<&Route> {
        self.views().find(|route| route.view == view)
    }
}
