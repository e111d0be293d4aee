use std::fmt;

/// A page the router can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Buffet,
    Prosecutor,
}

impl View {
    pub const ALL: [View; 2] = [View::Buffet, View::Prosecutor];

    pub fn title(self) -> &'static str {
        match self {
            View::Buffet => "Law firm",
            View::Prosecutor => "Prosecutor's office",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Buffet => f.write_str("buffet"),
            View::Prosecutor => f.write_str("prosecutor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// Replaces `from` with `to` before any view is picked. `to` is either the
/// path or the name of a view route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub from: &'static str,
    pub to: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    View(Route),
    Redirect(Redirect),
}

impl Entry {
    pub fn path(&self) -> &'static str {
        match self {
            Entry::View(route) => route.path,
            Entry::Redirect(redirect) => redirect.from,
        }
    }

    /// Exact, case-sensitive comparison.
    pub fn matches(&self, path: &str) -> bool {
        self.path() == path
    }
}

impl From<Route> for Entry {
    fn from(route: Route) -> Self {
        Entry::View(route)
    }
}

impl From<Redirect> for Entry {
    fn from(redirect: Redirect) -> Self {
        Entry::Redirect(redirect)
    }
}
