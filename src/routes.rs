//! Route Table
//!
//! The static, ordered list of client-side routes. The router in [`crate::App`]
//! is built from these entries; [`resolve`] and [`href_for`] expose the same
//! table for programmatic navigation.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use leptos::*;
use leptos_router::use_params_map;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};
use crate::pages::{Book, Home};

/// Symbolic route name, unique within [`ROUTES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteName {
    Home,
    Book,
}

impl RouteName {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteName::Home => "Home",
            RouteName::Book => "Book",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Home" => Ok(RouteName::Home),
            "Book" => Ok(RouteName::Book),
            other => Err(Error::UnknownRoute(other.to_string())),
        }
    }
}

/// Path pattern to view binding
#[derive(Debug)]
pub struct RouteEntry {
    /// Pattern; `:name` segments capture one path segment
    pub path: &'static str,
    pub name: RouteName,
    /// View factory, invoked only when the route renders
    pub view: fn() -> View,
    /// Whether captured path params are forwarded to the view as props
    pub props_from_path: bool,
}

/// All routes, in match order
pub static ROUTES: [RouteEntry; 2] = [
    RouteEntry {
        path: "/",
        name: RouteName::Home,
        view: home_view,
        props_from_path: false,
    },
    RouteEntry {
        path: "/books/:id",
        name: RouteName::Book,
        view: book_view,
        props_from_path: true,
    },
];

fn home_view() -> View {
    view! { <Home /> }.into_view()
}

fn book_view() -> View {
    let params = use_params_map();
    let id = Signal::derive(move || params.with(|p| p.get("id").cloned().unwrap_or_default()));

    view! { <Book id=id /> }.into_view()
}

/// Look up a route entry by name.
pub fn entry(name: RouteName) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|entry| entry.name == name)
}

/// A location matched against the route table
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub entry: &'static RouteEntry,
    pub params: BTreeMap<&'static str, String>,
}

impl RouteMatch {
    pub fn name(&self) -> RouteName {
        self.entry.name
    }

    /// Inputs handed to the view: the captured params if the route forwards them.
    pub fn props(&self) -> BTreeMap<&'static str, String> {
        if self.entry.props_from_path {
            self.params.clone()
        } else {
            BTreeMap::new()
        }
    }
}

/// Characters escaped in a path segment: everything but RFC 3986 unreserved
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Split a path into segments the way the router does: only the leading `/`
/// is dropped, so a trailing `/` leaves an empty last segment.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.strip_prefix('/').unwrap_or(path).split('/')
}

fn match_entry(entry: &'static RouteEntry, location: &[&str]) -> Option<RouteMatch> {
    let pattern: Vec<&'static str> = segments(entry.path).collect();
    if pattern.len() != location.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (expected, actual) in pattern.into_iter().zip(location) {
        match expected.strip_prefix(':') {
            Some(param) => {
                let value = percent_decode_str(actual).decode_utf8_lossy().into_owned();
                params.insert(param, value);
            }
            None if expected == *actual => {}
            None => return None,
        }
    }

    Some(RouteMatch { entry, params })
}

/// Resolve a location path to its route. First matching entry wins.
///
/// Query string and fragment are ignored and captured params are
/// percent-decoded. Returns `None` for paths outside the table, including
/// a defined path with a trailing `/`.
pub fn resolve(location: &str) -> Option<RouteMatch> {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    let location: Vec<&str> = segments(path).collect();

    ROUTES.iter().find_map(|entry| match_entry(entry, &location))
}

/// Build the path for a named route, filling `:param` segments from `params`.
///
/// Values are percent-encoded, so ids containing `/`, `?` or `#` stay in
/// their segment.
pub fn href_for(name: RouteName, params: &[(&str, &str)]) -> Result<String> {
    let entry = entry(name).ok_or_else(|| Error::UnknownRoute(name.to_string()))?;

    let mut path = String::new();
    for segment in segments(entry.path).filter(|segment| !segment.is_empty()) {
        path.push('/');
        match segment.strip_prefix(':') {
            Some(param) => {
                let value = params
                    .iter()
                    .find(|(key, _)| *key == param)
                    .map(|(_, value)| *value)
                    .filter(|value| !value.is_empty())
                    .ok_or_else(|| Error::MissingParam {
                        route: name.to_string(),
                        param: param.to_string(),
                    })?;
                path.extend(utf8_percent_encode(value, SEGMENT));
            }
            None => path.push_str(segment),
        }
    }

    if path.is_empty() {
        path.push('/');
    }
    Ok(path)
}
