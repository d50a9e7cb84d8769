use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Upper bound on chained redirects followed during resolution.
const MAX_REDIRECT_HOPS: usize = 8;

/// What a registered path does when navigated to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteTarget<C> {
    Component(C),
    Redirect(String),
}

/// One static route entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route<C> {
    pub path: String,
    pub name: Option<String>,
    pub target: RouteTarget<C>,
}

impl<C> Route<C> {
    #[must_use]
    pub fn component(path: impl Into<String>, component: C) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Component(component),
        }
    }

    #[must_use]
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Redirect(to.into()),
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Outcome of resolving a navigated path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResolution<'a, C> {
    Matched {
        route: &'a Route<C>,
        component: &'a C,
        /// Path originally requested when one or more redirects applied.
        redirected_from: Option<String>,
    },
    NotFound {
        path: String,
    },
}

impl<'a, C> RouteResolution<'a, C> {
    #[must_use]
    pub fn component(&self) -> Option<&'a C> {
        match self {
            Self::Matched { component, .. } => Some(*component),
            Self::NotFound { .. } => None,
        }
    }

    /// Final path after redirects; the normalized request on a miss.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Matched { route, .. } => &route.path,
            Self::NotFound { path } => path,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Static path table with optional redirects.
///
/// Paths match case-insensitively, ignoring query, hash and a single
/// trailing slash. There are no wildcards or parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<C> {
    routes: IndexMap<String, Route<C>>,
}

impl<C> RouteTable<C> {
    /// Builds a table, rejecting duplicate paths and redirect cycles.
    pub fn new(routes: Vec<Route<C>>) -> ChartResult<Self> {
        let mut table = IndexMap::with_capacity(routes.len());
        for route in routes {
            if !route.path.starts_with('/') {
                return Err(ChartError::InvalidData(format!(
                    "route path `{}` must start with `/`",
                    route.path
                )));
            }
            let key = normalize_path(&route.path);
            if table.contains_key(&key) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate route path `{}`",
                    route.path
                )));
            }
            table.insert(key, route);
        }

        let table = Self { routes: table };
        for key in table.routes.keys() {
            table.follow(key)?;
        }
        Ok(table)
    }

    #[must_use]
    pub fn routes(&self) -> impl Iterator<Item = &Route<C>> {
        self.routes.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Route<C>> {
        self.routes
            .values()
            .find(|route| route.name.as_deref() == Some(name))
    }

    /// Resolves `path` to a component, following redirects.
    ///
    /// Unregistered paths yield [`RouteResolution::NotFound`]; this never
    /// fails because cycles are rejected in [`RouteTable::new`].
    #[must_use]
    pub fn resolve(&self, path: &str) -> RouteResolution<'_, C> {
        let requested = normalize_path(path);
        let resolution = match self.follow(&requested) {
            Ok(Some((route, component, hops))) => RouteResolution::Matched {
                route,
                component,
                redirected_from: (hops > 0).then(|| requested.clone()),
            },
            Ok(None) | Err(_) => RouteResolution::NotFound {
                path: requested.clone(),
            },
        };
        debug!(
            requested = %requested,
            resolved = %resolution.path(),
            not_found = resolution.is_not_found(),
            "resolve route"
        );
        resolution
    }

    fn follow(&self, start: &str) -> ChartResult<Option<(&Route<C>, &C, usize)>> {
        let mut key = start.to_owned();
        for hops in 0..=MAX_REDIRECT_HOPS {
            let Some(route) = self.routes.get(&key) else {
                return Ok(None);
            };
            match &route.target {
                RouteTarget::Component(component) => return Ok(Some((route, component, hops))),
                RouteTarget::Redirect(to) => key = normalize_path(to),
            }
        }
        Err(ChartError::RedirectLoop {
            path: start.to_owned(),
        })
    }
}

/// Lowercases and strips query, hash and one trailing slash.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let mut trimmed = path[..end].trim();
    if trimmed.len() > 1 {
        trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    }
    if trimmed.is_empty() {
        return "/".to_owned();
    }
    let mut normalized = trimmed.to_ascii_lowercase();
    if !normalized.starts_with('/') {
        normalized.insert(0, '/');
    }
    normalized
}
