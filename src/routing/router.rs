use tracing::trace;

use super::{RouteResolution, RouteTable, normalize_path};

/// History-style navigator over a [`RouteTable`].
///
/// Entries store the final path after redirects, as browser history does
/// once a redirect has replaced the location. Unregistered paths are kept
/// as entries too and resolve to `NotFound`.
#[derive(Debug, Clone)]
pub struct Router<C> {
    table: RouteTable<C>,
    entries: Vec<String>,
    cursor: usize,
}

impl<C> Router<C> {
    /// Starts at `initial_path`.
    #[must_use]
    pub fn new(table: RouteTable<C>, initial_path: &str) -> Self {
        let entry = final_path(&table, initial_path);
        Self {
            table,
            entries: vec![entry],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable<C> {
        &self.table
    }

    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.entries[self.cursor]
    }

    #[must_use]
    pub fn current(&self) -> RouteResolution<'_, C> {
        self.table.resolve(self.current_path())
    }

    /// Navigates forward to `path`, discarding any forward entries.
    pub fn push(&mut self, path: &str) -> RouteResolution<'_, C> {
        let entry = final_path(&self.table, path);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor += 1;
        trace!(path, depth = self.entries.len(), "router push");
        self.current()
    }

    /// Navigates to `path` in place of the current entry.
    pub fn replace(&mut self, path: &str) -> RouteResolution<'_, C> {
        self.entries[self.cursor] = final_path(&self.table, path);
        trace!(path, "router replace");
        self.current()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Moves `delta` entries through history. Out-of-range moves are
    /// ignored and return `None`.
    pub fn go(&mut self, delta: isize) -> Option<RouteResolution<'_, C>> {
        let target = self.cursor.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.cursor = target;
        trace!(delta, cursor = self.cursor, "router go");
        Some(self.current())
    }

    pub fn back(&mut self) -> Option<RouteResolution<'_, C>> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<RouteResolution<'_, C>> {
        self.go(1)
    }
}

fn final_path<C>(table: &RouteTable<C>, path: &str) -> String {
    match table.resolve(path) {
        RouteResolution::Matched { route, .. } => normalize_path(&route.path),
        RouteResolution::NotFound { path } => path,
    }
}
