//! Menu tree nodes.
//!
//! A [`MenuEntry`] is addressed by a dot-delimited path ("main.deposit.article")
//! relative to its parent. Nodes along a path are created on first reference
//! and live as long as the tree.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::routing::{UrlArgs, UrlError, UrlResolver};

/// Zero-argument predicate evaluated on every access.
pub type Condition = Arc<dyn Fn() -> bool + Send + Sync>;

/// Zero-argument function returning URL arguments for an endpoint.
pub type ArgumentsProvider = Arc<dyn Fn() -> UrlArgs + Send + Sync>;

/// Label returned for entries that were never registered.
pub const UNINITIALISED_TEXT: &str = "Menu item not initialised";

/// URL returned for entries without an endpoint.
pub const NO_URL: &str = "#";

fn always_true() -> Condition {
    Arc::new(|| true)
}

fn always_false() -> Condition {
    Arc::new(|| false)
}

/// Display metadata assigned to an entry by [`MenuEntry::register`].
#[derive(Clone)]
pub struct MenuItem {
    /// Endpoint name used to build the link.
    pub endpoint: String,
    /// Link text.
    pub text: String,
    /// Sort order among siblings (lower = first).
    pub order: i32,
    /// Arguments passed to URL resolution.
    pub arguments: Option<ArgumentsProvider>,
    /// When the entry is displayed as active (default: never).
    pub active_when: Option<Condition>,
    /// When the entry is displayed (default: always).
    pub visible_when: Option<Condition>,
}

impl MenuItem {
    /// Create a menu item for an endpoint.
    pub fn new(endpoint: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            text: text.into(),
            order: 0,
            arguments: None,
            active_when: None,
            visible_when: None,
        }
    }

    /// Create a menu item whose endpoint is assigned later by
    /// [`MenuRegistrations::register_menu`](super::MenuRegistrations::register_menu).
    pub fn labelled(text: impl Into<String>) -> Self {
        Self::new(String::new(), text)
    }

    /// Set the sort order.
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Set the URL arguments provider.
    pub fn arguments(mut self, provider: impl Fn() -> UrlArgs + Send + Sync + 'static) -> Self {
        self.arguments = Some(Arc::new(provider));
        self
    }

    /// Set the active predicate.
    pub fn active_when(mut self, condition: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.active_when = Some(Arc::new(condition));
        self
    }

    /// Set the visibility predicate.
    pub fn visible_when(mut self, condition: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.visible_when = Some(Arc::new(condition));
        self
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("endpoint", &self.endpoint)
            .field("text", &self.text)
            .field("order", &self.order)
            .field("arguments", &self.arguments.is_some())
            .field("active_when", &self.active_when.is_some())
            .field("visible_when", &self.visible_when.is_some())
            .finish()
    }
}

/// A node in the menu tree.
pub struct MenuEntry {
    name: String,
    children: BTreeMap<String, MenuEntry>,
    endpoint: Option<String>,
    text: Option<String>,
    order: i32,
    arguments: Option<ArgumentsProvider>,
    active_when: Condition,
    visible_when: Condition,
    hidden: bool,
}

impl MenuEntry {
    /// Create an unregistered entry.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: BTreeMap::new(),
            endpoint: None,
            text: None,
            order: 0,
            arguments: None,
            active_when: always_false(),
            visible_when: always_true(),
            hidden: false,
        }
    }

    /// Create a root entry (empty name).
    pub fn root() -> Self {
        Self::new("")
    }

    /// Assign endpoint and display values, replacing any previous ones.
    ///
    /// A hidden entry stays hidden unless `item` carries its own
    /// `visible_when`.
    pub fn register(&mut self, item: MenuItem) {
        self.endpoint = Some(item.endpoint);
        self.text = Some(item.text);
        self.order = item.order;
        self.arguments = item.arguments;
        self.active_when = item.active_when.unwrap_or_else(always_false);
        match item.visible_when {
            Some(condition) => {
                self.visible_when = condition;
                self.hidden = false;
            }
            None => self.visible_when = always_true(),
        }
    }

    /// Return the entry at `path`, creating missing entries along the way.
    ///
    /// Empty segments ("a..b", "a.") are not rejected: "a..b" descends through
    /// an entry named "" and a trailing dot stops at the preceding segment.
    pub fn submenu(&mut self, path: &str) -> &mut MenuEntry {
        if path.is_empty() {
            return self;
        }

        let (head, tail) = path.split_once('.').unwrap_or((path, ""));

        self.children
            .entry(head.to_string())
            .or_insert_with(|| MenuEntry::new(head))
            .submenu(tail)
    }

    /// Look up the entry at `path` without creating anything.
    pub fn find(&self, path: &str) -> Option<&MenuEntry> {
        if path.is_empty() {
            return Some(self);
        }

        let (head, tail) = path.split_once('.').unwrap_or((path, ""));
        self.children.get(head)?.find(tail)
    }

    /// Make the entry permanently hidden.
    pub fn hide(&mut self) {
        self.hidden = true;
        self.visible_when = always_false();
    }

    /// Path segment addressing this entry from its parent.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sort order among siblings.
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Registered endpoint, if any.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Whether [`register`](Self::register) has been called on this entry.
    pub fn is_registered(&self) -> bool {
        self.text.is_some()
    }

    /// Link text, or a placeholder for unregistered or blank entries.
    pub fn text(&self) -> &str {
        self.text
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(UNINITIALISED_TEXT)
    }

    /// Child entries ordered by `order`, ties broken by name.
    pub fn children(&self) -> Vec<&MenuEntry> {
        // BTreeMap iterates by name; the stable sort keeps that for equal orders.
        let mut children: Vec<&MenuEntry> = self.children.values().collect();
        children.sort_by_key(|entry| entry.order);
        children
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Arguments for URL construction.
    pub fn arguments(&self) -> UrlArgs {
        self.arguments.as_ref().map(|f| f()).unwrap_or_default()
    }

    /// Resolve the entry's URL, or [`NO_URL`] when no endpoint is set.
    pub fn url(&self, resolver: &dyn UrlResolver) -> Result<String, UrlError> {
        match &self.endpoint {
            Some(endpoint) if !endpoint.is_empty() => {
                resolver.resolve_url(endpoint, &self.arguments())
            }
            _ => Ok(NO_URL.to_string()),
        }
    }

    /// Evaluate the active predicate.
    pub fn active(&self) -> bool {
        (self.active_when)()
    }

    /// Evaluate visibility: registered, not hidden, and `visible_when` holds.
    pub fn visible(&self) -> bool {
        self.text.is_some() && !self.hidden && (self.visible_when)()
    }
}

impl Default for MenuEntry {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuEntry")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("text", &self.text)
            .field("order", &self.order)
            .field("hidden", &self.hidden)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::routing::EndpointTable;

    fn texts(entry: &MenuEntry) -> Vec<&str> {
        entry.children().into_iter().map(MenuEntry::text).collect()
    }

    #[test]
    fn submenu_is_idempotent() {
        let mut root = MenuEntry::root();
        let first: *const MenuEntry = root.submenu("a.b.c");
        let second: *const MenuEntry = root.submenu("a.b.c");
        assert!(std::ptr::eq(first, second));
        assert_eq!(root.child_count(), 1);
    }

    #[test]
    fn submenu_empty_path_returns_self() {
        let mut root = MenuEntry::root();
        let node = root.submenu("a");
        let node_ptr: *const MenuEntry = &*node;
        let same: *const MenuEntry = node.submenu("");
        assert!(std::ptr::eq(node_ptr, same));
    }

    #[test]
    fn submenu_names_match_segments() {
        let mut root = MenuEntry::root();
        root.submenu("main.deposit.article");

        let main = root.find("main").unwrap();
        assert_eq!(main.name(), "main");
        assert_eq!(root.find("main.deposit").unwrap().name(), "deposit");
        assert_eq!(root.find("main.deposit.article").unwrap().name(), "article");
        assert_eq!(root.name(), "");
    }

    #[test]
    fn submenu_shares_intermediate_entries() {
        let mut root = MenuEntry::root();
        root.submenu("x.y");
        root.submenu("x.z");

        assert_eq!(root.child_count(), 1);
        let x = root.find("x").unwrap();
        let names: Vec<&str> = x.children().into_iter().map(MenuEntry::name).collect();
        assert_eq!(names, vec!["y", "z"]);
    }

    #[test]
    fn submenu_does_not_touch_registered_fields() {
        let mut root = MenuEntry::root();
        root.submenu("reports")
            .register(MenuItem::new("reports.index", "Reports").order(4));
        root.submenu("reports.monthly");

        let reports = root.find("reports").unwrap();
        assert_eq!(reports.text(), "Reports");
        assert_eq!(reports.order(), 4);
        assert_eq!(reports.endpoint(), Some("reports.index"));
    }

    #[test]
    fn submenu_accepts_empty_segments() {
        let mut root = MenuEntry::root();
        root.submenu("a..b");

        let empty = root.find("a").unwrap().children()[0];
        assert_eq!(empty.name(), "");
        assert_eq!(empty.children()[0].name(), "b");
    }

    #[test]
    fn submenu_trailing_dot_stops_at_segment() {
        let mut root = MenuEntry::root();
        root.submenu("a.");

        let a = root.find("a").unwrap();
        assert_eq!(a.child_count(), 0);
    }

    #[test]
    fn children_sorted_by_order() {
        let mut root = MenuEntry::root();
        for (name, order) in [("five", 5), ("one", 1), ("three", 3)] {
            root.submenu(name)
                .register(MenuItem::new("x", name).order(order));
        }

        let orders: Vec<i32> = root.children().into_iter().map(MenuEntry::order).collect();
        assert_eq!(orders, vec![1, 3, 5]);
    }

    #[test]
    fn children_ties_break_by_name() {
        let mut root = MenuEntry::root();
        for name in ["charlie", "alpha", "bravo"] {
            root.submenu(name).register(MenuItem::new("x", name));
        }

        assert_eq!(texts(&root), vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn reports_scenario() {
        let mut root = MenuEntry::root();
        root.submenu("reports.monthly")
            .register(MenuItem::new("reports.monthly", "Monthly Report").order(2));
        root.submenu("reports.annual")
            .register(MenuItem::new("reports.annual", "Annual Report").order(1));

        let reports = root.find("reports").unwrap();
        assert_eq!(texts(reports), vec!["Annual Report", "Monthly Report"]);
    }

    #[test]
    fn unregistered_entry_is_invisible() {
        let mut root = MenuEntry::root();
        let entry = root.submenu("a");
        assert!(!entry.visible());
        assert!(!entry.is_registered());
        assert_eq!(entry.text(), UNINITIALISED_TEXT);
    }

    #[test]
    fn registered_entry_defaults() {
        let mut root = MenuEntry::root();
        let entry = root.submenu("a");
        entry.register(MenuItem::new("a.index", "A"));
        assert!(entry.visible());
        assert!(!entry.active());
        assert_eq!(entry.order(), 0);
    }

    #[test]
    fn hide_survives_register_without_visibility() {
        let mut root = MenuEntry::root();
        let entry = root.submenu("a");
        entry.register(MenuItem::new("a.index", "A").visible_when(|| true));
        entry.hide();
        assert!(!entry.visible());

        entry.register(MenuItem::new("a.index", "A"));
        assert!(!entry.visible());
    }

    #[test]
    fn register_with_visibility_replaces_hidden_state() {
        let mut root = MenuEntry::root();
        let entry = root.submenu("a");
        entry.hide();
        entry.register(MenuItem::new("a.index", "A").visible_when(|| true));
        assert!(entry.visible());
    }

    #[test]
    fn predicates_are_evaluated_on_every_access() {
        let flag = Arc::new(AtomicBool::new(false));
        let active = Arc::clone(&flag);
        let visible = Arc::clone(&flag);

        let mut root = MenuEntry::root();
        let entry = root.submenu("a");
        entry.register(
            MenuItem::new("a.index", "A")
                .active_when(move || active.load(Ordering::SeqCst))
                .visible_when(move || visible.load(Ordering::SeqCst)),
        );

        assert!(!entry.active());
        assert!(!entry.visible());
        flag.store(true, Ordering::SeqCst);
        assert!(entry.active());
        assert!(entry.visible());
    }

    #[test]
    fn url_without_endpoint_is_placeholder() {
        let mut root = MenuEntry::root();
        let entry = root.submenu("group");
        assert_eq!(entry.url(&EndpointTable::new()).unwrap(), NO_URL);
    }

    #[test]
    fn url_uses_arguments_provider() {
        let mut endpoints = EndpointTable::new();
        endpoints.add("record.detail", "/record/:id");

        let mut root = MenuEntry::root();
        let entry = root.submenu("record");
        entry.register(MenuItem::new("record.detail", "Record").arguments(|| {
            UrlArgs::from([("id".to_string(), 42.to_string())])
        }));

        assert_eq!(entry.url(&endpoints).unwrap(), "/record/42");
    }

    #[test]
    fn url_propagates_resolution_errors() {
        let mut root = MenuEntry::root();
        let entry = root.submenu("missing");
        entry.register(MenuItem::new("missing.index", "Missing"));

        let err = entry.url(&EndpointTable::new()).unwrap_err();
        assert_eq!(err, UrlError::UnknownEndpoint("missing.index".to_string()));
    }

    #[test]
    fn blank_text_shows_placeholder() {
        let mut root = MenuEntry::root();
        let entry = root.submenu("blank");
        entry.register(MenuItem::new("", ""));

        assert_eq!(entry.text(), UNINITIALISED_TEXT);
        assert!(entry.is_registered());
        assert!(entry.visible());
        assert_eq!(entry.url(&EndpointTable::new()).unwrap(), NO_URL);
    }

    #[test]
    fn labelled_item_has_no_endpoint() {
        let item = MenuItem::labelled("Reports").order(4);
        assert!(item.endpoint.is_empty());
        assert_eq!(item.text, "Reports");
        assert_eq!(item.order, 4);
    }
}
