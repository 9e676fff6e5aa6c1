//! Menu registrations - declared during application assembly, applied once.
//!
//! Route modules declare the menu entries for their handlers next to the
//! handlers themselves. The declarations are collected here and applied to
//! the menu root after every route is declared and before the server accepts
//! requests.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::entry::{MenuEntry, MenuItem};
use super::extension::Menu;

/// A data-only menu declaration, e.g. loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDeclaration {
    /// Dot-delimited path in the menu tree (e.g., "main.deposit.article")
    pub path: String,
    /// Endpoint name (e.g., "deposit.form")
    pub endpoint: String,
    /// Link text
    pub text: String,
    /// Sort order among siblings (lower = first)
    #[serde(default)]
    pub order: i32,
    /// Hide the entry after registering it
    #[serde(default)]
    pub hidden: bool,
}

/// A pending registration: where to put an item, and what to put there.
#[derive(Debug, Clone)]
pub struct MenuRegistration {
    /// Dot-delimited path in the menu tree.
    pub path: String,
    /// Display metadata.
    pub item: MenuItem,
    /// Hide the entry after registering it.
    pub hidden: bool,
}

/// Ordered list of pending menu registrations.
#[derive(Debug, Default)]
pub struct MenuRegistrations {
    pending: Vec<MenuRegistration>,
}

impl MenuRegistrations {
    /// Create an empty registration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that the endpoint `owner.handler` appears at `path`.
    ///
    /// The endpoint name is built from `owner` and `handler`; build `item`
    /// with [`MenuItem::labelled`]. Any endpoint already set on it is replaced.
    pub fn register_menu(
        &mut self,
        owner: &str,
        handler: &str,
        path: impl Into<String>,
        item: MenuItem,
    ) -> &mut Self {
        let item = MenuItem {
            endpoint: format!("{owner}.{handler}"),
            ..item
        };
        self.push(MenuRegistration {
            path: path.into(),
            item,
            hidden: false,
        });
        self
    }

    /// Queue a registration.
    pub fn push(&mut self, registration: MenuRegistration) {
        debug!(
            path = %registration.path,
            endpoint = %registration.item.endpoint,
            "declared menu entry"
        );
        self.pending.push(registration);
    }

    /// Queue data-only declarations from JSON arrays.
    ///
    /// Each element in `sources` is a (source_name, json_array) tuple.
    /// Sources that fail to parse are skipped.
    pub fn extend_from_json(&mut self, sources: Vec<(String, String)>) {
        for (source, json) in sources {
            match serde_json::from_str::<Vec<MenuDeclaration>>(&json) {
                Ok(declarations) => {
                    for declaration in declarations {
                        self.push(declaration.into());
                    }
                }
                Err(e) => {
                    warn!(
                        source = %source,
                        error = %e,
                        "failed to parse menu declarations"
                    );
                }
            }
        }
    }

    /// Number of pending registrations.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply every pending registration to the tree under `root`.
    ///
    /// Later registrations for the same path overwrite earlier ones.
    pub fn apply_to(self, root: &mut MenuEntry) {
        let count = self.pending.len();
        for registration in self.pending {
            let entry = root.submenu(&registration.path);
            entry.register(registration.item);
            if registration.hidden {
                entry.hide();
            }
        }
        info!(entries = count, "menu registrations applied");
    }

    /// Apply every pending registration to the application menu.
    pub fn apply(self, menu: &Menu) {
        let mut root = menu.write();
        self.apply_to(&mut root);
    }
}

impl From<MenuDeclaration> for MenuRegistration {
    fn from(declaration: MenuDeclaration) -> Self {
        Self {
            path: declaration.path,
            item: MenuItem::new(declaration.endpoint, declaration.text).order(declaration.order),
            hidden: declaration.hidden,
        }
    }
}
