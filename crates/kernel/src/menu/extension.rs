//! Application-scoped menu root.
//!
//! The root entry lives in the application's extension registry. Handlers
//! reach it through [`current_menu`] instead of a global.

use std::sync::Arc;

use axum::http::Extensions;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::debug;

use super::entry::MenuEntry;

/// Lookup failure for application-scoped state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("application extension not initialised: {0}")]
    MissingExtension(&'static str),
}

/// Shared handle to an application's menu root.
///
/// The tree is written while registrations are applied at start-up and read
/// on every render.
#[derive(Clone, Default)]
pub struct Menu {
    root: Arc<RwLock<MenuEntry>>,
}

impl Menu {
    /// Create a handle to a new, empty root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the root entry.
    pub fn read(&self) -> RwLockReadGuard<'_, MenuEntry> {
        self.root.read()
    }

    /// Write access to the root entry.
    pub fn write(&self) -> RwLockWriteGuard<'_, MenuEntry> {
        self.root.write()
    }

    /// Whether two handles share the same root.
    pub fn ptr_eq(&self, other: &Menu) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }
}

impl std::fmt::Debug for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Menu")
            .field("children", &self.root.read().child_count())
            .finish()
    }
}

/// Installs and looks up the menu root in an extension registry.
pub struct MenuExtension;

impl MenuExtension {
    /// Extension name reported in lookup errors.
    pub const NAME: &'static str = "menu";

    /// Install a fresh menu root, replacing any existing one.
    pub fn init_app(extensions: &mut Extensions) -> Menu {
        let menu = Menu::new();
        extensions.insert(menu.clone());
        debug!("menu extension initialised");
        menu
    }

    /// Root entry of the application's menu.
    pub fn root(extensions: &Extensions) -> Result<Menu, ContextError> {
        extensions
            .get::<Menu>()
            .cloned()
            .ok_or(ContextError::MissingExtension(Self::NAME))
    }
}

/// Menu root of the application owning `extensions`.
pub fn current_menu(extensions: &Extensions) -> Result<Menu, ContextError> {
    MenuExtension::root(extensions)
}
