//! Navigation menus.
//!
//! Menus form a tree addressed by dot-delimited paths:
//! - [`MenuEntry`] nodes are created on first reference by [`MenuEntry::submenu`]
//! - route modules declare entries through [`MenuRegistrations::register_menu`],
//!   applied once before the server starts
//! - [`current_menu`] returns the application's root from its extensions
//! - [`MenuView`] snapshots the evaluated tree for templates and JSON

mod entry;
mod extension;
mod registry;
mod view;

pub use entry::{
    ArgumentsProvider, Condition, MenuEntry, MenuItem, NO_URL, UNINITIALISED_TEXT,
};
pub use extension::{ContextError, Menu, MenuExtension, current_menu};
pub use registry::{MenuDeclaration, MenuRegistration, MenuRegistrations};
pub use view::{CURRENT_MENU_KEY, MenuView, inject_menu_context};
