//! Evaluated menu snapshots for templates and JSON responses.

use serde::{Deserialize, Serialize};

use super::entry::MenuEntry;
use crate::routing::{UrlError, UrlResolver};

/// Template context key holding the evaluated menu.
pub const CURRENT_MENU_KEY: &str = "current_menu";

/// One menu entry with its predicates and URL evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuView {
    pub name: String,
    pub text: String,
    pub url: String,
    pub order: i32,
    pub active: bool,
    pub visible: bool,
    #[serde(default)]
    pub children: Vec<MenuView>,
}

impl MenuView {
    /// Evaluate `entry` and all of its descendants.
    ///
    /// Unregistered and hidden entries are included with `visible: false`;
    /// templates decide whether to skip them.
    pub fn build(entry: &MenuEntry, resolver: &dyn UrlResolver) -> Result<Self, UrlError> {
        let children = entry
            .children()
            .into_iter()
            .map(|child| Self::build(child, resolver))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: entry.name().to_string(),
            text: entry.text().to_string(),
            url: entry.url(resolver)?,
            order: entry.order(),
            active: entry.active(),
            visible: entry.visible(),
            children,
        })
    }

    /// Children that should be displayed.
    pub fn visible_children(&self) -> impl Iterator<Item = &MenuView> {
        self.children.iter().filter(|child| child.visible)
    }
}

/// Insert the evaluated menu under [`CURRENT_MENU_KEY`] into a template context.
pub fn inject_menu_context(
    context: &mut tera::Context,
    root: &MenuEntry,
    resolver: &dyn UrlResolver,
) -> Result<(), UrlError> {
    let view = MenuView::build(root, resolver)?;
    context.insert(CURRENT_MENU_KEY, &view);
    Ok(())
}
