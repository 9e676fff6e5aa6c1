//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::Extensions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;
use crate::db;
use crate::menu::{ContextError, Menu, MenuExtension, MenuRegistrations, current_menu};
use crate::routes;
use crate::routing::EndpointTable;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// PostgreSQL connection pool.
    db: PgPool,

    /// Named endpoints and their URL patterns.
    endpoints: EndpointTable,

    /// Application-scoped registry (holds the menu root).
    extensions: Extensions,
}

impl AppState {
    /// Connect to the database and assemble the application.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = db::create_pool(config).await?;
        info!("Database connection established");

        let mut registrations = MenuRegistrations::new();
        if let Some(path) = &config.menu_file {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read menu file {}", path.display()))?;
            registrations.extend_from_json(vec![(path.display().to_string(), json)]);
        }

        Ok(Self::assemble(db, registrations))
    }

    /// Assemble the application from an existing pool.
    ///
    /// Route endpoints and their menu entries are declared first; `extra`
    /// registrations are applied after them, so they can override route
    /// entries. The menu is complete when this returns.
    pub fn assemble(db: PgPool, extra: MenuRegistrations) -> Self {
        let mut endpoints = EndpointTable::new();
        let mut registrations = MenuRegistrations::new();
        routes::declare(&mut endpoints, &mut registrations);

        let mut extensions = Extensions::new();
        let menu = MenuExtension::init_app(&mut extensions);
        registrations.apply(&menu);
        extra.apply(&menu);

        info!(
            endpoints = endpoints.len(),
            menu_sections = menu.read().child_count(),
            "Application assembled"
        );

        Self {
            inner: Arc::new(AppStateInner {
                db,
                endpoints,
                extensions,
            }),
        }
    }

    /// Get the database pool.
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get the endpoint table.
    pub fn endpoints(&self) -> &EndpointTable {
        &self.inner.endpoints
    }

    /// Get the application extensions.
    pub fn extensions(&self) -> &Extensions {
        &self.inner.extensions
    }

    /// Get the menu root.
    pub fn menu(&self) -> Result<Menu, ContextError> {
        current_menu(&self.inner.extensions)
    }

    /// Check if PostgreSQL is healthy.
    pub async fn postgres_healthy(&self) -> bool {
        db::check_health(&self.inner.db).await
    }
}
