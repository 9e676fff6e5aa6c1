//! Shared test infrastructure for database-backed integration tests.
//!
//! Requires `DATABASE_URL` (or a `.env` file) pointing at a PostgreSQL
//! database the test user may create schemas in. Each [`TestApp`] works in its
//! own schema, so tests can run in parallel and see only their own rows.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::Executor;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tower::ServiceExt;

use shelfmark_kernel::menu::MenuRegistrations;
use shelfmark_kernel::{AppState, routes};

/// Event definitions table; migrations live outside the kernel.
const CREATE_STA_EVENT: &str = r#"
CREATE TABLE "staEVENT" (
    id VARCHAR(255) NOT NULL,
    number INTEGER GENERATED BY DEFAULT AS IDENTITY (MAXVALUE 65535) UNIQUE,
    name VARCHAR(255),
    creation_time TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    cols VARCHAR(255),
    PRIMARY KEY (id, number)
)
"#;

/// Test application backed by a real database.
pub struct TestApp {
    pub router: Router,
    pub db: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestApp {
    /// Create a fresh schema with the kernel tables and assemble the app on it.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();
        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to PostgreSQL");

        let schema = format!("shelfmark_test_{}", uuid::Uuid::new_v4().simple());
        sqlx::query(&format!(r#"CREATE SCHEMA "{schema}""#))
            .execute(&admin)
            .await
            .expect("Failed to create test schema");

        // Every pooled connection resolves unqualified tables in the test schema.
        let search_path = format!(r#"SET search_path TO "{schema}""#);
        let db = PgPoolOptions::new()
            .max_connections(2)
            .after_connect(move |conn, _meta| {
                let search_path = search_path.clone();
                Box::pin(async move {
                    conn.execute(search_path.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&database_url)
            .await
            .expect("Failed to connect test pool");

        sqlx::query(CREATE_STA_EVENT)
            .execute(&db)
            .await
            .expect("Failed to create staEVENT");

        let state = AppState::assemble(db.clone(), MenuRegistrations::new());
        let router = routes::router().with_state(state);

        Self {
            router,
            db,
            admin,
            schema,
        }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET `uri` and decode the JSON body.
    pub async fn get_json(&self, uri: &str) -> (axum::http::StatusCode, Value) {
        let response = self
            .request(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await;
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    /// Drop the test schema and everything in it.
    pub async fn cleanup(self) {
        self.db.close().await;
        sqlx::query(&format!(r#"DROP SCHEMA "{}" CASCADE"#, self.schema))
            .execute(&self.admin)
            .await
            .ok();
        self.admin.close().await;
    }
}
