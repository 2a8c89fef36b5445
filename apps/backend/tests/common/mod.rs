//! Common test utilities for integration tests.
//!
//! Tests run fully offline: the sheets service is pointed at an
//! unreachable master-sheet URL, so config/leaderboard loading degrades to
//! empty lists and question loading serves the sample fallback, which is
//! exactly the degradation behavior under test.

use std::sync::Arc;

use axum::Router;

use quizowl_backend::services::sheets::{SheetsConfig, SheetsService};
use quizowl_backend::{router, AppState};

/// Test context wrapping a router whose sheet endpoints are unreachable.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    pub fn new() -> Self {
        let config = SheetsConfig {
            // Nothing listens here; every fetch fails fast and the
            // service falls back per its contract.
            master_sheet_url: "http://127.0.0.1:9/master.csv".to_string(),
        };
        let state = AppState {
            sheets: Arc::new(SheetsService::new(config)),
        };

        Self {
            app: router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
