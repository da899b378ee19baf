//! Web front end for the classifier.
//!
//! Serves an HTML form that scores a free-text message and a small JSON
//! API. The trained classifier is shared read-only through [`AppState`];
//! no handler mutates it, so requests are served concurrently without
//! locking.

pub mod handler;
pub mod html;

use std::fmt;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use log::{debug, info};
use tokio::net::TcpListener;

use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer};
use crate::classifier::{NaiveBayesClassifier, ScoreResult};
use crate::error::{Result, SpamScoreError};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    classifier: Arc<NaiveBayesClassifier>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("learned_count", &self.classifier.learned_count())
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl AppState {
    /// Wrap a trained classifier; queries are split with [`SpaceTokenizer`].
    pub fn new(classifier: Arc<NaiveBayesClassifier>) -> Self {
        Self::with_tokenizer(classifier, Arc::new(SpaceTokenizer::new()))
    }

    pub fn with_tokenizer(
        classifier: Arc<NaiveBayesClassifier>,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        AppState {
            classifier,
            tokenizer,
        }
    }

    pub fn classifier(&self) -> &NaiveBayesClassifier {
        &self.classifier
    }

    /// Tokenize and score a message.
    pub fn score(&self, message: &str) -> ScoreResult {
        let result = self.classifier.scores(&self.tokenizer.terms(message));
        debug!(
            "scores {:?} matched {} strict {}",
            result.scores, result.matched_tokens, result.strict
        );
        result
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handler::home)
                .post(handler::submit)
                .fallback(handler::not_found),
        )
        .route("/api/score", post(handler::api_score))
        .route("/api/stats", get(handler::api_stats))
        .fallback(handler::not_found)
        .with_state(state)
}

/// Bind `address` and serve until Ctrl-C.
pub async fn serve(address: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| SpamScoreError::server(format!("failed to bind {address}: {e}")))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SpamScoreError::server(e.to_string()))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
