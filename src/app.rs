//! Application state management for Anteater Facts
//!
//! This module contains the main application state, handling keyboard input,
//! the startup prefetch, and displaying random facts.

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};

use crate::facts::{FactProvider, FactSource, HttpFactSource};

/// Message shown before the first fact has been requested
pub const WELCOME_TEXT: &str = "Press f for an anteater fact!";

/// Fixed message shown when a fact could not be produced
///
/// Raw error details are never shown to the user.
pub const FETCH_FAILURE_TEXT: &str = "Could not fetch anteater fact. Please try again!";

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while prefetching facts
    Loading,
    /// Fact box is ready for interaction
    Ready,
}

/// Main application struct managing state and the fact provider
pub struct App<S> {
    /// Current application state/view
    pub state: AppState,
    /// Text currently shown in the fact box
    pub fact_text: String,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag indicating the user asked for a new fact
    pub fact_requested: bool,
    /// Fact provider owning the cache
    provider: FactProvider<S>,
}

impl App<HttpFactSource> {
    /// Creates a new App instance with default state
    pub fn new() -> Self {
        Self::with_provider(FactProvider::new())
    }
}

impl Default for App<HttpFactSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FactSource> App<S> {
    /// Creates a new App instance with a custom fact provider (for testing)
    pub fn with_provider(provider: FactProvider<S>) -> Self {
        Self {
            state: AppState::Loading,
            fact_text: WELCOME_TEXT.to_string(),
            should_quit: false,
            fact_requested: false,
            provider,
        }
    }

    /// Warms the fact cache before first interaction
    ///
    /// The refresh cannot fail (the provider falls back internally), so this
    /// always transitions to the Ready state.
    pub async fn prefetch(&mut self) {
        self.provider.refresh().await;
        tracing::debug!(
            "prefetched {} facts",
            self.provider.cached_facts().len()
        );
        self.state = AppState::Ready;
    }

    /// Fetches a random fact and displays it in the fact box
    ///
    /// On failure a fixed, friendly message is shown instead.
    pub async fn show_random_fact(&mut self) {
        match self.provider.random_fact().await {
            Ok(fact) => {
                self.fact_text = fact;
            }
            Err(err) => {
                tracing::warn!("failed to get a fact: {err}");
                self.fact_text = FETCH_FAILURE_TEXT.to_string();
            }
        }
    }

    /// Returns when facts were last refreshed, for the status line
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.provider.last_refresh()
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q` or `Esc`: Quit the application
    /// - `f`, Space, or `Enter` (when Ready): Request a new random fact
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        match self.state {
            AppState::Loading => {
                // Only quit is allowed during loading
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::Ready => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('f') | KeyCode::Char(' ') | KeyCode::Enter => {
                    self.fact_requested = true;
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::FactSource;
    use async_trait::async_trait;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use serde_json::json;

    /// Source with a fixed fact list
    struct FixedSource(Vec<String>);

    #[async_trait]
    impl FactSource for FixedSource {
        async fn fetch_facts(&self) -> Vec<String> {
            self.0.clone()
        }
    }

    fn test_app(facts: &[&str]) -> App<FixedSource> {
        let source = FixedSource(facts.iter().map(|f| f.to_string()).collect());
        App::with_provider(FactProvider::with_source(source))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_app_starts_loading_with_welcome_text() {
        let app = test_app(&["a"]);
        assert_eq!(app.state, AppState::Loading);
        assert_eq!(app.fact_text, WELCOME_TEXT);
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn test_prefetch_warms_cache_and_becomes_ready() {
        let mut app = test_app(&["a", "b"]);
        app.prefetch().await;

        assert_eq!(app.state, AppState::Ready);
        assert!(app.last_refresh().is_some());
    }

    #[tokio::test]
    async fn test_show_random_fact_displays_a_cached_fact() {
        let mut app = test_app(&["only fact"]);
        app.prefetch().await;
        app.show_random_fact().await;

        assert_eq!(app.fact_text, "only fact");
    }

    #[tokio::test]
    async fn test_show_random_fact_failure_shows_friendly_message() {
        let mut app = test_app(&[]);
        // Force the cache empty so the empty refresh surfaces the error.
        app.provider.set_cached_facts(&json!([]));

        app.show_random_fact().await;

        assert_eq!(app.fact_text, FETCH_FAILURE_TEXT);
    }

    #[test]
    fn test_q_quits_while_loading() {
        let mut app = test_app(&["a"]);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_fact_keys_ignored_while_loading() {
        let mut app = test_app(&["a"]);
        app.handle_key(key(KeyCode::Char('f')));
        assert!(!app.fact_requested);
    }

    #[test]
    fn test_fact_keys_request_fact_when_ready() {
        let mut app = test_app(&["a"]);
        app.state = AppState::Ready;

        for code in [KeyCode::Char('f'), KeyCode::Char(' '), KeyCode::Enter] {
            app.fact_requested = false;
            app.handle_key(key(code));
            assert!(app.fact_requested, "{code:?} should request a fact");
        }
    }

    #[test]
    fn test_q_and_esc_quit_when_ready() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = test_app(&["a"]);
            app.state = AppState::Ready;
            app.handle_key(key(code));
            assert!(app.should_quit, "{code:?} should quit");
        }
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut app = test_app(&["a"]);
        app.state = AppState::Ready;
        app.handle_key(key(KeyCode::Char('x')));
        assert!(!app.should_quit);
        assert!(!app.fact_requested);
    }
}
