//! Fact provider for Anteater Facts
//!
//! This module owns the in-memory fact cache, the validation of externally
//! supplied fact lists, and random fact selection. The cache only ever
//! changes by wholesale replacement: a refresh or a validated assignment
//! installs a complete new list, and an explicit empty assignment clears it.

pub mod catalog;
pub mod source;

pub use catalog::{fallback_facts, fetched_facts, FALLBACK_FACTS, FETCHED_FACTS};
pub use source::{FactSource, HttpFactSource, SourceError, FACT_PAGE_URL, FETCH_TIMEOUT};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced to callers of [`FactProvider::random_fact`]
#[derive(Debug, Error)]
pub enum FactError {
    /// The cache was empty and the refresh attempt also yielded no facts
    #[error("fact cache is empty and could not be refilled")]
    EmptyCache,
}

/// Errors from validating an externally supplied fact list
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The candidate value was not an array
    #[error("expected an array of facts, got {0}")]
    NotAnArray(&'static str),
}

/// Validates an externally supplied fact list
///
/// Accepts only a JSON array; elements that are not strings are dropped.
/// An empty array is valid and yields an empty list.
///
/// # Returns
/// * `Ok(Vec<String>)` - The string elements of the array, in order
/// * `Err(ValidationError)` - If the candidate is not an array
pub fn validate_facts(candidate: &Value) -> Result<Vec<String>, ValidationError> {
    match candidate {
        Value::Array(items) => Ok(items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect()),
        other => Err(ValidationError::NotAnArray(json_type_name(other))),
    }
}

/// Human-readable JSON type name for validation errors
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Provides random anteater facts from an in-memory cache
///
/// The cache starts empty and is filled by the first refresh. A refresh never
/// fails: the source falls back to the static fallback list internally, so
/// the cache is populated after any refresh under normal use.
pub struct FactProvider<S> {
    /// Source of fact lists, probed when the cache is empty
    source: S,
    /// Current fact cache; replaced wholesale, never appended to
    cache: Vec<String>,
    /// When the cache was last refreshed from the source
    last_refresh: Option<DateTime<Utc>>,
}

impl FactProvider<HttpFactSource> {
    /// Creates a new FactProvider backed by the anteater fact page
    pub fn new() -> Self {
        Self::with_source(HttpFactSource::new())
    }
}

impl Default for FactProvider<HttpFactSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FactSource> FactProvider<S> {
    /// Creates a new FactProvider with a custom fact source
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            cache: Vec::new(),
            last_refresh: None,
        }
    }

    /// Returns a copy of the current fact cache
    ///
    /// Mutating the returned vector does not affect the provider. Empty if
    /// nothing has been cached yet.
    pub fn cached_facts(&self) -> Vec<String> {
        self.cache.clone()
    }

    /// Returns when the cache was last refreshed from the source
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.last_refresh
    }

    /// Installs an externally supplied fact list into the cache
    ///
    /// The candidate must be a JSON array; non-string elements are dropped
    /// and the filtered list replaces the cache wholesale. Anything else is
    /// rejected with a warning and the cache is left unchanged.
    pub fn set_cached_facts(&mut self, candidate: &Value) {
        match validate_facts(candidate) {
            Ok(facts) => self.replace_cache(facts),
            Err(err) => {
                tracing::warn!("ignoring invalid fact list: {err}");
            }
        }
    }

    /// Retrieves the current fact list from the source
    ///
    /// Never fails: on any retrieval problem the source yields the fallback
    /// list. Does not touch the cache.
    #[allow(dead_code)]
    pub async fn fetch_facts(&self) -> Vec<String> {
        self.source.fetch_facts().await
    }

    /// Refreshes the cache from the source
    pub async fn refresh(&mut self) {
        let facts = self.source.fetch_facts().await;
        tracing::debug!("refreshed fact cache with {} facts", facts.len());
        self.replace_cache(facts);
        self.last_refresh = Some(Utc::now());
    }

    /// Returns a random fact, refreshing the cache first if it is empty
    ///
    /// # Returns
    /// * `Ok(String)` - A fact chosen uniformly at random from the cache
    /// * `Err(FactError::EmptyCache)` - If the cache is empty even after the
    ///   refresh attempt
    pub async fn random_fact(&mut self) -> Result<String, FactError> {
        if self.cache.is_empty() {
            self.refresh().await;
        }

        if self.cache.is_empty() {
            return Err(FactError::EmptyCache);
        }

        let index = rand::thread_rng().gen_range(0..self.cache.len());
        Ok(self.cache[index].clone())
    }

    /// Replaces the entire cache; the only way cache contents change
    fn replace_cache(&mut self, facts: Vec<String>) {
        self.cache = facts;
    }
}
