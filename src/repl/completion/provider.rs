//! Candidate provider for completion suggestions
//!
//! This module provides the traits and the default implementation for
//! assembling completion candidates. Candidates come from two places:
//! a fixed list of static candidates, and a dynamic source (for example
//! branch names) expanded through one or more template functions.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

/// Supplier of candidate base values, queried fresh on every request
///
/// Implementations may perform I/O. They must not fail: any error has to be
/// handled inside the source, which then returns an empty list.
pub trait DynamicSource: Send + Sync {
    /// Fetch the current values
    fn fetch(&self) -> Vec<String>;
}

impl<F> DynamicSource for F
where
    F: Fn() -> Vec<String> + Send + Sync,
{
    fn fetch(&self) -> Vec<String> {
        self()
    }
}

/// Trait for providing completion candidates
pub trait CandidateProvider: Send + Sync {
    /// Assemble the candidate set for `prefix`
    ///
    /// Implementations are not expected to filter by `prefix`; matching is
    /// left to the renderer.
    fn candidates(&self, prefix: &str) -> Vec<String>;
}

/// Template function turning a dynamic value into a candidate
///
/// The candidate is the fixed command prefix concatenated with the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    prefix: String,
}

impl CommandTemplate {
    /// Create a template from its command prefix, e.g. `"git merge branch "`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Apply the template to a value
    pub fn apply(&self, value: &str) -> String {
        let mut candidate = String::with_capacity(self.prefix.len() + value.len());
        candidate.push_str(&self.prefix);
        candidate.push_str(value);
        candidate
    }

    /// The command prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// Assemble candidates in priority order
///
/// 1. Every static candidate, in order
/// 2. For each template in order, the template applied to every dynamic value
///
/// The dynamic source is queried exactly once. Repeated candidates keep
/// their first occurrence. `prefix` does not narrow the result.
pub fn get_candidates(
    _prefix: &str,
    static_source: &[String],
    dynamic_source: &dyn DynamicSource,
    templates: &[CommandTemplate],
) -> Vec<String> {
    let dynamic_values = dynamic_source.fetch();

    let templated = templates
        .iter()
        .flat_map(|template| dynamic_values.iter().map(move |value| template.apply(value)));

    let mut seen = HashSet::new();
    static_source
        .iter()
        .cloned()
        .chain(templated)
        .filter(|candidate| seen.insert(candidate.clone()))
        .collect()
}

/// Candidate provider combining static candidates with templated dynamic values
pub struct TemplateCandidateProvider {
    /// Hard-coded candidates, offered first
    static_candidates: Vec<String>,
    /// Template functions applied to each dynamic value
    templates: Vec<CommandTemplate>,
    /// External supplier of base values
    source: Arc<dyn DynamicSource>,
}

impl TemplateCandidateProvider {
    /// Create a new candidate provider
    ///
    /// # Arguments
    /// * `static_candidates` - Candidates offered before any templated value
    /// * `templates` - Template functions, applied in order
    /// * `source` - Dynamic source queried on every request
    pub fn new(
        static_candidates: Vec<String>,
        templates: Vec<CommandTemplate>,
        source: Arc<dyn DynamicSource>,
    ) -> Self {
        Self {
            static_candidates,
            templates,
            source,
        }
    }

    /// Provider offering a fixed list only
    pub fn with_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            values.into_iter().map(Into::into).collect(),
            Vec::new(),
            Arc::new(Vec::<String>::new),
        )
    }

    /// The static candidates
    pub fn static_candidates(&self) -> &[String] {
        &self.static_candidates
    }

    /// The template functions
    pub fn templates(&self) -> &[CommandTemplate] {
        &self.templates
    }
}

impl CandidateProvider for TemplateCandidateProvider {
    fn candidates(&self, prefix: &str) -> Vec<String> {
        let candidates = get_candidates(
            prefix,
            &self.static_candidates,
            self.source.as_ref(),
            &self.templates,
        );
        debug!(prefix, count = candidates.len(), "assembled completion candidates");
        candidates
    }
}
