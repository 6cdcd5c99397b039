use std::path::Path;

use changed_files_ci::EventContext;
use changed_files_filter::{FilterSet, MatchResult};
use changed_files_git::{FileChange, FileStatus};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};

use super::resolve::{ResolvedRefs, resolve_refs};
use crate::traits::GitProvider;
use crate::types::output_names;
use crate::{ChangedFiles, ConfigError, Result};

pub struct DetectInput {
    pub base: Option<String>,
    pub head: Option<String>,
    /// Filter lines; empty selects every path.
    pub filters: Vec<String>,
    pub event: Option<EventContext>,
}

#[derive(Debug)]
pub struct DetectOutput {
    pub refs: ResolvedRefs,
    /// Every change in the range, matched or not.
    pub changes: Vec<FileChange>,
    pub matches: MatchResult,
    /// Changes that matched at least one filter, by status.
    pub files: ChangedFiles,
    /// Whether each named filter matched, in declaration order.
    pub named_filters: IndexMap<String, bool>,
}

impl DetectOutput {
    #[must_use]
    pub fn any_changed(&self) -> bool {
        self.matches.any_changed()
    }
}

pub struct DetectOperation<G> {
    git_provider: G,
}

impl<G> DetectOperation<G>
where
    G: GitProvider,
{
    pub fn new(git_provider: G) -> Self {
        Self { git_provider }
    }

    /// # Errors
    ///
    /// Returns a configuration error if the filters are invalid, and a
    /// resolution error if the comparison range cannot be resolved or diffed.
    pub fn execute(&self, repo_path: &Path, input: &DetectInput) -> Result<DetectOutput> {
        let filters = build_filters(&input.filters)?;
        debug!(count = filters.len(), "parsed filters");

        let refs = resolve_refs(
            &self.git_provider,
            repo_path,
            input.base.as_deref(),
            input.head.as_deref(),
            input.event.as_ref(),
        )
        .inspect_err(|_| self.warn_if_shallow(repo_path))?;
        info!(base = %refs.base.sha(), head = %refs.head, "comparing commits");

        let changes = self
            .git_provider
            .changed_files(repo_path, refs.base.commit(), &refs.head)
            .inspect_err(|_| self.warn_if_shallow(repo_path))?;

        let paths = matchable_paths(&changes);
        let matches = filters.match_paths(&paths);

        let mut files = ChangedFiles::default();
        for change in changes.iter().filter(|c| change_matches(&filters, c)) {
            files.push(change);
        }

        let named_filters = filters
            .named()
            .map(|filter| (filter.name().to_string(), matches.contains(filter.name())))
            .collect();

        info!(
            changed = changes.len(),
            matched = files.len(),
            any_changed = matches.any_changed(),
            "detected changed files"
        );

        Ok(DetectOutput {
            refs,
            changes,
            matches,
            files,
            named_filters,
        })
    }

    fn warn_if_shallow(&self, repo_path: &Path) {
        if let Ok(true) = self.git_provider.is_shallow(repo_path) {
            warn!("repository is a shallow clone; fetch more history (e.g. fetch-depth: 0)");
        }
    }
}

/// Parses filter lines, falling back to [`FilterSet::match_everything`] when
/// they hold no patterns.
///
/// # Errors
///
/// Returns a configuration error for invalid patterns and for named filters
/// that reuse a built-in output name.
pub fn build_filters(lines: &[String]) -> Result<FilterSet> {
    let filters = FilterSet::from_lines(lines)?;
    if filters.is_empty() {
        return Ok(FilterSet::match_everything()?);
    }

    if let Some(filter) = filters
        .named()
        .find(|filter| output_names::is_reserved(filter.name()))
    {
        return Err(ConfigError::ReservedFilterName {
            name: filter.name().to_string(),
        }
        .into());
    }

    Ok(filters)
}

/// Every path touched by the range: the current path of each change, plus
/// the path a renamed file moved away from.
fn matchable_paths(changes: &[FileChange]) -> Vec<String> {
    let mut paths = IndexSet::new();
    for change in changes {
        paths.insert(change.path_str());
        if change.status == FileStatus::Renamed {
            if let Some(old) = change.old_path_str() {
                paths.insert(old);
            }
        }
    }
    paths.into_iter().collect()
}

/// A rename matches when either side of it does.
fn change_matches(filters: &FilterSet, change: &FileChange) -> bool {
    if filters.matches_any(&change.path_str()) {
        return true;
    }

    change.status == FileStatus::Renamed
        && change
            .old_path_str()
            .is_some_and(|old| filters.matches_any(&old))
}
