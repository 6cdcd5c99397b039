use std::path::Path;

use changed_files_ci::{EventContext, is_null_sha};
use changed_files_git::EMPTY_TREE_SHA;
use tracing::debug;

use crate::traits::GitProvider;
use crate::{ResolutionError, Result};

/// Starting point of the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseRef {
    Commit(String),
    /// `head` is a root commit; everything in it counts as added.
    EmptyTree,
}

impl BaseRef {
    #[must_use]
    pub fn commit(&self) -> Option<&str> {
        match self {
            Self::Commit(sha) => Some(sha),
            Self::EmptyTree => None,
        }
    }

    #[must_use]
    pub fn sha(&self) -> &str {
        match self {
            Self::Commit(sha) => sha,
            Self::EmptyTree => EMPTY_TREE_SHA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRefs {
    pub base: BaseRef,
    pub head: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BaseSource {
    Ref(String),
    ParentOfHead,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RefPlan {
    base: BaseSource,
    head: String,
}

/// Resolves the comparison range to commit ids.
///
/// Explicit `base`/`head` win per side; missing sides are inferred from the
/// event. The event is only consulted when a side is missing.
///
/// # Errors
///
/// Returns [`ResolutionError`] if a side can be neither taken from the inputs
/// nor inferred, or if a reference does not resolve to a commit.
pub fn resolve_refs<G: GitProvider>(
    git_provider: &G,
    repo_path: &Path,
    base: Option<&str>,
    head: Option<&str>,
    event: Option<&EventContext>,
) -> Result<ResolvedRefs> {
    let plan = plan_refs(base, head, event)?;
    debug!(base = ?plan.base, head = %plan.head, "comparison range before resolution");

    let head = git_provider.resolve_commit(repo_path, &plan.head)?;
    let base = match plan.base {
        BaseSource::Ref(refspec) => BaseRef::Commit(git_provider.resolve_commit(repo_path, &refspec)?),
        BaseSource::ParentOfHead => git_provider
            .parent_commit(repo_path, &head)?
            .map_or(BaseRef::EmptyTree, BaseRef::Commit),
    };

    Ok(ResolvedRefs { base, head })
}

fn plan_refs(
    base: Option<&str>,
    head: Option<&str>,
    event: Option<&EventContext>,
) -> std::result::Result<RefPlan, ResolutionError> {
    if let (Some(base), Some(head)) = (base, head) {
        return Ok(RefPlan {
            base: BaseSource::Ref(base.to_string()),
            head: head.to_string(),
        });
    }

    let Some(event) = event else {
        let input = if head.is_none() { "head-sha" } else { "base-sha" };
        return Err(ResolutionError::MissingReference { input });
    };

    let inferred = plan_from_event(event)?;
    Ok(RefPlan {
        base: base.map_or(inferred.base, |b| BaseSource::Ref(b.to_string())),
        head: head.map_or(inferred.head, str::to_string),
    })
}

fn plan_from_event(event: &EventContext) -> std::result::Result<RefPlan, ResolutionError> {
    if event.is_pull_request() {
        let pull_request = event.payload.pull_request.as_ref().ok_or_else(|| {
            ResolutionError::MissingPullRequest {
                event: event.name.clone(),
            }
        })?;
        return Ok(RefPlan {
            base: BaseSource::Ref(pull_request.base.sha.clone()),
            head: pull_request.head.sha.clone(),
        });
    }

    if event.is_push() {
        return Ok(RefPlan {
            base: present_sha(event.payload.before.as_deref())
                .map_or(BaseSource::ParentOfHead, BaseSource::Ref),
            head: present_sha(event.payload.after.as_deref())
                .unwrap_or_else(|| "HEAD".to_string()),
        });
    }

    Err(ResolutionError::UnsupportedEvent {
        name: event.name.clone(),
    })
}

fn present_sha(sha: Option<&str>) -> Option<String> {
    sha.filter(|s| !is_null_sha(s)).map(str::to_string)
}
