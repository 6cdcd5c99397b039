use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{EnvSource, EventError};

/// The subset of a webhook payload needed to pick a comparison range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub after: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub number: Option<u64>,
    pub base: CommitRef,
    pub head: CommitRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitRef {
    pub sha: String,
    #[serde(default, rename = "ref")]
    pub ref_name: Option<String>,
}

/// Name and payload of the event that triggered the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    pub name: String,
    pub payload: EventPayload,
}

impl EventContext {
    #[must_use]
    pub fn new(name: impl Into<String>, payload: EventPayload) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Reads `GITHUB_EVENT_NAME` and the payload at `GITHUB_EVENT_PATH`.
    /// Returns `None` outside of a workflow run. A known event name without a
    /// payload file yields an empty payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload file exists but cannot be read or parsed.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Result<Option<Self>, EventError> {
        let Some(name) = env.var("GITHUB_EVENT_NAME").filter(|n| !n.is_empty()) else {
            return Ok(None);
        };

        let payload = match env.var("GITHUB_EVENT_PATH").filter(|p| !p.is_empty()) {
            Some(path) => read_payload(Path::new(&path))?,
            None => EventPayload::default(),
        };

        Ok(Some(Self::new(name, payload)))
    }

    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        matches!(self.name.as_str(), "pull_request" | "pull_request_target")
    }

    #[must_use]
    pub fn is_push(&self) -> bool {
        self.name == "push"
    }
}

fn read_payload(path: &Path) -> Result<EventPayload, EventError> {
    let content = std::fs::read_to_string(path).map_err(|source| EventError::Read {
        path: PathBuf::from(path),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| EventError::Parse {
        path: PathBuf::from(path),
        source,
    })
}

/// `true` for an absent-commit marker: empty, or all zeros as sent for the
/// `before` of a branch's first push.
#[must_use]
pub fn is_null_sha(sha: &str) -> bool {
    sha.is_empty() || sha.bytes().all(|b| b == b'0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapEnv;
    use std::fs;
    use tempfile::TempDir;

    const PULL_REQUEST_EVENT: &str = r#"{
        "action": "opened",
        "number": 123,
        "pull_request": {
            "number": 123,
            "base": {"ref": "main", "sha": "base-sha-12345"},
            "head": {"ref": "feature", "sha": "head-sha-67890"}
        }
    }"#;

    const PUSH_EVENT: &str = r#"{
        "ref": "refs/heads/main",
        "before": "0000000000000000000000000000000000000000",
        "after": "head-sha-67890",
        "commits": []
    }"#;

    fn env_with_payload(dir: &TempDir, name: &str, payload: &str) -> anyhow::Result<MapEnv> {
        let path = dir.path().join("event.json");
        fs::write(&path, payload)?;
        Ok(MapEnv::new()
            .with("GITHUB_EVENT_NAME", name)
            .with("GITHUB_EVENT_PATH", &path.to_string_lossy()))
    }

    #[test]
    fn no_event_name_means_no_context() -> anyhow::Result<()> {
        assert_eq!(EventContext::from_env(&MapEnv::new())?, None);
        Ok(())
    }

    #[test]
    fn parses_pull_request_payload() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let env = env_with_payload(&dir, "pull_request", PULL_REQUEST_EVENT)?;

        let event = EventContext::from_env(&env)?.expect("event context present");
        let pr = event.payload.pull_request.as_ref().expect("pull request present");

        assert!(event.is_pull_request());
        assert_eq!(pr.number, Some(123));
        assert_eq!(pr.base.sha, "base-sha-12345");
        assert_eq!(pr.head.sha, "head-sha-67890");
        assert_eq!(pr.head.ref_name.as_deref(), Some("feature"));
        Ok(())
    }

    #[test]
    fn parses_push_payload() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let env = env_with_payload(&dir, "push", PUSH_EVENT)?;

        let event = EventContext::from_env(&env)?.expect("event context present");

        assert!(event.is_push());
        assert!(event.payload.pull_request.is_none());
        assert_eq!(event.payload.after.as_deref(), Some("head-sha-67890"));
        assert!(event.payload.before.as_deref().is_some_and(is_null_sha));
        Ok(())
    }

    #[test]
    fn event_without_payload_file_has_empty_payload() -> anyhow::Result<()> {
        let env = MapEnv::new().with("GITHUB_EVENT_NAME", "push");

        let event = EventContext::from_env(&env)?.expect("event context present");

        assert_eq!(event.payload, EventPayload::default());
        Ok(())
    }

    #[test]
    fn missing_payload_file_is_a_read_error() {
        let env = MapEnv::new()
            .with("GITHUB_EVENT_NAME", "push")
            .with("GITHUB_EVENT_PATH", "/nonexistent/event.json");

        let err = EventContext::from_env(&env).expect_err("missing file should fail");
        assert!(matches!(err, EventError::Read { .. }));
    }

    #[test]
    fn malformed_payload_is_a_parse_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let env = env_with_payload(&dir, "push", "{not json")?;

        let err = EventContext::from_env(&env).expect_err("malformed payload should fail");
        assert!(matches!(err, EventError::Parse { .. }));
        Ok(())
    }

    #[test]
    fn pull_request_target_counts_as_pull_request() {
        let event = EventContext::new("pull_request_target", EventPayload::default());
        assert!(event.is_pull_request());
        assert!(!event.is_push());
    }

    #[test]
    fn null_sha_detection() {
        assert!(is_null_sha(""));
        assert!(is_null_sha("0000000000000000000000000000000000000000"));
        assert!(!is_null_sha("4b825dc642cb6eb9a060e54bf8d69288fbee4904"));
    }
}
