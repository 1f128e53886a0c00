//! Loading and validating policy bundles from disk.

use std::path::{Path, PathBuf};

use banyan_core::{DataLayout, GovernorId};
use serde_json::Value;
use tracing::debug;

use crate::bundle::PolicyBundle;
use crate::error::{PolicyError, PolicyResult};
use crate::registry;

/// Resolves governors to their policy bundles.
///
/// Stateless apart from the policy directory: every `resolve` call re-reads
/// both documents, so there is no cache to invalidate when policies change.
pub struct PolicyResolver {
    policy_dir: PathBuf,
}

impl PolicyResolver {
    pub fn new(layout: &DataLayout) -> Self {
        Self {
            policy_dir: layout.policy_dir.clone(),
        }
    }

    pub fn with_policy_dir(policy_dir: impl Into<PathBuf>) -> Self {
        Self {
            policy_dir: policy_dir.into(),
        }
    }

    /// Load and validate the policy bundle for a governor.
    ///
    /// Fails with [`PolicyError::UnknownGovernor`] for unregistered names,
    /// [`PolicyError::MissingPolicyFile`] when an expected document is
    /// absent, and [`PolicyError::InvalidPolicy`] when a document is not a
    /// JSON object carrying a string `version`.
    pub fn resolve(&self, governor: &GovernorId) -> PolicyResult<PolicyBundle> {
        let entry = registry::lookup(governor).ok_or_else(|| PolicyError::UnknownGovernor {
            governor: governor.clone(),
        })?;

        let domain_policy =
            self.read_policy(governor, &self.policy_dir.join(entry.domain_policy_file))?;
        let copilot_policy =
            self.read_policy(governor, &self.policy_dir.join(entry.copilot_policy_file))?;

        let bundle = PolicyBundle {
            governor: governor.clone(),
            domain_policy,
            copilot_policy,
        };
        debug!(governor = %governor, version = %bundle.version(), "policy bundle resolved");
        Ok(bundle)
    }

    fn read_policy(&self, governor: &GovernorId, path: &Path) -> PolicyResult<Value> {
        if !path.exists() {
            return Err(PolicyError::MissingPolicyFile {
                governor: governor.clone(),
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let document: Value =
            serde_json::from_str(&contents).map_err(|err| PolicyError::InvalidPolicy {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
        validate_document(path, &document)?;
        Ok(document)
    }
}

/// A usable policy document is a JSON object with a string `version`.
/// Everything else in the document is opaque to the sweep.
fn validate_document(path: &Path, document: &Value) -> PolicyResult<()> {
    let object = document
        .as_object()
        .ok_or_else(|| PolicyError::InvalidPolicy {
            path: path.to_path_buf(),
            reason: "document is not a JSON object".to_string(),
        })?;

    match object.get("version") {
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(PolicyError::InvalidPolicy {
            path: path.to_path_buf(),
            reason: "version field is not a string".to_string(),
        }),
        None => Err(PolicyError::InvalidPolicy {
            path: path.to_path_buf(),
            reason: "missing version field".to_string(),
        }),
    }
}
