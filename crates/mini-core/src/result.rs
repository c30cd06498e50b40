//! Result envelopes returned by jobs and features.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MiniResult;

/// Outcome of a single job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult<T = Value> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl<T> JobResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            metadata: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            metadata: None,
        }
    }

    /// Convert an execution outcome, keeping the error message on failure.
    pub fn from_outcome(outcome: MiniResult<T>) -> Self {
        match outcome {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failure(e.to_string()),
        }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Outcome of a feature, including the results of the jobs it ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureResult<T = Value> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<JobResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl<T> FeatureResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            jobs: Vec::new(),
            error: None,
            metadata: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            jobs: Vec::new(),
            error: Some(error.into()),
            metadata: None,
        }
    }

    /// Attach job results. A failed job marks the whole feature as failed.
    pub fn with_jobs(mut self, jobs: Vec<JobResult>) -> Self {
        if jobs.iter().any(|job| !job.success) {
            self.success = false;
        }
        self.jobs = jobs;
        self
    }
}
