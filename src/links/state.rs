//! Link check targets and results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A URL that must stay reachable for the site to work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTarget {
    pub name: String,
    pub url: String,
}

impl LinkTarget {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckMethod {
    Head,
    Get,
}

impl fmt::Display for CheckMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckMethod::Head => f.write_str("HEAD"),
            CheckMethod::Get => f.write_str("GET"),
        }
    }
}

/// Result of checking one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkCheckResult {
    pub name: String,
    pub url: String,
    pub ok: bool,
    /// Method of the last attempt made
    pub method: CheckMethod,
    /// HTTP status of the last attempt, 0 when no response arrived
    pub status: u16,
    /// URL after following redirects
    pub final_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LinkCheckResult {
    pub fn reachable(
        target: &LinkTarget,
        method: CheckMethod,
        status: u16,
        final_url: String,
    ) -> Self {
        Self {
            name: target.name.clone(),
            url: target.url.clone(),
            ok: true,
            method,
            status,
            final_url,
            error: None,
        }
    }

    pub fn bad_status(
        target: &LinkTarget,
        method: CheckMethod,
        status: u16,
        final_url: String,
    ) -> Self {
        Self {
            ok: false,
            ..Self::reachable(target, method, status, final_url)
        }
    }

    pub fn error(target: &LinkTarget, method: CheckMethod, msg: String) -> Self {
        Self {
            name: target.name.clone(),
            url: target.url.clone(),
            ok: false,
            method,
            status: 0,
            final_url: target.url.clone(),
            error: Some(msg),
        }
    }

    /// One report line, e.g. `[OK] Windows MSI (HEAD 200) -> https://...`.
    pub fn report_line(&self) -> String {
        let tag = if self.ok { "[OK]" } else { "[FAIL]" };
        let reason = match &self.error {
            Some(error) => format!(" error=\"{}\"", error),
            None => String::new(),
        };
        format!(
            "{} {} ({} {}) -> {}{}",
            tag, self.name, self.method, self.status, self.final_url, reason
        )
    }
}

/// Aggregate of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct LinkReport {
    pub results: Vec<LinkCheckResult>,
}

impl LinkReport {
    pub fn failures(&self) -> impl Iterator<Item = &LinkCheckResult> {
        self.results.iter().filter(|r| !r.ok)
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn all_ok(&self) -> bool {
        self.failure_count() == 0
    }
}
