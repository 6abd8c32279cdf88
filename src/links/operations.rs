//! Core link check operations: HEAD with GET fallback, run concurrently.

use std::time::Duration;
use tracing::{debug, warn};

use crate::constants::{LINK_CHECK_USER_AGENT, MAX_LINK_REDIRECTS};

use super::state::{CheckMethod, LinkCheckResult, LinkReport, LinkTarget};

/// Build the shared HTTP agent. The timeout bounds each request as a whole.
pub fn build_agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(timeout)
        .redirects(MAX_LINK_REDIRECTS)
        .user_agent(LINK_CHECK_USER_AGENT)
        .build()
}

/// What a single request produced.
enum Attempt {
    Response { status: u16, final_url: String },
    Failed(String),
}

impl Attempt {
    fn is_success(&self) -> bool {
        matches!(self, Attempt::Response { status, .. } if (200..300).contains(status))
    }
}

fn attempt(agent: &ureq::Agent, method: CheckMethod, url: &str) -> Attempt {
    let request = match method {
        CheckMethod::Head => agent.head(url),
        CheckMethod::Get => agent.get(url),
    };

    match request.call() {
        Ok(resp) => Attempt::Response {
            status: resp.status(),
            final_url: resp.get_url().to_string(),
        },
        // ureq reports 4xx/5xx as errors but still hands back the response
        Err(ureq::Error::Status(status, resp)) => Attempt::Response {
            status,
            final_url: resp.get_url().to_string(),
        },
        Err(e) => Attempt::Failed(e.to_string()),
    }
}

/// Check one target: HEAD first, then GET if HEAD failed or was not 2xx.
pub fn check_target(agent: &ureq::Agent, target: &LinkTarget) -> LinkCheckResult {
    let head = attempt(agent, CheckMethod::Head, &target.url);
    match head {
        Attempt::Response { status, final_url } if (200..300).contains(&status) => {
            return LinkCheckResult::reachable(target, CheckMethod::Head, status, final_url);
        }
        Attempt::Response { status, .. } => {
            debug!("HEAD returned {} for {}, retrying with GET", status, target.name);
        }
        Attempt::Failed(ref message) => {
            warn!("HEAD failed for {}: {}", target.name, message);
        }
    }

    let get = attempt(agent, CheckMethod::Get, &target.url);
    let ok = get.is_success();
    match get {
        Attempt::Response { status, final_url } if ok => {
            LinkCheckResult::reachable(target, CheckMethod::Get, status, final_url)
        }
        Attempt::Response { status, final_url } => {
            LinkCheckResult::bad_status(target, CheckMethod::Get, status, final_url)
        }
        Attempt::Failed(message) => LinkCheckResult::error(target, CheckMethod::Get, message),
    }
}

/// Check every target concurrently and collect the results in input order.
pub fn check_all(targets: &[LinkTarget], timeout: Duration) -> LinkReport {
    let agent = build_agent(timeout);

    let results: Vec<LinkCheckResult> = std::thread::scope(|scope| {
        let handles: Vec<_> = targets
            .iter()
            .map(|target| {
                let agent = &agent;
                scope.spawn(move || check_target(agent, target))
            })
            .collect();

        handles
            .into_iter()
            .zip(targets)
            .map(|(handle, target)| {
                handle.join().unwrap_or_else(|_| {
                    LinkCheckResult::error(
                        target,
                        CheckMethod::Get,
                        "link check thread panicked".to_string(),
                    )
                })
            })
            .collect()
    });

    LinkReport { results }
}
