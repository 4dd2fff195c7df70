//! # Checks & Run Accounting
//!
//! A check is one request whose pass/fail is decided by the response status
//! alone. [`ApiTester::run_check`] is the only place counters move, and it
//! never returns an error: transport problems become failed checks.
//!
//! Scenarios live in [`scenarios`], the fixed run order in [`runner`].

pub mod scenarios;
pub mod runner;

#[cfg(test)]
pub(crate) mod mock_backend;

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::cli::RunConfig;
use crate::http::client::{build_client, send_request};
use crate::http::request::CheckRequest;
use crate::http::response::ResponseBody;

const TEST_PHONE_PREFIX: &str = "5511999";

/// A phone number unlikely to collide with data left by earlier runs.
pub fn generate_test_phone(now: SystemTime) -> String {
    let seconds = now.duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    format!("{TEST_PHONE_PREFIX}{}", seconds % 1_000_000)
}

/// Mutable state of one run. Counters only grow, and `passed <= attempted`.
#[derive(Debug, Clone)]
pub struct RunContext {
    base_url: String,
    attempted: usize,
    passed: usize,
    test_phone: String,
    created_lead_id: Option<String>,
}

impl RunContext {
    pub fn new(base_url: impl Into<String>, test_phone: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            attempted: 0,
            passed: 0,
            test_phone: test_phone.into(),
            created_lead_id: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    #[cfg(test)]
    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn test_phone(&self) -> &str {
        &self.test_phone
    }

    pub fn created_lead_id(&self) -> Option<&str> {
        self.created_lead_id.as_deref()
    }

    pub fn record_attempt(&mut self) {
        self.attempted += 1;
    }

    pub fn record_pass(&mut self) {
        debug_assert!(self.passed < self.attempted);
        self.passed += 1;
    }

    pub fn set_created_lead_id(&mut self, id: impl Into<String>) {
        self.created_lead_id = Some(id.into());
    }

    pub fn report(&self) -> RunReport {
        RunReport {
            attempted: self.attempted,
            passed: self.passed,
        }
    }
}

/// What a check hands back to its scenario. `body` is `None` when no
/// response was obtained or the scenario was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub success: bool,
    pub body: Option<ResponseBody>,
}

impl CheckOutcome {
    fn failed() -> Self {
        Self {
            success: false,
            body: None,
        }
    }
}

/// Summary report for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunReport {
    pub attempted: usize,
    pub passed: usize,
}

impl RunReport {
    /// Percentage of executed checks that passed; `None` if nothing ran.
    pub fn success_rate(&self) -> Option<f64> {
        (self.attempted > 0).then(|| self.passed as f64 / self.attempted as f64 * 100.0)
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.attempted
    }
}

/// Sends checks against one backend and keeps the run's tally.
#[derive(Debug)]
pub struct ApiTester {
    client: reqwest::Client,
    context: RunContext,
}

impl ApiTester {
    pub fn new(config: &RunConfig) -> Result<Self, reqwest::Error> {
        let client = build_client(config.timeout)?;
        let context = RunContext::new(&config.base_url, generate_test_phone(SystemTime::now()));
        Ok(Self::with_context(client, context))
    }

    pub fn with_context(client: reqwest::Client, context: RunContext) -> Self {
        Self { client, context }
    }

    #[cfg(test)]
    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Execute one named check and compare its status with `expected_status`.
    pub async fn run_check(
        &mut self,
        name: &str,
        request: CheckRequest,
        expected_status: u16,
    ) -> CheckOutcome {
        self.context.record_attempt();
        println!("\n🔍 Testing {name}...");

        let response = match send_request(&self.client, self.context.base_url(), &request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(check = name, error = %err, "check did not get a response");
                println!("❌ Failed - Error: {err}");
                return CheckOutcome::failed();
            }
        };

        debug!(
            check = name,
            status = response.status,
            duration_ms = response.duration_ms as u64,
            size_bytes = response.size_bytes,
            "response received"
        );
        println!("{}", response.body);

        let success = response.status == expected_status;
        if success {
            self.context.record_pass();
            println!("✅ Passed - Status: {}", response.status);
        } else {
            println!(
                "❌ Failed - Expected {expected_status}, got {} {}",
                response.status, response.status_text
            );
        }

        CheckOutcome {
            success,
            body: Some(response.body),
        }
    }
}
