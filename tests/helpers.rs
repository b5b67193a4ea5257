// Shared test doubles for the resolver command and the probe.
//
// Included by other test files with `mod helpers;`.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use domain_report::external::ExternalCommand;
use domain_report::probe::{Probe, ProbeOutput};
use domain_report::{CommandError, ProbeError};

/// Resolver stand-in answering from a fixed table keyed by target.
pub struct StubResolver {
    answers: HashMap<String, String>,
}

impl StubResolver {
    pub fn new(answers: &[(&str, &str)]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(target, output)| (target.to_string(), output.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl ExternalCommand for StubResolver {
    async fn run(&self, args: &[String], _timeout: Duration) -> Result<String, CommandError> {
        let target = args.last().cloned().unwrap_or_default();
        self.answers
            .get(&target)
            .cloned()
            .ok_or_else(|| CommandError::Failed {
                program: "stub".to_string(),
                status: "exit status: 9".to_string(),
                stderr: format!("unknown target {target}"),
            })
    }

    fn program(&self) -> &str {
        "stub"
    }
}

/// Probe stand-in returning fixed text, or failing when built with `failing`.
pub struct StubProbe {
    output: Option<ProbeOutput>,
    #[allow(dead_code)] // Used by some test files
    pub calls: Mutex<Vec<(Vec<String>, Vec<String>)>>,
}

impl StubProbe {
    #[allow(dead_code)] // Used by some test files
    pub fn returning(whois: &str, certificates: &str) -> Self {
        Self {
            output: Some(ProbeOutput {
                whois: whois.to_string(),
                certificates: certificates.to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[allow(dead_code)] // Used by some test files
    pub fn failing() -> Self {
        Self {
            output: None,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Probe for StubProbe {
    async fn probe(&self, entries: &[String], domains: &[String]) -> Result<ProbeOutput, ProbeError> {
        self.calls
            .lock()
            .expect("probe call log poisoned")
            .push((entries.to_vec(), domains.to_vec()));
        self.output.clone().ok_or_else(|| {
            ProbeError::Command(CommandError::Failed {
                program: "bash".to_string(),
                status: "exit status: 127".to_string(),
                stderr: "whois: command not found".to_string(),
            })
        })
    }
}
