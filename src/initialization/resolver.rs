//! Collaborator initialization.
//!
//! Builds the resolver and probe from configuration, each backed by a
//! [`SystemCommand`] that launches the configured program.

use std::sync::Arc;

use crate::config::Config;
use crate::dns::Resolver;
use crate::external::SystemCommand;
use crate::probe::ScriptProbe;

/// Initializes the resolver for hostname lookups.
///
/// The configured resolver arguments come first and the target is appended
/// last, so the default configuration runs `dig +short <target>`.
pub fn init_resolver(config: &Config) -> Resolver {
    let command = SystemCommand::new(&config.resolver_command, config.resolver_args.clone());
    Resolver::new(Arc::new(command), config.resolver_timeout())
}

/// Initializes the registration/certificate probe.
pub fn init_probe(config: &Config) -> ScriptProbe {
    let command = SystemCommand::new(&config.probe_command, config.probe_args.clone());
    ScriptProbe::new(Arc::new(command), config.probe_timeout())
}
