//! Name resolution.
//!
//! Targets are resolved by an external command (`dig +short` by default)
//! rather than an in-process resolver, and only IPv4-shaped output lines are
//! kept:
//! - [`Resolver`] runs the command per target with a timeout
//! - [`extract_ipv4_lines`] filters command output

mod extract;
mod resolution;

// Re-export public API
pub use extract::extract_ipv4_lines;
pub use resolution::Resolver;
