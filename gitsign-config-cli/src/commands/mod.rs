//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: Print the resolved configuration
//! - `get`: Print a single value by git config key
//! - `explain`: Print every value with the layer that set it
//! - `env_vars`: List the consumed environment variables
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod env_vars;
pub mod explain;
pub mod get;
pub mod show;

pub use completions::CompletionsCommand;
pub use env_vars::EnvVarsCommand;
pub use explain::ExplainCommand;
pub use get::GetCommand;
pub use show::ShowCommand;
