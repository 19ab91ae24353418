//! Build script for gitsign-config-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("gitsign-config")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect the resolved gitsign configuration")
        .long_about(
            "Print the configuration gitsign resolves from built-in defaults, git config \
             and SIGSTORE_*/GITSIGN_* environment variables",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("repo")
                .long("repo")
                .help("Run git in this repository instead of the current directory")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("config-file")
                .long("config-file")
                .help("Read a `git config --get-regexp` dump instead of running git")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("git")
                .long("git")
                .help("Git executable to run")
                .value_name("PATH")
                .global(true)
                .env("GITSIGN_CONFIG_GIT"),
        )
        .arg(
            Arg::new("no-env")
                .long("no-env")
                .help("Ignore SIGSTORE_* and GITSIGN_* environment overrides")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("show")
                .about("Print the resolved configuration")
                .long_about("Print the resolved configuration as text, JSON, YAML, dotenv or shell exports"),
            Command::new("get")
                .about("Print a single configuration value")
                .long_about("Print one value addressed by its git config key, e.g. gitsign.rekorMode"),
            Command::new("explain")
                .about("Print every value together with the layer that set it")
                .long_about("Show whether each value came from a default, git config or an environment variable"),
            Command::new("env-vars")
                .about("List the environment variables that override configuration")
                .long_about("List consumed SIGSTORE_* and GITSIGN_* variables, lowest precedence first"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or_else(|| io::Error::other("OUT_DIR not set"))?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("gitsign-config.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
