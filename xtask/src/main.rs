// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Workspace automation for fieldsync
//!
//! ### Commands
//!
//! - `cargo xtask ci`: lint, dependency checks, build, and the full test suite
//! - `cargo xtask test`: unit and doc tests for every default package
//! - `cargo xtask test-package <name>`: tests for one workspace package,
//!   e.g. `fieldsync-connectivity` while iterating on the monitor
//!
//! The connectivity tests run on tokio's paused clock, so the debounce
//! delay never costs wall time and no extra infrastructure is needed.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, bail},
};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, deny, machete, build, test)
    CI,

    /// Build the workspace
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Generate an lcov coverage report
    #[command(visible_alias = "cov")]
    Coverage,

    /// Check dependency licenses and advisories
    #[command(visible_alias = "cd")]
    Deny,

    /// Check for unused dependencies
    #[command(visible_alias = "m")]
    Machete,

    /// Lint formatting, typos, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Lint markdown files
    #[command(visible_alias = "md")]
    LintMarkdown,

    /// Check for typos
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Apply clippy fixes
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Apply formatting
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Fix typos
    #[command(visible_alias = "typos")]
    FixTypos,

    /// Run unit and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run unit tests for all targets
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Run the tests of a single workspace package
    #[command(visible_alias = "tp")]
    TestPackage {
        /// Package name, e.g. `fieldsync-domain`
        package: String,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => run_cargo(&["build", "--all-targets", "--all-features"]),
            Self::Check => run_cargo(&["check", "--all-targets", "--all-features"]),
            Self::Coverage => coverage(),
            Self::Deny => run_cargo(&["deny", "check"]),
            Self::Machete => run_traced(&cmd!("cargo-machete")),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => run_cargo_nightly(&["fmt", "--all", "--check"]),
            Self::LintMarkdown => {
                run_traced(&cmd!("markdownlint-cli2", "**/*.md", "!target", "!**/target"))
            }
            Self::LintTypos => run_traced(&cmd!("typos")),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => run_cargo_nightly(&["fmt", "--all"]),
            Self::FixTypos => run_traced(&cmd!("typos", "-w")),
            Self::Test => test(),
            Self::TestDocs => run_cargo(&["test", "--doc", "--all-features"]),
            Self::TestLibs => run_cargo(&["test", "--all-targets", "--all-features"]),
            Self::TestPackage { package } => test_package(&package),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    Command::Deny.run()?;
    Command::Machete.run()?;
    Command::Build.run()?;
    test()
}

fn coverage() -> Result<()> {
    run_cargo(&[
        "llvm-cov",
        "--lcov",
        "--output-path",
        "target/lcov.info",
        "--all-features",
    ])
}

/// Lint everything; markdown failures only warn
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    Command::LintFormatting.run()?;
    Command::LintTypos.run()?;
    if let Err(err) = Command::LintMarkdown.run() {
        tracing::warn!("markdownlint reported issues: {err}");
    }
    Ok(())
}

fn lint_clippy() -> Result<()> {
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

fn fix_clippy() -> Result<()> {
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Build docs for each default package with docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    for package in default_packages()? {
        let expression = cmd(
            "cargo",
            ["doc", "--no-deps", "--all-features", "--package", package.as_str()],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings");
        run_traced(&expression)?;
    }
    Ok(())
}

/// Unit tests first, doc tests last because they are slow
fn test() -> Result<()> {
    Command::TestLibs.run()?;
    Command::TestDocs.run()
}

fn test_package(package: &str) -> Result<()> {
    let packages = default_packages()?;
    if !packages.iter().any(|name| name == package) {
        bail!(
            "unknown package '{package}', expected one of: {}",
            packages.join(", ")
        );
    }
    run_cargo(&["test", "--all-targets", "--package", package])
}

/// Names of the workspace's default members
fn default_packages() -> Result<Vec<String>> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;
    Ok(meta
        .workspace_default_packages()
        .into_iter()
        .map(|package| package.name.as_str().to_owned())
        .collect())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_traced(&cmd("cargo", args))
}

fn run_cargo_nightly(args: &[&str]) -> Result<()> {
    let expression = cmd("cargo", args)
        // CARGO is set because we're running inside a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly");
    run_traced(&expression)
}

fn run_traced(expression: &duct::Expression) -> Result<()> {
    expression.run_with_trace()?;
    Ok(())
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // Repeat the command; it may have scrolled off the screen
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
