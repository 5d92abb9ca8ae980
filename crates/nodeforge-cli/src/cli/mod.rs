//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.
//!
//! Nodeforge is single-purpose: one positional project name, the rest is
//! flags.  No subcommands.

use clap::{Args, Parser, ValueEnum};

use nodeforge_core::domain::Language as CoreLanguage;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "nodeforge",
    bin_name = "nodeforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant Node.js backend scaffolding",
    long_about = "Nodeforge generates a ready-to-run Node.js backend project \
                  structure in JavaScript or TypeScript.",
    after_help = "EXAMPLES:\n\
        \x20 nodeforge my-api                # pick the language interactively\n\
        \x20 nodeforge my-api --lang ts      # TypeScript, no prompt\n\
        \x20 nodeforge my-api --lang js --dry-run",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Scaffold arguments.
    #[command(flatten)]
    pub create: CreateArgs,
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for the scaffold run.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Project name.  Must be a single path segment; the project is created
    /// as `./<NAME>` in the current directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Language variant.  When omitted, an interactive prompt asks
    /// (defaulting to JavaScript); in non-interactive sessions the
    /// configured default applies.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        value_enum,
        help = "Language variant (skips the prompt)"
    )]
    pub language: Option<Language>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported language variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Language {
    /// Also accepted as `js`.
    #[value(alias = "js")]
    JavaScript,
    /// Also accepted as `ts`.
    #[value(alias = "ts")]
    TypeScript,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JavaScript => write!(f, "javascript"),
            Self::TypeScript => write!(f, "typescript"),
        }
    }
}

impl From<Language> for CoreLanguage {
    fn from(lang: Language) -> Self {
        match lang {
            Language::JavaScript => CoreLanguage::JavaScript,
            Language::TypeScript => CoreLanguage::TypeScript,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
