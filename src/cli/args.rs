//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Folio portfolio and blog generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site with sample content
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Build the site for production
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Build, then serve the output with search and contact endpoints
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Query posts, projects or resolved sections as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Minify the HTML and XML output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable feed generation
    #[arg(short = 'F', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub feed: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override site URL for deployment.
    ///
    /// The path component is used as the URL prefix for subdirectory
    /// deployments, e.g. `--site-url https://example.github.io/portfolio`.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// What `query` reports on.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTarget {
    /// Blog posts with localized title and description
    Posts,
    /// Projects with localized description
    Projects,
    /// Resolved sections of one post (requires --slug)
    Sections,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// What to query
    #[arg(value_enum)]
    pub target: QueryTarget,

    /// Post slug (sections) or project id (projects) to select
    #[arg(short, long)]
    pub slug: Option<String>,

    /// Locale to resolve text in (default: the site's default locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Only posts with this tag, or projects with this technology
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Case-insensitive search over post title and description
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from(["folio", "build", "-m", "--feed", "false", "-V"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build_args.minify, Some(true));
        assert_eq!(build_args.feed, Some(false));
        assert!(build_args.verbose);
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["folio", "serve", "-p", "8080", "-i", "0.0.0.0"]);
        assert!(cli.is_serve());
        let Commands::Serve { port, interface, .. } = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(port, Some(8080));
        assert_eq!(interface, Some("0.0.0.0".parse().unwrap()));
    }

    #[test]
    fn test_parse_query() {
        let cli = Cli::parse_from(["folio", "q", "sections", "-s", "binary-basics", "-l", "ar", "-p"]);
        let Commands::Query { args } = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.target, QueryTarget::Sections);
        assert_eq!(args.slug.as_deref(), Some("binary-basics"));
        assert_eq!(args.locale.as_deref(), Some("ar"));
        assert!(args.pretty);
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::parse_from(["folio", "init", "my-site"]);
        assert!(cli.is_init());
    }
}
