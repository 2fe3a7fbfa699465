//! Bilingual site admin CLI
//!
//! ## Usage
//!
//! ```bash
//! bilingual-admin resolve /he/about
//! bilingual-admin translate he nav.products
//! bilingual-admin check-i18n
//! bilingual-admin check-content src/content
//! bilingual-admin theme --format json
//! bilingual-admin sources
//! ```

mod commands;

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context as _;
use bilingual_conf::SiteSettings;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

const DEFAULT_SETTINGS_FILE: &str = "site.toml";

#[derive(Parser)]
#[command(name = "bilingual-admin")]
#[command(about = "Bilingual site checks and exports", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,

	/// Settings file (defaults to ./site.toml when present)
	#[arg(long, value_name = "PATH", env = "BILINGUAL_SETTINGS", global = true)]
	settings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the locale a URL path resolves to
	Resolve {
		#[arg(value_name = "PATH")]
		path: String,
	},

	/// Print the translation of a message key
	Translate {
		#[arg(value_name = "LOCALE")]
		locale: String,

		#[arg(value_name = "KEY")]
		key: String,
	},

	/// Validate the string table and report per-locale coverage
	CheckI18n,

	/// Load and validate every content collection
	CheckContent {
		/// Content root (defaults to `[content] dir`)
		#[arg(value_name = "DIR")]
		dir: Option<PathBuf>,
	},

	/// Print the design tokens
	Theme {
		#[arg(long, value_enum, default_value_t = ThemeFormat::Css)]
		format: ThemeFormat,
	},

	/// List files matched by the theme's content globs
	Sources {
		/// Project root (defaults to the settings file's directory)
		#[arg(value_name = "ROOT")]
		root: Option<PathBuf>,
	},
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeFormat {
	Css,
	Json,
}

fn init_tracing(verbosity: u8) {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.init();
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<SiteSettings> {
	match path {
		Some(path) => SiteSettings::from_file(path)
			.with_context(|| format!("failed to load settings from {}", path.display())),
		None => {
			let default = Path::new(DEFAULT_SETTINGS_FILE);
			if default.is_file() {
				Ok(SiteSettings::from_file(default)?)
			} else {
				tracing::debug!("no {DEFAULT_SETTINGS_FILE}; using built-in settings");
				Ok(SiteSettings::default())
			}
		}
	}
}

fn run(cli: Cli) -> anyhow::Result<()> {
	let settings = load_settings(cli.settings.as_deref())?;
	let mut out = io::stdout().lock();

	match cli.command {
		Commands::Resolve { path } => commands::resolve(&settings, &path, &mut out),
		Commands::Translate { locale, key } => {
			commands::translate(&settings, &locale, &key, &mut out)
		}
		Commands::CheckI18n => commands::check_i18n(&settings, &mut out),
		Commands::CheckContent { dir } => {
			let dir = dir.unwrap_or_else(|| settings.content_dir());
			commands::check_content(&settings, &dir, &mut out)
		}
		Commands::Theme { format } => commands::theme(&settings, format, &mut out),
		Commands::Sources { root } => {
			let root = root.unwrap_or_else(|| settings.base_dir.clone());
			commands::sources(&settings, &root, &mut out)
		}
	}
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	if let Err(e) = run(cli) {
		eprintln!("{}: {:#}", "Error".red(), e);
		process::exit(1);
	}
}
