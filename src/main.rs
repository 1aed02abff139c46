use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ColorChoice, Parser};
use colored::Colorize;
use regex_rename::{run, ConsoleReporter, RenameOptions};
use std::fmt::Display;
use std::process;

#[derive(Parser)]
#[command(name = "regex-rename")]
#[command(about = "Rename files with a sed-style regex substitution", long_about = None)]
#[command(version)]
#[command(after_help = "Examples:
  regex-rename -v 's/_old/_new/' '*.txt'
  regex-rename -n -r 's/(\\d+)-(\\w+)/$2-$1/' photos
  regex-rename -i 's/\\.JPEG$/\\.jpg/' '*.jpeg'")]
struct Cli {
    /// Dry run - show what would be renamed
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Recursive - include subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Ignore case in pattern matching
    #[arg(short, long)]
    ignore_case: bool,

    /// Verbose - show renamed files
    #[arg(short, long)]
    verbose: bool,

    /// When to colorize warnings and errors
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorChoice,

    /// Substitution pattern followed by files or glob patterns. Flags are
    /// only recognised before the pattern.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    fn options(&self) -> RenameOptions {
        RenameOptions {
            dry_run: self.dry_run,
            recursive: self.recursive,
            ignore_case: self.ignore_case,
            show_changes: self.verbose,
        }
    }
}

fn main() {
    setup_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let message = err.to_string();
            let message = message.trim_start_matches("error: ").trim_end();
            fail(message);
        }
    };

    setup_colors(cli.color);

    if let Err(e) = execute(&cli) {
        fail(e);
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let summary = run(&cli.args, &cli.options(), &mut ConsoleReporter)?;
    log::info!("{}", summary);
    Ok(())
}

/// Print a fatal error and exit with status 1.
fn fail(error: impl Display) -> ! {
    eprintln!("{}", format!("Error: {}", error).red());
    process::exit(1)
}

/// Diagnostics go through `log`; `RUST_LOG=debug` shows glob expansion and
/// directory descent.
fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn setup_colors(choice: ColorChoice) {
    use colored::control;

    match choice {
        ColorChoice::Always => control::set_override(true),
        ColorChoice::Never => control::set_override(false),
        ColorChoice::Auto => {}
    }
}
