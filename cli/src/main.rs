//! uncloak CLI - invisible Unicode character cleaner
//!
//! A command-line tool for finding and cleaning zero-width, directional and
//! typographic characters in text files, stdin or the clipboard.

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{filter::LevelFilter, fmt};
use uncloak::settings::{self, SettingsStore};
use uncloak::{
    clipboard, export, visualize, CatalogEntry, CharacterCategory, CleaningOptions,
    CleanupResult, DeviceClass, JsonFileStore, MemoryStore, TextCase,
};

/// Find and clean invisible, directional and typographic Unicode characters
#[derive(Parser)]
#[command(
    name = "uncloak",
    author = "iyulab",
    version,
    about = "Find and clean invisible Unicode characters",
    long_about = "uncloak - invisible Unicode character cleaner.\n\n\
                  Replaces zero-width marks, exotic spaces, bidirectional controls and\n\
                  typographic punctuation with plain equivalents and reports what it found.\n\n\
                  Usage:\n  \
                  uncloak <file>            Clean a file to stdout\n  \
                  uncloak                   Clean stdin (or the clipboard on desktops)\n  \
                  uncloak scan <file>       Report only\n  \
                  uncloak show <file>       Mark invisible characters",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path, or `-` for stdin (for default cleaning)
    input: Option<PathBuf>,

    #[command(flatten)]
    clean: CleanArgs,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean text (default command)
    Clean {
        /// Input file path, or `-` for stdin
        input: Option<PathBuf>,

        #[command(flatten)]
        args: CleanArgs,
    },

    /// Report catalog characters without cleaning
    Scan {
        /// Input file path, or `-` for stdin
        input: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show text with invisible characters marked
    Show {
        /// Input file path, or `-` for stdin
        input: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// List every character the cleaner knows about
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage saved cleaning options
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the saved options
    Show,
    /// Delete the saved options
    Reset,
    /// Print the settings file location
    Path,
}

/// Where to read text from besides a file argument
#[derive(Args, Clone, Default)]
struct SourceArgs {
    /// Read input from the system clipboard
    #[arg(long)]
    clipboard: bool,
}

#[derive(Args, Clone, Default)]
struct CleanArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write cleaned_text.txt into this directory
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Copy the cleaned text to the clipboard
    #[arg(long)]
    copy: bool,

    /// Print the full result (text and report) as JSON
    #[arg(long)]
    json: bool,

    /// Remember these options for next time
    #[arg(long)]
    save: bool,

    #[command(flatten)]
    options: OptionArgs,
}

#[derive(Args, Clone, Default)]
struct OptionArgs {
    /// Ignore saved options and start from defaults
    #[arg(long)]
    defaults: bool,

    /// Case transform
    #[arg(long, value_enum)]
    case: Option<CaseMode>,

    /// Keep runs of spaces and tabs as they are
    #[arg(long, conflicts_with = "collapse_spaces")]
    keep_spaces: bool,

    /// Collapse runs of spaces and tabs (default)
    #[arg(long)]
    collapse_spaces: bool,

    /// Strip all whitespace, line breaks included
    #[arg(long)]
    remove_all_spaces: bool,

    /// Replace line breaks with spaces
    #[arg(long, conflicts_with = "normalize_line_breaks")]
    remove_line_breaks: bool,

    /// Collapse runs of blank lines to one
    #[arg(long)]
    normalize_line_breaks: bool,

    /// Delete digits
    #[arg(long)]
    remove_numbers: bool,

    /// Delete punctuation
    #[arg(long)]
    remove_punctuation: bool,

    /// Delete special characters
    #[arg(long)]
    remove_special_chars: bool,

    /// Delete non-ASCII characters
    #[arg(long)]
    remove_non_ascii: bool,
}

/// Case transform
#[derive(Clone, Copy, ValueEnum)]
enum CaseMode {
    /// Leave case untouched
    Original,
    /// lowercase everything
    Lower,
    /// UPPERCASE EVERYTHING
    Upper,
    /// Sentence case. Like this.
    Sentence,
}

impl From<CaseMode> for TextCase {
    fn from(mode: CaseMode) -> Self {
        match mode {
            CaseMode::Original => TextCase::Original,
            CaseMode::Lower => TextCase::Lowercase,
            CaseMode::Upper => TextCase::Uppercase,
            CaseMode::Sentence => TextCase::SentenceCase,
        }
    }
}

impl OptionArgs {
    /// Layers the flags given on the command line over a base set of options.
    fn apply(&self, base: CleaningOptions) -> CleaningOptions {
        let mut options = if self.defaults {
            CleaningOptions::default()
        } else {
            base
        };

        if let Some(case) = self.case {
            options.text_case = case.into();
        }
        if self.keep_spaces {
            options.remove_extra_spaces = false;
        }
        if self.collapse_spaces {
            options.remove_extra_spaces = true;
        }
        if self.remove_all_spaces {
            options.remove_all_spaces = true;
        }
        if self.remove_line_breaks {
            options.remove_line_breaks = true;
            options.normalize_line_breaks = false;
        }
        if self.normalize_line_breaks {
            options.normalize_line_breaks = true;
            options.remove_line_breaks = false;
        }
        options.remove_numbers |= self.remove_numbers;
        options.remove_punctuation |= self.remove_punctuation;
        options.remove_special_chars |= self.remove_special_chars;
        options.remove_non_ascii |= self.remove_non_ascii;

        options
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(level_for(cli.verbose));

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(command) = cli.command else {
        return run_clean(cli.input.as_deref(), &cli.clean);
    };

    match command {
        Commands::Clean { input, args } => {
            run_clean(input.as_deref(), &args)?;
        }

        Commands::Scan {
            input,
            source,
            json,
        } => {
            let text = read_input(input.as_deref(), &source)?;
            let matches = uncloak::scan(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                let result = CleanupResult {
                    total_removed: matches.iter().map(|m| m.occurrence_count).sum(),
                    matches,
                    cleaned_text: String::new(),
                };
                print_report(&mut io::stdout().lock(), &result, "Found")?;
            }
        }

        Commands::Show { input, source } => {
            let text = read_input(input.as_deref(), &source)?;
            let shown = visualize::visualize_with(&text, marker);
            write_output(None, &shown)?;
        }

        Commands::Catalog { json } => {
            let entries = uncloak::catalog();
            if json {
                println!("{}", serde_json::to_string_pretty(entries)?);
            } else {
                print_catalog(entries);
            }
        }

        Commands::Settings { action } => {
            let store = JsonFileStore::default_location()?;
            match action {
                SettingsAction::Show => {
                    let saved = store.load()?;
                    if saved.is_none() {
                        eprintln!("{} No saved options; showing defaults", "!".yellow().bold());
                    }
                    let options = saved.unwrap_or_default();
                    println!("{}", serde_json::to_string_pretty(&options)?);
                }
                SettingsAction::Reset => {
                    store.clear()?;
                    println!("{} Saved options removed", "✓".green().bold());
                }
                SettingsAction::Path => {
                    println!("{}", store.path().display());
                }
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Clean input per saved options plus command-line flags.
fn run_clean(input: Option<&Path>, args: &CleanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store();
    let options = args.options.apply(settings::load_or_default(store.as_ref()));
    tracing::debug!(?options, "resolved cleaning options");

    let text = read_input(input, &args.source)?;

    let pb = create_spinner("Cleaning text...");
    let result = uncloak::clean(&text, &options);
    pb.finish_and_clear();

    if args.json {
        write_output(args.output.as_deref(), &serde_json::to_string_pretty(&result)?)?;
    } else {
        write_output(args.output.as_deref(), &result.cleaned_text)?;
        print_report(&mut io::stderr().lock(), &result, "Replaced")?;
    }

    if let Some(dir) = &args.export {
        let path = export::write_cleaned(dir, &result.cleaned_text)?;
        eprintln!("{} Exported: {}", "✓".green().bold(), path.display());
    }

    if args.copy {
        match clipboard::write_text(&result.cleaned_text) {
            Ok(()) => eprintln!("{} Copied to clipboard", "✓".green().bold()),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                eprintln!("{} {}; copy the output manually", "!".yellow().bold(), e);
            }
        }
    }

    if args.save && settings::save_best_effort(store.as_ref(), &options) {
        eprintln!("{} Options saved", "✓".green().bold());
    }

    Ok(())
}

/// Opens the settings file, falling back to an in-memory store.
fn open_store() -> Box<dyn SettingsStore> {
    match JsonFileStore::default_location() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "settings storage unavailable; using in-memory defaults");
            Box::new(MemoryStore::new())
        }
    }
}

/// Reads input text from a file, stdin or the clipboard.
///
/// Clipboard failures fall back to stdin so the user can paste manually.
fn read_input(
    input: Option<&Path>,
    source: &SourceArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) if path != Path::new("-") => {
            return Ok(export::read_text_file(path)?);
        }
        Some(_) => return Ok(export::read_text(io::stdin().lock())?),
        None => {}
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let wants_clipboard =
        source.clipboard || (interactive && DeviceClass::detect().auto_reads_clipboard());

    if wants_clipboard {
        match clipboard::read_text() {
            Ok(text) => return Ok(text),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard read failed; falling back to stdin");
                if interactive {
                    eprintln!(
                        "{} {}; paste text and press Ctrl-D",
                        "!".yellow().bold(),
                        e
                    );
                }
            }
        }
    } else if interactive {
        eprintln!("Paste text and press Ctrl-D");
    }

    Ok(export::read_text(stdin.lock())?)
}

fn marker(entry: &CatalogEntry) -> String {
    let tag = format!("[{}]", entry.abbreviation);
    match entry.category {
        CharacterCategory::Invisible => tag.black().on_yellow().to_string(),
        CharacterCategory::Directional => tag.white().on_red().to_string(),
        CharacterCategory::Typographic => tag.black().on_cyan().to_string(),
    }
}

/// Writes the match summary. `verb` heads the count ("Replaced", "Found").
fn print_report(out: &mut impl Write, result: &CleanupResult, verb: &str) -> io::Result<()> {
    if result.is_clean() {
        writeln!(out, "{} No hidden or typographic characters found", "✓".green().bold())?;
        return Ok(());
    }

    writeln!(
        out,
        "{} {} {} characters",
        "✓".green().bold(),
        verb,
        result.total_removed.to_string().bold()
    )?;
    writeln!(out, "{}", "─".repeat(40))?;
    for m in &result.matches {
        writeln!(
            out,
            "  {}  {:<44} ×{}",
            m.hex_code.cyan(),
            m.label,
            m.occurrence_count
        )?;
    }
    Ok(())
}

fn print_catalog(entries: &[CatalogEntry]) {
    println!("{}", "Character Catalog".cyan().bold());
    println!("{}", "─".repeat(40));
    for entry in entries {
        let replacement = match entry.replacement() {
            "" => "(deleted)".dimmed().to_string(),
            " " => "(space)".dimmed().to_string(),
            other => format!("{:?}", other),
        };
        println!(
            "{}  {:<8} {:<12} {:<10} {}",
            entry.hex_code().cyan(),
            entry.abbreviation,
            entry.category.to_string(),
            replacement,
            entry.label
        );
    }
}

fn print_version() {
    println!("{} {}", "uncloak".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Invisible Unicode character cleaner");
    println!();
    println!("Catalog entries: {}", uncloak::catalog().len());
    println!("Repository: https://github.com/iyulab/uncloak");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            if stdout.is_terminal() && !content.ends_with('\n') {
                writeln!(handle)?;
            }
        }
    }
    Ok(())
}
