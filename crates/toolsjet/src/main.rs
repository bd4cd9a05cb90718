//! toolsjet - Unified entry point for all ToolsJet tools
//!
//! Leaf tools run in-process. The Pomodoro timer and the note taker are
//! their own binaries and are exec'd with the remaining arguments.

mod browse;
mod live;
mod registry;
mod shell;
mod tools;

use std::io::{BufRead, IsTerminal, Read, Write};
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use toolkit::case::Case;
use toolkit::csv_json::{self, CsvOptions};
use toolkit::currency::StaticRates;
use toolkit::diff::DiffMode;
use toolkit::ids::UuidOptions;
use toolkit::lorem::{LoremOptions, LoremUnit};
use toolkit::password::PasswordOptions;
use toolsjet_core::{Config, Paths};

use crate::live::LiveTool;
use crate::shell::Shell;
use crate::tools::JsonAction;

/// ToolsJet - Small single-purpose utilities behind one front door
#[derive(Parser)]
#[command(name = "toolsjet")]
#[command(version)]
#[command(about = "Unified entry point for all ToolsJet tools")]
#[command(after_help = r#"Every tool is a subcommand named by its tool id; short aliases work too.
Text arguments may be omitted and piped on stdin instead.

EXAMPLES:
    toolsjet tools --search json
    toolsjet word-counter "Count these words."
    cat notes.txt | toolsjet count
    toolsjet case "hello world" --to snake
    toolsjet unit length 5 km mile
    toolsjet hash "secret" --algorithm sha256
    toolsjet json data.json --indent 4
    toolsjet live words                # Debounced live stats while you type
    toolsjet config set debounce_ms 150
    toolsjet pomodoro run --focus 50
    toolsjet notes new "Groceries" "milk, eggs"
"#)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Tool id to look up (alternative to subcommand)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set one key (debounce_ms, chime or log_filter)
    Set { key: String, value: String },
}

#[derive(Subcommand)]
enum Commands {
    /// List all tools with availability
    Tools {
        /// Only tools whose name, description or category contains this
        #[arg(short, long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search and open tools interactively
    Browse,

    /// Recompute a tool's output as you type (words, hash, json, strength or a case name)
    Live {
        /// Tool to run on the input
        tool: String,
    },

    /// Show or change the global configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count words, characters, sentences and paragraphs
    #[command(name = "word-counter", alias = "count")]
    WordCounter {
        text: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert text between cases
    #[command(name = "text-case-converter", alias = "case")]
    Case {
        text: Option<String>,
        /// Target case: upper, lower, title, sentence, camel, pascal, snake,
        /// kebab, alternating, inverse (default: show all)
        #[arg(long)]
        to: Option<String>,
    },

    /// Generate placeholder text
    #[command(name = "lorem-generator", alias = "lorem")]
    Lorem {
        /// words, sentences or paragraphs
        #[arg(short, long, default_value = "paragraphs")]
        unit: String,
        /// How many units to generate
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,
        /// Don't open with "Lorem"
        #[arg(long)]
        no_lorem: bool,
    },

    /// Compare two files line by line (or word by word)
    #[command(name = "diff-checker", alias = "diff")]
    Diff {
        a: PathBuf,
        b: PathBuf,
        /// Compare words instead of lines
        #[arg(long)]
        words: bool,
    },

    /// Generate passwords
    #[command(name = "password-generator", alias = "password")]
    Password {
        #[arg(short, long, default_value_t = 16)]
        length: usize,
        #[arg(long)]
        no_uppercase: bool,
        #[arg(long)]
        no_lowercase: bool,
        #[arg(long)]
        no_numbers: bool,
        #[arg(long)]
        no_symbols: bool,
        /// Leave out look-alike characters (il1Lo0O)
        #[arg(long)]
        exclude_similar: bool,
        /// How many passwords to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Score a password and suggest improvements
    #[command(name = "password-strength-checker", alias = "strength")]
    Strength { password: Option<String> },

    /// Hash text with SHA-1, SHA-256, SHA-384, SHA-512
    #[command(name = "hash-generator", alias = "hash")]
    Hash {
        text: Option<String>,
        /// Single algorithm (default: all)
        #[arg(short, long)]
        algorithm: Option<String>,
    },

    /// Pick random integers from a range
    #[command(name = "random-number-picker", alias = "random")]
    Random {
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        min: i64,
        #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
        max: i64,
        #[arg(short = 'n', long, default_value_t = 1)]
        quantity: usize,
        /// Allow the same number more than once
        #[arg(long)]
        allow_duplicates: bool,
    },

    /// Generate random UUIDs
    #[command(name = "uuid-generator", alias = "uuid")]
    Uuid {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        uppercase: bool,
        #[arg(long)]
        no_hyphens: bool,
    },

    /// Encode or decode Base64
    #[command(name = "base64-converter", alias = "base64")]
    Base64 {
        text: Option<String>,
        #[arg(short, long)]
        decode: bool,
    },

    /// Convert units, or list a category's units
    #[command(name = "unit-converter", alias = "unit")]
    Unit {
        /// length, weight, temperature, volume or area
        category: Option<String>,
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
        from: Option<String>,
        to: Option<String>,
    },

    /// Convert an amount between currencies (sample rates)
    #[command(name = "currency-converter", alias = "currency")]
    Currency {
        amount: String,
        from: String,
        to: String,
    },

    /// Show a Unix timestamp or date-time in every format (default: now)
    #[command(name = "timestamp-converter", alias = "timestamp")]
    Timestamp { input: Option<String> },

    /// Convert CSV to JSON, or JSON to CSV with --reverse
    #[command(name = "csv-to-json", alias = "csv")]
    Csv {
        /// Input file (default: stdin)
        file: Option<PathBuf>,
        /// JSON in, CSV out
        #[arg(long)]
        reverse: bool,
        /// Delimiter: a character, or tab, comma, semicolon, pipe
        #[arg(short, long, default_value = ",")]
        delimiter: String,
        /// First row is data, not field names
        #[arg(long)]
        no_header: bool,
    },

    /// Format, minify or validate JSON
    #[command(name = "json-formatter", alias = "json")]
    Json {
        /// Input file (default: stdin)
        file: Option<PathBuf>,
        #[arg(short, long, default_value_t = 2)]
        indent: usize,
        #[arg(long)]
        minify: bool,
        #[arg(long, conflicts_with = "minify")]
        validate: bool,
    },

    /// Test a regular expression against text
    #[command(name = "regex-tester", alias = "regex")]
    Regex {
        pattern: String,
        text: Option<String>,
        /// Flags: g, i, m, s, u
        #[arg(short, long, default_value = "g")]
        flags: String,
    },

    /// Age, totals, next birthday and zodiac sign from a birth date
    #[command(name = "age-calculator", alias = "age")]
    Age {
        /// YYYY-MM-DD
        birth_date: String,
    },

    /// Show a #rrggbb color as HEX, RGB and HSL
    #[command(name = "color-picker", alias = "color")]
    Color { hex: String },

    /// Pomodoro timer (runs the pomodoro binary)
    #[command(name = "pomodoro-timer", alias = "pomodoro", disable_help_flag = true)]
    Pomodoro {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Note taker (runs the notes binary)
    #[command(name = "note-taker", alias = "notes", disable_help_flag = true)]
    Notes {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = Paths::new();
    let config = Config::load_or_default(&paths.config_file());
    toolsjet_core::logging::init(&config);

    let Some(command) = cli.command else {
        return match cli.args.first() {
            None => cmd_overview(),
            Some(first) => cmd_lookup(first),
        };
    };

    let mut rng = rand::thread_rng();
    match command {
        Commands::Tools { search, json } => cmd_tools(search.as_deref(), json),
        Commands::Browse => cmd_browse(),
        Commands::Live { tool } => cmd_live(&tool, config.debounce_ms),
        Commands::Config { action, json } => cmd_config(&paths, config, action, json),

        Commands::WordCounter { text, json } => emit(tools::count_words(&read_text(text)?, json)?),
        Commands::Case { text, to } => {
            let target = match to {
                Some(name) => Some(Case::from_str(&name).with_context(|| format!("Unknown case: {}", name))?),
                None => None,
            };
            emit(tools::convert_case(&read_text(text)?, target))
        }
        Commands::Lorem { unit, count, no_lorem } => {
            let unit = LoremUnit::from_str(&unit).with_context(|| format!("Unknown unit: {}", unit))?;
            let options = LoremOptions {
                unit,
                count,
                start_with_lorem: !no_lorem,
            };
            emit(tools::lorem_text(&mut rng, &options))
        }
        Commands::Diff { a, b, words } => {
            let mode = if words { DiffMode::Word } else { DiffMode::Line };
            emit(tools::diff_texts(&read_file(&a)?, &read_file(&b)?, mode))
        }
        Commands::Password {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
            exclude_similar,
            count,
        } => {
            let options = PasswordOptions {
                length,
                uppercase: !no_uppercase,
                lowercase: !no_lowercase,
                numbers: !no_numbers,
                symbols: !no_symbols,
                exclude_similar,
            };
            if options.charset().is_empty() {
                bail!("Select at least one character type");
            }
            emit(tools::passwords(&mut rng, &options, count))
        }
        Commands::Strength { password } => emit(tools::check_strength(read_text(password)?.trim_end())),
        Commands::Hash { text, algorithm } => emit(tools::hashes(&read_text(text)?, algorithm.as_deref())?),
        Commands::Random {
            min,
            max,
            quantity,
            allow_duplicates,
        } => emit(tools::random_numbers(&mut rng, min, max, quantity, allow_duplicates)?),
        Commands::Uuid {
            count,
            uppercase,
            no_hyphens,
        } => emit(tools::uuids(
            count,
            UuidOptions {
                uppercase,
                hyphens: !no_hyphens,
            },
        )),
        Commands::Base64 { text, decode } => emit(tools::base64(read_text(text)?.trim_end_matches('\n'), decode)?),
        Commands::Unit {
            category,
            value,
            from,
            to,
        } => match (value, from, to) {
            (Some(value), Some(from), Some(to)) => {
                let category = category.unwrap_or_default();
                emit(tools::convert_unit(&category, &value, &from, &to)?)
            }
            (None, None, None) => emit(tools::list_units(category.as_deref())?),
            _ => bail!("Usage: toolsjet unit <CATEGORY> <VALUE> <FROM> <TO>"),
        },
        Commands::Currency { amount, from, to } => {
            emit(tools::convert_currency(&StaticRates, &amount, &from, &to)?)?;
            println!("{}", "Sample rates, not live market data".dimmed());
            Ok(())
        }
        Commands::Timestamp { input } => emit(tools::timestamps(input.as_deref(), chrono::Utc::now())?),
        Commands::Csv {
            file,
            reverse,
            delimiter,
            no_header,
        } => {
            let delimiter = csv_json::parse_delimiter(&delimiter)
                .with_context(|| format!("Invalid delimiter: {}", delimiter))?;
            let input = read_source(file.as_deref())?;
            if reverse {
                emit(tools::json_to_csv(&input, delimiter)?)
            } else {
                let options = CsvOptions {
                    delimiter,
                    has_header: !no_header,
                };
                emit(tools::csv_to_json(&input, &options)?)
            }
        }
        Commands::Json {
            file,
            indent,
            minify,
            validate,
        } => {
            let action = if validate {
                JsonAction::Validate
            } else if minify {
                JsonAction::Minify
            } else {
                JsonAction::Format(indent)
            };
            emit(tools::json(&read_source(file.as_deref())?, action)?)
        }
        Commands::Regex { pattern, text, flags } => {
            let text = read_text(text)?;
            emit(tools::regex_report(&pattern, &flags, text.trim_end_matches('\n'))?)
        }
        Commands::Age { birth_date } => emit(tools::describe_age(&birth_date, tools::today())?),
        Commands::Color { hex } => emit(tools::colors(&hex)?),

        Commands::Pomodoro { args } => dispatch_tool("pomodoro", &args),
        Commands::Notes { args } => dispatch_tool("notes", &args),
    }
}

fn emit(output: String) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output).context("Failed to write output")?;
    Ok(())
}

/// The argument if given, otherwise everything piped on stdin
fn read_text(arg: Option<String>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    if std::io::stdin().is_terminal() {
        bail!("No input: pass the text as an argument or pipe it on stdin");
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_file(path),
        None => read_text(None),
    }
}

fn cmd_overview() -> Result<()> {
    println!("{}", "ToolsJet".cyan().bold());
    println!("{}", "Small single-purpose utilities behind one front door.".dimmed());
    println!();

    println!("{}", "USAGE".bold());
    println!("    toolsjet <tool-id> [args...]   Run a tool");
    println!("    toolsjet tools [--search Q]    List tools");
    println!("    toolsjet browse                Search and open tools interactively");
    println!();

    let all = registry::search("");
    for category in registry::categories(&all) {
        println!("{}", category.as_str().to_uppercase().bold());
        for tool in all.iter().filter(|t| t.category == category) {
            if tool.available {
                println!("    {:28} {}", tool.id.cyan(), tool.description);
            } else {
                println!("    {:28} {}", tool.id.dimmed(), "coming soon".dimmed());
            }
        }
        println!();
    }

    println!("Run {} for tool options.", "toolsjet <tool-id> --help".bold());
    Ok(())
}

/// A bare word that is not a subcommand: an unavailable tool, or a mistake
fn cmd_lookup(first: &str) -> Result<()> {
    match registry::find(first) {
        Some(tool) if !tool.available => {
            println!("{} {}", tool.name.bold(), "- Coming soon".yellow());
            println!("{}", tool.description.dimmed());
            Ok(())
        }
        _ => {
            eprintln!("{} Unknown tool: {}", "error:".red(), first);
            eprintln!("Run {} to see every tool", "toolsjet tools".bold());
            std::process::exit(1);
        }
    }
}

fn cmd_tools(search: Option<&str>, json: bool) -> Result<()> {
    let tools = registry::search(search.unwrap_or(""));

    if json {
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    if tools.is_empty() {
        println!("No tools found");
        return Ok(());
    }

    let mut available = 0;
    for category in registry::categories(&tools) {
        println!("{}", category.as_str().bold());
        for tool in tools.iter().filter(|t| t.category == category) {
            if tool.available {
                println!("  {} {} - {}", "ok".green(), tool.id.cyan(), tool.description);
                available += 1;
            } else {
                println!(
                    "  {}  {} - {} {}",
                    "-".yellow(),
                    tool.id.dimmed(),
                    tool.description,
                    "(coming soon)".dimmed()
                );
            }
        }
    }

    println!();
    println!("{} available, {} coming soon", available, tools.len() - available);
    Ok(())
}

fn cmd_config(paths: &Paths, mut config: Config, action: Option<ConfigAction>, json: bool) -> Result<()> {
    let path = paths.config_file();

    if let Some(ConfigAction::Set { key, value }) = action {
        config.set(&key, &value)?;
        config.save(&path)?;
        tracing::info!(%key, %value, "Config updated");
        println!("{} {} = {}", "Saved".green(), key, value.trim());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Config file: {}", path.display());
    println!("  debounce_ms: {}", config.debounce_ms);
    println!("  chime:       {}", if config.chime { "on" } else { "off" });
    println!("  log_filter:  {}", config.log_filter);
    Ok(())
}

fn cmd_browse() -> Result<()> {
    let mut shell = Shell::new();
    println!("{}", "ToolsJet".cyan().bold());
    println!("{}", "Type to search, 'open <tool-id>' to open a tool, 'help' for more.".dimmed());

    let stdin = std::io::stdin();
    loop {
        print!("{}{} ", shell.section().as_str().dimmed(), ">".cyan());
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }

        match browse::BrowseCommand::parse(&line) {
            Ok(command) => match browse::execute(&mut shell, command) {
                Some(out) => println!("{}", out),
                None => break,
            },
            Err(message) => println!("{}", message.yellow()),
        }
    }
    Ok(())
}

fn cmd_live(tool: &str, debounce_ms: u64) -> Result<()> {
    let tool = LiveTool::from_str(tool)
        .with_context(|| format!("No live mode for '{}' (words, hash, json, strength or a case)", tool))?;

    if std::io::stdin().is_terminal() {
        eprintln!("{}", "Type text; results update as you pause. Ctrl-D to finish.".dimmed());
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(async {
        let input = tokio::io::BufReader::new(tokio::io::stdin());
        live::run(tool, input, debounce_ms, |out| {
            println!("{}", out.trim_end());
            println!("{}", "---".dimmed());
        })
        .await
    })
}

/// Exec a companion binary: next to this one, on PATH, or in the tools dir
fn dispatch_tool(name: &str, args: &[String]) -> Result<()> {
    let tool_path = locate_tool(name).with_context(|| {
        format!("Tool '{}' is not installed (looked next to toolsjet, on PATH and in ~/.local/bin)", name)
    })?;

    tracing::debug!(tool = name, path = %tool_path.display(), "Dispatching");

    // Use exec to replace the current process (no overhead)
    let err = Command::new(&tool_path).args(args).exec();

    // If we get here, exec failed
    Err(err).context(format!("Failed to exec {}", tool_path.display()))
}

fn locate_tool(name: &str) -> Option<PathBuf> {
    let sibling = std::env::current_exe()
        .ok()
        .map(|exe| exe.with_file_name(name))
        .filter(|p| p.is_file());

    sibling
        .or_else(|| which::which(name).ok())
        .or_else(|| Some(Paths::new().tools.join(name)).filter(|p| p.is_file()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_every_available_tool_has_a_subcommand() {
        let cli = Cli::command();
        for tool in registry::TOOLS.iter().filter(|t| t.available) {
            assert!(
                cli.find_subcommand(tool.id).is_some(),
                "no subcommand for {}",
                tool.id
            );
        }
    }

    #[test]
    fn test_unavailable_tools_are_not_subcommands() {
        let cli = Cli::command();
        for tool in registry::TOOLS.iter().filter(|t| !t.available) {
            assert!(cli.find_subcommand(tool.id).is_none(), "{} is a subcommand", tool.id);
        }
    }

    #[test]
    fn test_aliases_parse() {
        let cli = Cli::try_parse_from(["toolsjet", "hash", "abc", "-a", "sha1"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Hash { .. })));

        let cli = Cli::try_parse_from(["toolsjet", "notes", "list", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Notes { args }) => assert_eq!(args, vec!["list", "--json"]),
            _ => panic!("expected notes"),
        }
    }

    #[test]
    fn test_negative_unit_value() {
        let cli = Cli::try_parse_from(["toolsjet", "unit", "temperature", "-40", "c", "f"]).unwrap();
        match cli.command {
            Some(Commands::Unit { value, .. }) => assert_eq!(value.as_deref(), Some("-40")),
            _ => panic!("expected unit"),
        }
    }

    #[test]
    fn test_config_set_parses() {
        let cli = Cli::try_parse_from(["toolsjet", "config", "set", "chime", "off"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                action: Some(ConfigAction::Set { key, value }),
                json: false,
            }) => assert_eq!((key.as_str(), value.as_str()), ("chime", "off")),
            _ => panic!("expected config set"),
        }

        let cli = Cli::try_parse_from(["toolsjet", "config", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { action: None, json: true })));
    }

    #[test]
    fn test_read_file_missing() {
        let err = read_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
