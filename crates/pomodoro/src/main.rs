//! pomodoro - Focus sessions with short and long breaks
//!
//! Usage:
//!   pomodoro run                    Run the timer with saved settings
//!   pomodoro run --focus 50         Override a setting for this run
//!   pomodoro settings show          Show saved settings
//!   pomodoro settings set focus 30  Change a saved setting
//!   pomodoro settings reset         Restore default settings
//!   pomodoro plan [N]               Show the break after each of the next N sessions

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use toolsjet_core::{format, Config, Paths};

use pomodoro::{
    BellChime, Chime, Phase, PhaseCompletion, PomodoroRunner, PomodoroTimer, SettingField,
    SettingsDraft, SettingsStore, SilentChime,
};

/// Pomodoro - Focus sessions with short and long breaks
#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "Focus sessions with short and long breaks")]
#[command(version)]
#[command(after_help = r#"CONTROLS (while running, type a letter and press Enter):
    p    start / pause
    r    reset the current phase
    f    switch to focus
    s    switch to short break
    l    switch to long break
    set FIELD VALUE   change a setting for this run (e.g. set focus 30)
    q    quit

EXAMPLES:
    pomodoro run                         # 25/5/15, long break every 4 sessions
    pomodoro run --focus 50 --short 10   # Longer sessions for this run only
    pomodoro run --cycles 4 --auto-breaks --auto-focus
    pomodoro settings set interval 3     # Long break after every 3rd session
    pomodoro plan 8                      # Preview the break schedule
"#)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the timer in this terminal
    #[command(alias = "r")]
    Run(RunArgs),

    /// View or change saved settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },

    /// Show which break follows each upcoming focus session
    Plan {
        /// Number of focus sessions to show
        #[arg(default_value = "8")]
        count: u32,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Focus duration in minutes
    #[arg(long)]
    focus: Option<String>,

    /// Short break duration in minutes
    #[arg(long)]
    short: Option<String>,

    /// Long break duration in minutes
    #[arg(long)]
    long: Option<String>,

    /// Focus sessions per long break
    #[arg(long)]
    interval: Option<String>,

    /// Start breaks automatically
    #[arg(long)]
    auto_breaks: bool,

    /// Start focus sessions automatically after a break
    #[arg(long)]
    auto_focus: bool,

    /// Stop after this many completed focus sessions
    #[arg(long)]
    cycles: Option<u32>,

    /// Don't ring the bell when a phase completes
    #[arg(long)]
    silent: bool,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show saved settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one saved setting
    Set {
        /// Setting name (focus, short, long, interval, auto-breaks, auto-focus)
        field: String,
        /// New value
        value: String,
    },

    /// Restore the defaults
    Reset,
}

// ANSI color codes
const GREEN: &str = "\x1b[0;32m";
const CYAN: &str = "\x1b[0;36m";
const MAGENTA: &str = "\x1b[0;35m";
const YELLOW: &str = "\x1b[0;33m";
const BOLD: &str = "\x1b[1m";
const NC: &str = "\x1b[0m";

/// Check if stdout is a TTY and colors should be used
fn use_colors() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stdout())
}

/// Conditionally apply color
fn color(code: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", code, text, NC)
    } else {
        text.to_string()
    }
}

fn phase_color(phase: Phase) -> &'static str {
    match phase {
        Phase::Focus => MAGENTA,
        Phase::ShortBreak => GREEN,
        Phase::LongBreak => CYAN,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = Paths::new();
    let config = Config::load_or_default(&paths.config_file());
    toolsjet_core::logging::init(&config);

    let store = SettingsStore::new(&paths.tool_config("pomodoro"));

    match cli.command {
        Some(Commands::Run(args)) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(cmd_run(&store, &config, args))
        }
        Some(Commands::Settings { action }) => match action {
            Some(SettingsAction::Show { json }) => cmd_settings_show(&store, json),
            Some(SettingsAction::Set { field, value }) => cmd_settings_set(&store, &field, &value),
            Some(SettingsAction::Reset) => cmd_settings_reset(&store),
            None => cmd_settings_show(&store, false),
        },
        Some(Commands::Plan { count }) => cmd_plan(&store, count),
        None => cmd_settings_show(&store, false),
    }
}

/// Build this run's settings: saved values with command-line overrides
fn run_draft(store: &SettingsStore, args: &RunArgs) -> Result<SettingsDraft> {
    let mut draft = SettingsDraft::new(store.load());

    let overrides = [
        (SettingField::FocusMinutes, &args.focus),
        (SettingField::ShortBreakMinutes, &args.short),
        (SettingField::LongBreakMinutes, &args.long),
        (SettingField::LongBreakInterval, &args.interval),
    ];
    for (field, value) in overrides {
        if let Some(raw) = value {
            draft.set(field, raw)?;
        }
    }
    if args.auto_breaks {
        draft.set(SettingField::AutoStartBreaks, "on")?;
    }
    if args.auto_focus {
        draft.set(SettingField::AutoStartFocus, "on")?;
    }

    Ok(draft)
}

async fn cmd_run(store: &SettingsStore, config: &Config, args: RunArgs) -> Result<()> {
    let draft = run_draft(store, &args)?;

    let chime: Arc<dyn Chime> = if args.silent || !config.chime {
        Arc::new(SilentChime)
    } else {
        Arc::new(BellChime)
    };

    let (mut runner, mut events) = PomodoroRunner::new(draft.settings(), chime)?;
    runner.start();

    println!("{}", color(&format!("{}{}", BOLD, MAGENTA), "POMODORO"));
    println!("Controls: p pause/resume, r reset, f/s/l switch phase, set FIELD VALUE, q quit");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut refresh = tokio::time::interval(Duration::from_secs(1));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = refresh.tick() => print_status(&runner.snapshot()),
            Some(done) = events.recv() => {
                print_completion(&done);
                if let Some(limit) = args.cycles {
                    if done.finished == Phase::Focus && done.completed_focus_sessions >= limit {
                        println!("Completed {} focus sessions. Nice work.", limit);
                        break;
                    }
                }
            }
            line = lines.next_line(), if stdin_open => match line? {
                Some(input) => {
                    if !handle_input(&mut runner, input.trim()) {
                        break;
                    }
                    print_status(&runner.snapshot());
                }
                None => stdin_open = false,
            },
            _ = &mut ctrl_c => break,
        }
    }

    println!();
    let state = runner.snapshot();
    println!(
        "  {} {}",
        color(CYAN, "Focus sessions completed:"),
        state.completed_focus_sessions()
    );
    Ok(())
}

/// Apply one keyboard command. Returns false to quit.
fn handle_input(runner: &mut PomodoroRunner, input: &str) -> bool {
    match input {
        "" => {}
        "q" | "quit" => return false,
        "p" | "pause" | "start" => {
            runner.toggle();
        }
        "r" | "reset" => runner.reset(),
        other if other.starts_with("set ") => {
            let mut parts = other.split_whitespace().skip(1);
            match (parts.next(), parts.next()) {
                (Some(field), Some(value)) => {
                    let mut draft = SettingsDraft::new(*runner.snapshot().settings());
                    let applied = draft
                        .set_named(field, value)
                        .and_then(|_| runner.apply_settings(draft.settings()));
                    if let Err(e) = applied {
                        eprintln!("\n{}", e);
                    }
                }
                _ => eprintln!("\nUsage: set <field> <value>"),
            }
        }
        other => match Phase::from_str(other) {
            Some(phase) => runner.switch_phase(phase),
            None => eprintln!("\nUnknown command: {} (p, r, f, s, l, q)", other),
        },
    }
    true
}

fn print_status(timer: &PomodoroTimer) {
    let phase = timer.phase();
    let state = if timer.is_running() {
        color(GREEN, "running")
    } else {
        color(YELLOW, "paused ")
    };

    print!(
        "\r  {:<12} {}  [{}] {:>3}%  sessions: {}  {}",
        color(phase_color(phase), phase.label()),
        color(BOLD, &timer.clock()),
        format::progress_bar(timer.progress_fraction(), 20),
        timer.progress_percent(),
        timer.completed_focus_sessions(),
        state
    );
    let _ = std::io::stdout().flush();
}

fn print_completion(done: &PhaseCompletion) {
    println!();
    let message = match done.finished {
        Phase::Focus => format!(
            "Focus session {} complete! Time for a {}.",
            done.completed_focus_sessions,
            done.next.label().to_lowercase()
        ),
        _ => "Break over. Back to focus.".to_string(),
    };
    println!("{} {}", color(GREEN, "[done]"), message);
    if !done.auto_started {
        println!("Type p and press Enter to start the {}.", done.next.label().to_lowercase());
    }
}

fn cmd_settings_show(store: &SettingsStore, json: bool) -> Result<()> {
    let settings = store.load();

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    println!("{}Pomodoro Settings{}", BOLD, NC);
    println!();
    for field in SettingField::ALL {
        let unit = match field {
            SettingField::FocusMinutes
            | SettingField::ShortBreakMinutes
            | SettingField::LongBreakMinutes => " min",
            SettingField::LongBreakInterval => " sessions",
            _ => "",
        };
        println!(
            "  {:<24} {}{}",
            color(CYAN, &format!("{}:", field.label())),
            settings.get(field),
            unit
        );
    }
    println!();
    println!("Saved in {}", store.path().display());

    Ok(())
}

fn cmd_settings_set(store: &SettingsStore, field: &str, value: &str) -> Result<()> {
    let mut draft = SettingsDraft::new(store.load());

    let field = match draft.set_named(field, value) {
        Ok(field) => field,
        Err(e) => bail!("{}", e),
    };
    store.save(&draft.settings())?;

    println!(
        "{} {} set to {}",
        color(GREEN, "[ok]"),
        field.label(),
        draft.settings().get(field)
    );
    Ok(())
}

fn cmd_settings_reset(store: &SettingsStore) -> Result<()> {
    store.save(&Default::default())?;
    println!("{} Settings restored to defaults", color(GREEN, "[ok]"));
    Ok(())
}

fn cmd_plan(store: &SettingsStore, count: u32) -> Result<()> {
    let settings = store.load();

    println!(
        "{}Break schedule (long break every {} sessions){}",
        BOLD, settings.long_break_interval, NC
    );
    println!();
    for n in 1..=count {
        let next = settings.break_after(n);
        println!(
            "  {:>3}. Focus {:>3} min  ->  {} {} min",
            n,
            settings.focus_minutes,
            color(phase_color(next), next.label()),
            settings.duration_minutes(next)
        );
    }

    let interval = settings.long_break_interval as u64;
    let cycle_minutes = interval * settings.focus_minutes as u64
        + interval.saturating_sub(1) * settings.short_break_minutes as u64
        + settings.long_break_minutes as u64;
    println!();
    println!("  One full cycle: {}", format::duration(cycle_minutes * 60));

    Ok(())
}
