//! notes - Quick titled notes from the terminal
//!
//! Usage:
//!   notes new TITLE [CONTENT]       Create a note (content from stdin if piped)
//!   notes list                      List notes, newest first
//!   notes show [ID]                 Show a note (default: the newest)
//!   notes edit ID [--title T] [--content C]
//!   notes rm ID                     Delete a note
//!   notes search QUERY              Find notes by title or content
//!   notes export [--dir DIR]        Write notes_<date>.json

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use toolsjet_core::{format, Config, Paths};

use notes::{Note, NoteStore};

/// Notes - Quick titled notes from the terminal
#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Quick titled notes stored in a single JSON file")]
#[command(version)]
#[command(after_help = r#"IDS:
    Every note has an id like note_3f2a9c... Any unambiguous prefix of the
    part after 'note_' works wherever an ID is expected.

EXAMPLES:
    notes new "Groceries" "milk, eggs"
    echo "long text" | notes new "From stdin"
    notes list
    notes show 3f2a
    notes edit 3f2a --content "milk, eggs, bread"
    notes search milk
    notes export --dir ~/backups
"#)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a note
    #[command(alias = "add")]
    New {
        /// Note title (blank becomes "Untitled Note")
        #[arg(default_value = "")]
        title: String,
        /// Note content
        content: Option<String>,
    },

    /// List notes, newest first
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a note
    Show {
        /// Note id or id prefix (default: the newest note)
        id: Option<String>,
    },

    /// Change a note's title or content
    Edit {
        /// Note id or id prefix
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New content
        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a note
    #[command(alias = "delete")]
    Rm {
        /// Note id or id prefix
        id: String,
    },

    /// Find notes by title or content
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },

    /// Export all notes as JSON
    Export {
        /// Directory to write notes_<date>.json into (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = Paths::new();
    let config = Config::load_or_default(&paths.config_file());
    toolsjet_core::logging::init(&config);

    let mut store = NoteStore::open(&paths.state("notes").join("notes.json"));

    match cli.command {
        Some(Commands::New { title, content }) => cmd_new(&mut store, &title, content),
        Some(Commands::List { json }) => cmd_list(&store, json),
        Some(Commands::Show { id }) => cmd_show(&store, id.as_deref()),
        Some(Commands::Edit { id, title, content }) => cmd_edit(&mut store, &id, title, content),
        Some(Commands::Rm { id }) => cmd_rm(&mut store, &id),
        Some(Commands::Search { query }) => cmd_search(&store, &query),
        Some(Commands::Export { dir, stdout }) => cmd_export(&store, dir, stdout),
        None => cmd_list(&store, false),
    }
}

/// Short id shown in listings
fn short_id(note: &Note) -> &str {
    let rest = note.id.strip_prefix("note_").unwrap_or(&note.id);
    rest.get(..8).unwrap_or(rest)
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read content from stdin")?;
    Ok(content)
}

fn cmd_new(store: &mut NoteStore, title: &str, content: Option<String>) -> Result<()> {
    let content = match content {
        Some(c) => c,
        None if !std::io::stdin().is_terminal() => read_stdin()?,
        None => String::new(),
    };

    let note = store.create(title, &content)?;
    println!("Created {} ({})", note.title, short_id(&note));
    Ok(())
}

fn cmd_list(store: &NoteStore, json: bool) -> Result<()> {
    if json {
        println!("{}", store.export_json()?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No notes yet. Create one with: notes new <title>");
        return Ok(());
    }

    print_table(store.list().iter());
    Ok(())
}

fn print_table<'a>(notes: impl Iterator<Item = &'a Note>) {
    println!("{:<10} {:<28} {:<12} {}", "ID", "TITLE", "UPDATED", "PREVIEW");
    println!("{}", "-".repeat(80));
    for note in notes {
        println!(
            "{:<10} {:<28} {:<12} {}",
            short_id(note),
            format::truncate(&note.title, 28),
            note.updated_at.format("%Y-%m-%d"),
            format::truncate(note.preview(), 28)
        );
    }
}

fn cmd_show(store: &NoteStore, id: Option<&str>) -> Result<()> {
    let note = match id {
        Some(id) => store.find(id)?,
        None => match store.first() {
            Some(note) => note,
            None => {
                println!("No notes yet. Create one with: notes new <title>");
                return Ok(());
            }
        },
    };

    println!("{}", note.title);
    println!("{}", "=".repeat(note.title.chars().count().max(3)));
    println!(
        "id: {}  created: {}  updated: {}",
        note.id,
        note.created_at.format("%Y-%m-%d %H:%M"),
        note.updated_at.format("%Y-%m-%d %H:%M")
    );
    println!();
    println!("{}", note.content);
    Ok(())
}

fn cmd_edit(
    store: &mut NoteStore,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let note = store.find(id)?.clone();
    let title = title.unwrap_or(note.title);
    let content = content.unwrap_or(note.content);

    let note = store.update(&note.id, &title, &content)?;
    println!("Saved {} ({})", note.title, short_id(&note));
    Ok(())
}

fn cmd_rm(store: &mut NoteStore, id: &str) -> Result<()> {
    let id = store.find(id)?.id.clone();
    let removed = store.delete(&id)?;
    println!("Deleted {}", removed.title);

    if let Some(next) = store.first() {
        println!("Next: {} ({})", next.title, short_id(next));
    }
    Ok(())
}

fn cmd_search(store: &NoteStore, query: &str) -> Result<()> {
    let found = store.search(query);
    if found.is_empty() {
        println!("No notes found");
        return Ok(());
    }

    print_table(found.into_iter());
    Ok(())
}

fn cmd_export(store: &NoteStore, dir: Option<PathBuf>, stdout: bool) -> Result<()> {
    if stdout {
        println!("{}", store.export_json()?);
        return Ok(());
    }

    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Could not determine current directory")?,
    };
    let path = store.export_to_dir(&dir)?;
    println!("Exported {} notes to {}", store.len(), path.display());
    Ok(())
}
