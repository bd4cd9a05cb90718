//! Interactive browsing: search the registry, open tools, move between sections

use crate::registry::{self, Tool};
use crate::shell::{Section, Shell};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    List,
    Open(String),
    Home,
    Go(Section),
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse one input line. A bare word that is not a command is a search.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" | "list" | "ls" => Ok(BrowseCommand::List),
            "search" | "/" => Ok(BrowseCommand::Search(rest.to_string())),
            "clear" => Ok(BrowseCommand::Search(String::new())),
            "open" if !rest.is_empty() => Ok(BrowseCommand::Open(rest.to_string())),
            "open" => Err("Usage: open <tool-id>".to_string()),
            "home" | "back" => Ok(BrowseCommand::Home),
            "go" => Section::from_str(rest)
                .map(BrowseCommand::Go)
                .ok_or_else(|| format!("Unknown section '{}' (home, tools, about, contact)", rest)),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
            _ if word.starts_with('/') => Ok(BrowseCommand::Search(line[1..].trim().to_string())),
            _ => Ok(BrowseCommand::Search(line.to_string())),
        }
    }
}

/// Apply a command and return what to show. `None` means quit.
pub fn execute(shell: &mut Shell, command: BrowseCommand) -> Option<String> {
    let out = match command {
        BrowseCommand::Search(query) => {
            shell.set_query(&query);
            render_grouped(&shell.visible_tools())
        }
        BrowseCommand::List => render_grouped(&shell.visible_tools()),
        BrowseCommand::Open(id) => match shell.select(&id) {
            Ok(tool) => render_tool(tool),
            Err(e) => e.to_string(),
        },
        BrowseCommand::Home => {
            shell.go_home();
            render_section(Section::Home)
        }
        BrowseCommand::Go(section) => {
            shell.navigate(section);
            match section {
                Section::Tools => render_grouped(&shell.visible_tools()),
                other => render_section(other),
            }
        }
        BrowseCommand::Help => HELP.to_string(),
        BrowseCommand::Quit => return None,
    };
    Some(out)
}

const HELP: &str = "\
Commands:
  <text> | search <text>   Filter tools by name, description or category
  clear                    Show all tools again
  list                     List the tools matching the current search
  open <tool-id>           Open a tool
  home | back              Close the tool and go home
  go <section>             home, tools, about or contact
  quit                     Leave";

/// Tools under their category headings, categories in first-appearance order
pub fn render_grouped(tools: &[&Tool]) -> String {
    if tools.is_empty() {
        return "No tools found".to_string();
    }

    let mut lines = Vec::new();
    for category in registry::categories(tools) {
        lines.push(format!("{}:", category.as_str()));
        for tool in tools.iter().filter(|t| t.category == category) {
            let status = if tool.available { "" } else { "  (coming soon)" };
            lines.push(format!("  {:<28} {}{}", tool.id, tool.description, status));
        }
    }
    lines.join("\n")
}

pub fn render_tool(tool: &Tool) -> String {
    let usage = if tool.available {
        format!("Run: toolsjet {} --help", tool.id)
    } else {
        "Coming soon: this tool is not available in this build".to_string()
    };
    format!("{} [{}]\n{}\n\n{}", tool.name, tool.category.as_str(), tool.description, usage)
}

fn render_section(section: Section) -> String {
    match section {
        Section::Home => format!(
            "ToolsJet: {} tools for everyday text, data and time chores. Type to search.",
            registry::TOOLS.len()
        ),
        Section::Tools => render_grouped(&registry::search("")),
        Section::About => {
            "ToolsJet gathers small single-purpose utilities behind one front door.\n\
             Everything runs locally; nothing you type leaves your machine."
                .to_string()
        }
        Section::Contact => "Questions or ideas? Open an issue on the project repository.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(BrowseCommand::parse("open note-taker"), Ok(BrowseCommand::Open("note-taker".into())));
        assert_eq!(BrowseCommand::parse("  "), Ok(BrowseCommand::List));
        assert_eq!(BrowseCommand::parse("go about"), Ok(BrowseCommand::Go(Section::About)));
        assert_eq!(BrowseCommand::parse("/hash"), Ok(BrowseCommand::Search("hash".into())));
        assert_eq!(BrowseCommand::parse("json tools"), Ok(BrowseCommand::Search("json tools".into())));
        assert_eq!(BrowseCommand::parse("q"), Ok(BrowseCommand::Quit));
        assert!(BrowseCommand::parse("go nowhere").is_err());
        assert!(BrowseCommand::parse("open").is_err());
    }

    #[test]
    fn test_search_then_open() {
        let mut shell = Shell::new();

        let out = execute(&mut shell, BrowseCommand::Search("timer".into())).unwrap();
        assert!(out.starts_with("Productivity:"));
        assert!(out.contains("pomodoro-timer"));

        let out = execute(&mut shell, BrowseCommand::Open("pomodoro-timer".into())).unwrap();
        assert!(out.starts_with("Pomodoro Timer [Productivity]"));
        assert!(out.contains("toolsjet pomodoro-timer"));
        assert_eq!(shell.query(), "");
    }

    #[test]
    fn test_open_unavailable_and_unknown() {
        let mut shell = Shell::new();
        let out = execute(&mut shell, BrowseCommand::Open("qr-code-generator".into())).unwrap();
        assert!(out.contains("Coming soon"));

        let out = execute(&mut shell, BrowseCommand::Open("fax".into())).unwrap();
        assert_eq!(out, "Unknown tool: fax");
        assert_eq!(shell.selected().map(|t| t.id), Some("qr-code-generator"));
    }

    #[test]
    fn test_no_results() {
        let mut shell = Shell::new();
        let out = execute(&mut shell, BrowseCommand::Search("zzz".into())).unwrap();
        assert_eq!(out, "No tools found");
    }

    #[test]
    fn test_home_and_quit() {
        let mut shell = Shell::new();
        execute(&mut shell, BrowseCommand::Open("uuid-generator".into()));
        execute(&mut shell, BrowseCommand::Home);
        assert!(shell.selected().is_none());
        assert_eq!(shell.section(), Section::Home);
        assert!(execute(&mut shell, BrowseCommand::Quit).is_none());
    }
}
