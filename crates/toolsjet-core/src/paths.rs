//! Standard paths used by ToolsJet tools

use std::path::PathBuf;

/// Standard ToolsJet paths
pub struct Paths {
    /// Data directory (~/.local/share/toolsjet)
    pub data: PathBuf,
    /// Config directory (~/.config/toolsjet)
    pub config: PathBuf,
    /// Tools directory (~/.local/bin)
    pub tools: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let data = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("toolsjet");

        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("toolsjet");

        let tools = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".local/bin");

        Self { data, config, tools }
    }

    /// Get state directory for a tool
    pub fn state(&self, tool: &str) -> PathBuf {
        self.data.join(tool)
    }

    /// Global configuration file
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.json")
    }

    /// Per-tool settings file (e.g. ~/.config/toolsjet/pomodoro.json)
    pub fn tool_config(&self, tool: &str) -> PathBuf {
        self.config.join(format!("{}.json", tool))
    }
}
