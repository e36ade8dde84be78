use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::infra::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "qchat", about = "Terminal chat client for a question-answering bot")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Bot server base URL, overrides `server.base_url`
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// User identifier sent with every query, overrides `server.user_id`
    #[arg(long, global = true, value_name = "ID")]
    pub user_id: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start TUI chat
    Run,
    /// Send one query, print the answer and exit
    Ask {
        #[arg(required = true, num_args = 1.., value_name = "QUERY")]
        query: Vec<String>,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.server.clone(),
            user_id: self.user_id.clone(),
        }
    }
}
