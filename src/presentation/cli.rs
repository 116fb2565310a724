//! CLI Argument Parsing
//!
//! Global flags (--config, --json, --color, --verbose, --yes) are inherited by
//! all subcommands. Running without a subcommand performs a sync.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// ssh-sftp - mirror a local directory to a remote path over SFTP
#[derive(Parser, Debug)]
#[command(name = "ssh-sftp")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'ssh-sftp init' in a project root to create .sftprc.json.")]
pub struct Cli {
    /// Config file (default: ./.sftprc.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Upload localPath to remotePath, pruning per cleanRemoteFiles (default)
    Sync,

    /// Write a template .sftprc.json in the current project
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show what a sync would upload, delete and ignore
    #[command(visible_alias = "ls")]
    List {
        /// Show uploads
        #[arg(short = 'u', long)]
        uploads: bool,

        /// Show remote deletions
        #[arg(short = 'd', long)]
        deletions: bool,

        /// Show ignored local paths
        #[arg(short = 'i', long)]
        ignored: bool,
    },

    /// Print the public URL served from remotePath
    ShowUrl {
        /// Remote path to look up instead of remotePath
        path: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["ssh-sftp"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.yes);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_sync_with_globals() {
        let cli =
            Cli::try_parse_from(["ssh-sftp", "sync", "-y", "-vv", "--config", "deploy.json"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Sync));
        assert!(cli.yes);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("deploy.json")));
    }

    #[test]
    fn test_cli_parse_init_force() {
        let cli = Cli::try_parse_from(["ssh-sftp", "init", "--force"]).unwrap();
        if let Some(Commands::Init { force }) = cli.command {
            assert!(force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_ls_alias_and_flags() {
        let cli = Cli::try_parse_from(["ssh-sftp", "ls", "-u", "-i"]).unwrap();
        if let Some(Commands::List {
            uploads,
            deletions,
            ignored,
        }) = cli.command
        {
            assert!(uploads);
            assert!(!deletions);
            assert!(ignored);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_parse_show_url_path() {
        let cli = Cli::try_parse_from(["ssh-sftp", "show-url", "/var/www/app/docs"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::ShowUrl {
                path: Some("/var/www/app/docs".to_string())
            })
        );
    }

    #[test]
    fn test_cli_parse_color_and_json() {
        let cli = Cli::try_parse_from(["ssh-sftp", "list", "--json", "--color", "never"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["ssh-sftp", "deploy"]).is_err());
    }
}
