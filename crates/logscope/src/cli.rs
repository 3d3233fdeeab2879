//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use logscope_core::ResolutionPolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logscope")]
#[command(version, about = "Browse, download and compare per-server daily logs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: logscope.toml/.yaml/.yml/.json in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Root directory of the <year>/<month> log tree
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// How log files are located on disk
    #[arg(long, value_enum, global = true)]
    pub policy: Option<PolicyArg>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// List registered servers and their activity status
    Servers,

    /// Print a server's log for a date
    Logs(LogsArgs),

    /// Compare two servers' logs line by line
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port for the HTTP server
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Only allow this CORS origin (default: any)
    #[arg(long)]
    pub cors_origin: Option<String>,
}

#[derive(Args)]
pub struct LogsArgs {
    /// Server name
    pub server: String,

    /// Date (YYYY-MM-DD, default: today)
    #[arg(short, long)]
    pub date: Option<String>,
}

#[derive(Args)]
pub struct CompareArgs {
    /// First server name
    pub server1: String,

    /// Second server name
    pub server2: String,

    /// Date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// <server>_<date>.log
    Exact,
    /// *<server>*_<date>.log
    Pattern,
}

impl From<PolicyArg> for ResolutionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Exact => ResolutionPolicy::Exact,
            PolicyArg::Pattern => ResolutionPolicy::Pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compare() {
        let cli = Cli::parse_from([
            "logscope", "--policy", "exact", "compare", "vm1", "vm2", "--date", "2024-06-01",
        ]);
        assert!(matches!(cli.policy, Some(PolicyArg::Exact)));
        match cli.command {
            Commands::Compare(args) => {
                assert_eq!(args.server1, "vm1");
                assert_eq!(args.server2, "vm2");
                assert_eq!(args.date, "2024-06-01");
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_compare_requires_date() {
        assert!(Cli::try_parse_from(["logscope", "compare", "vm1", "vm2"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["logscope", "logs", "vm1", "--json", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
