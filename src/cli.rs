use clap::Parser;

use crate::app::constants::DEFAULT_MAX_ITEMS;
use crate::rclone::DEFAULT_TOOL;

const EXAMPLES: &str = "\
Examples:
  rclone-explorer
  rclone-explorer my_storage:
  rclone-explorer my_storage:/backup/Media
  rclone-explorer --max-items 20 my_storage:/docs";

/// An ncdu-like explorer for rclone storages
#[derive(Clone, Debug, Parser)]
#[command(name = "rclone-explorer", version, after_help = EXAMPLES)]
pub(crate) struct Cli {
    /// Remote storage and optional path (e.g. 'my_storage:' or 'my_storage:/backup/Media').
    /// Without it, the configured remotes are offered for selection.
    pub(crate) remote: Option<String>,

    /// Maximum number of items to show per directory
    #[arg(
        short = 'n',
        long,
        visible_short_alias = 'm',
        default_value_t = DEFAULT_MAX_ITEMS,
        value_parser = parse_max_items
    )]
    pub(crate) max_items: usize,

    /// Listing tool to invoke
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub(crate) rclone: String,

    /// Do not write the diagnostic log file
    #[arg(long)]
    pub(crate) no_log: bool,
}

fn parse_max_items(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(err) => Err(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::try_parse_from(["rclone-explorer"]).unwrap();
        assert_eq!(cli.remote, None);
        assert_eq!(cli.max_items, DEFAULT_MAX_ITEMS);
        assert_eq!(cli.rclone, "rclone");
        assert!(!cli.no_log);
    }

    #[test]
    fn accepts_both_short_flags() {
        let cli = Cli::try_parse_from(["rclone-explorer", "-m", "20", "store:/docs"]).unwrap();
        assert_eq!(cli.max_items, 20);
        assert_eq!(cli.remote.as_deref(), Some("store:/docs"));
        let cli = Cli::try_parse_from(["rclone-explorer", "-n", "5", "store"]).unwrap();
        assert_eq!(cli.max_items, 5);
        let cli = Cli::try_parse_from(["rclone-explorer", "--max-items", "7"]).unwrap();
        assert_eq!(cli.max_items, 7);
    }

    #[test]
    fn rejects_zero_and_garbage_caps() {
        assert!(Cli::try_parse_from(["rclone-explorer", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["rclone-explorer", "-n", "lots"]).is_err());
    }
}
