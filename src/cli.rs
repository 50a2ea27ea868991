//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// `Tastebud` - food discovery and dining journal for the terminal
///
/// Browse restaurants, keep a food diary, plan visits and log what you ate.
#[derive(Parser, Debug)]
#[command(name = "tastebud", version, about, long_about = None)]
pub struct Args {
    /// Directory holding `.tastebud/` (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Tab to open at startup (discover, diary, saved, stats, profile)
    #[arg(long, value_name = "TAB", value_parser = parse_tab)]
    pub tab: Option<crate::app::state::Tab>,

    /// Log filter used when `TASTEBUD_LOG` is not set
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

fn parse_tab(s: &str) -> Result<crate::app::state::Tab, String> {
    crate::app::state::Tab::from_name(s)
        .ok_or_else(|| format!("unknown tab `{s}`; expected discover, diary, saved, stats or profile"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::app::state::Tab;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["tastebud"]).unwrap();
        assert_eq!(args.dir, None);
        assert_eq!(args.tab, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn parses_tab_and_dir() {
        let args =
            Args::try_parse_from(["tastebud", "--tab", "Diary", "--dir", "/tmp/x"]).unwrap();
        assert_eq!(args.tab, Some(Tab::Diary));
        assert_eq!(args.dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn rejects_unknown_tab() {
        assert!(Args::try_parse_from(["tastebud", "--tab", "home"]).is_err());
    }
}
