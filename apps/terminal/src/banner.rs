//! Startup banner and welcome text.

use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

use crate::console::Console;
use crate::error::AppResult;

/// Lines of the banner art that are shown.
pub const BANNER_LINES: usize = 45;

/// Prints the banner art (if the file is readable) and the welcome lines.
pub fn show<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    banner: Option<&Path>,
    shop_name: &str,
) -> AppResult<()> {
    if let Some(path) = banner {
        match std::fs::read_to_string(path) {
            Ok(art) => {
                for line in art.lines().take(BANNER_LINES) {
                    console.say(line.trim())?;
                }
            }
            Err(e) => debug!(?path, error = %e, "Banner not shown"),
        }
    }

    console.say(format!("> Welcome to the {} ordering app!", shop_name))?;
    console.say("  Thank you for being a part of our journey!")?;
    console.say("")?;
    console.say("           - With Much Love Dew :D")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_banner_is_cut_at_45_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DewsASCII.txt");
        let art: String = (1..=60).map(|i| format!("  line {i}  \n")).collect();
        std::fs::write(&path, art).unwrap();

        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new(), 3);
        show(&mut console, Some(&path), "Dew’s Potion Emporium").unwrap();

        let out = String::from_utf8(console.output().clone()).unwrap();
        assert!(out.starts_with("line 1\n"));
        assert!(out.contains("line 45\n"));
        assert!(!out.contains("line 46"));
        assert!(out.contains("> Welcome to the Dew’s Potion Emporium ordering app!"));
    }

    #[test]
    fn test_missing_banner_is_skipped() {
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new(), 3);
        show(&mut console, Some(Path::new("/no/such/banner.txt")), "Dew's").unwrap();

        let out = String::from_utf8(console.output().clone()).unwrap();
        assert!(out.starts_with("> Welcome to the Dew's ordering app!"));
    }
}
