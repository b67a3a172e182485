//! File and stdin helpers shared by the commands.
//!
//! - Reading a line of interactive input
//! - Reading card files (UTF-8 BOM stripped)
//! - Falling back to the bundled sample deck

use std::io::BufRead;

/// Sample deck compiled into the binary, used when no card file is given.
pub const SAMPLE_DECK: &str = include_str!("../data/cards.csv");

/// Reads a line of input from a buffered reader, blocking until available.
///
/// # Returns
///
/// * `Some(String)` - Trimmed input line (may be empty after trimming)
/// * `None` - EOF or read error occurred
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use rojak_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  y \n");
/// assert_eq!(read_stdin_line(&mut input), Some("y".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read a text file, stripping a leading UTF-8 BOM.
pub fn read_text(path: &str) -> Result<String, String> {
    let mut content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Card text from `path`, or the bundled sample deck when no path is given.
pub fn read_card_source(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(p) => read_text(p),
        None => Ok(SAMPLE_DECK.to_string()),
    }
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
