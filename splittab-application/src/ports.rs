use std::io;

/// Console access used by the interactive menu.
///
/// The binary implements this over stdin/stdout; tests drive the menu with
/// scripted stand-ins.
pub trait Console {
    /// Writes `text` without a trailing newline and reads one input line,
    /// with the line terminator stripped.
    fn prompt(&mut self, text: &str) -> io::Result<String>;

    /// Writes `text` followed by a newline.
    fn print(&mut self, text: &str);
}
