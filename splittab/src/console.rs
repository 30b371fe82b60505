use std::io::{self, BufRead, Write};

use splittab_application::Console;

/// Stdin/stdout-backed console for the interactive menu.
pub struct StdConsole;

impl Console for StdConsole {
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        print!("{text}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn print(&mut self, text: &str) {
        println!("{text}");
    }
}
