//! Input and output endpoints; `-` selects stdin or stdout

use factdb_core::{ConvertResult, open_fact_file};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Path standing for stdin or stdout
pub const STDIO: &str = "-";

pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

/// Open a fact source
pub fn open_input(path: &Path) -> ConvertResult<Box<dyn BufRead>> {
    if is_stdio(path) {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(open_fact_file(path)?))
    }
}

/// Write `contents` to a file or stdout
pub fn write_output(path: &Path, contents: &str) -> io::Result<()> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(contents.as_bytes())?;
        stdout.flush()
    } else {
        fs::write(path, contents)
    }
}
