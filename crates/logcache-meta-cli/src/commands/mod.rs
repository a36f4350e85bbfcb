pub mod meta;

use std::fmt::Display;

/// Print one line to stderr and exit with status 1.
pub fn fatal(err: impl Display) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
