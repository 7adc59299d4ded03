use anyhow::Result;
use std::io::Write;

use crate::ui::Style;

/// Exit status after a usage error.
pub const USAGE_EXIT_CODE: exitcode::ExitCode = 1;

/// Writes the error line to `err` and the usage text to `out`.
pub fn print_usage_error<E: Write, O: Write>(err: &mut E, out: &mut O) -> Result<()> {
    writeln!(err, "{}", Style::error("error: invalid arguments"))?;
    writeln!(out, "Usage:")?;
    writeln!(out, "  translate \"Hello World\" en de")?;
    writeln!(out, "  translate -- \"--Hello\" en de")?;
    writeln!(out, "  translate -c")?;
    Ok(())
}
