//! Version information command

use anyhow::Result;

use crate::cli::Output;

pub fn execute(output: &Output) -> Result<()> {
    output.table_row("name", crate::PKG_NAME);
    output.table_row("version", crate::VERSION);
    output.table_row("description", crate::PKG_DESCRIPTION);
    Ok(())
}
