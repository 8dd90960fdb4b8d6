//! Completion scripts for the `matcalc` command line.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

/// Binary name used when the command does not set one.
pub const BIN_NAME: &str = "matcalc";

/// Write the `shell` completion script for the arguments described by `C`.
pub fn write_completion<C: CommandFactory>(shell: Shell, out: &mut dyn io::Write) {
    let mut cmd = C::command();
    let bin = cmd.get_bin_name().unwrap_or(BIN_NAME).to_owned();
    generate(shell, &mut cmd, bin, out);
}
