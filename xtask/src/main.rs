//! Build automation following <https://github.com/matklad/cargo-xtask/>:
//! regenerates the codepoint property tables checked into `src/` from the
//! Unicode Character Database. Run as `cargo xtask gen-tables <version>`.
mod flags;
mod tables;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use xshell::{cmd, Shell};

fn main() -> Result<()> {
    let sh = Shell::new()?;
    sh.change_dir(project_root());

    let flags = flags::Xtask::from_env()?;
    match flags.subcommand {
        flags::XtaskCmd::Help(_) => {
            println!("{}", flags::Xtask::HELP);
            Ok(())
        }
        flags::XtaskCmd::GenTables(cmd) => cmd.run(&sh),
    }
}

fn project_root() -> PathBuf {
    Path::new(
        &env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| env!("CARGO_MANIFEST_DIR").to_owned()),
    )
    .ancestors()
    .nth(1)
    .unwrap()
    .to_path_buf()
}

pub fn reformat(sh: &Shell, text: String) -> String {
    let mut stdout = cmd!(sh, "rustfmt").stdin(text).read().unwrap();
    if !stdout.ends_with('\n') {
        stdout.push('\n');
    }
    stdout
}
