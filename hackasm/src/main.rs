use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use hackasm::assemble;
use log::info;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Assembly source file
    input: PathBuf,

    /// Output file
    #[clap(short, long, default_value = "output.hack")]
    output: PathBuf,

    /// Also write debug symbols to <output>.hdb
    #[clap(short = 'g', long)]
    debug: bool,

    /// Print a listing of the assembled program
    #[clap(short, long)]
    dump: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    run(&Args::parse())
}

fn run(args: &Args) -> Result<()> {
    let program_text = fs::read_to_string(&args.input)
        .with_context(|| format!("Couldn't read {}", args.input.display()))?;

    let assembled = assemble(&program_text)
        .with_context(|| format!("Couldn't assemble {}", args.input.display()))?;

    fs::write(&args.output, assembled.to_hack())
        .with_context(|| format!("Couldn't write {}", args.output.display()))?;
    info!(
        "{} -> {} ({} words)",
        args.input.display(),
        args.output.display(),
        assembled.records.len()
    );

    if args.debug {
        let name = args
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        fs::write(debug_path(&args.output), assembled.debug_info(&name).to_string()?)
            .with_context(|| format!("Couldn't write {}", debug_path(&args.output).display()))?;
    }

    if args.dump {
        print!("{}", assembled.listing());
    }

    Ok(())
}

fn debug_path(output: &Path) -> PathBuf {
    PathBuf::from(format!("{}.hdb", output.display()))
}
