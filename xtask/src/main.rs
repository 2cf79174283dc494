//! Repository build tasks, run with `cargo xtask <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Repository build tasks")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the glyphcast binary
    Man {
        /// Output directory for the generated pages
        #[arg(long, default_value = "dist/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Cli::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("failed to create {}", out_dir.display()))?;

    let cmd = glyphcast::cli::Cli::command();
    render_page(&cmd, out_dir, "glyphcast")?;
    for sub in cmd.get_subcommands() {
        if sub.get_name() == "help" {
            continue;
        }
        let name = format!("glyphcast-{}", sub.get_name());
        render_page(sub, out_dir, &name)?;
    }
    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn render_page(cmd: &clap::Command, out_dir: &Path, name: &str) -> Result<()> {
    let man = clap_mangen::Man::new(cmd.clone()).title(name.to_uppercase());
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    let path = out_dir.join(format!("{}.1", name));
    fs::write(&path, buf).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
