use clap::Parser;
use eyre::Result;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

mod analysis;
mod cli;
mod output;
mod parser;
mod version;
mod walk;

use cli::{Cli, Command};
use output::{output, render_listing, should_use_json, write_listing, KeywordListing};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let use_json = should_use_json(cli.json);

    match &cli.command {
        Command::Keywords {
            header,
            library,
            output,
            stdout,
        } => run_keywords(header, library, output, *stdout),
        Command::Copy { src, dst, env } => run_copy(src, dst.as_deref(), env, use_json),
        Command::VersionCheck {
            properties,
            manifest,
            header,
            macro_prefix,
        } => run_version_check(properties, manifest, header, macro_prefix, use_json),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Compute the listing for a header file (testable without writing output)
fn compute_keywords(header: &Path, library: &str) -> Result<(KeywordListing, String)> {
    let source = parser::read_header(header)?;
    info!(header = %header.display(), lines = source.line_count(), "scanning header");
    let listing = analysis::extract(&source.text, library);
    let text = render_listing(&listing);
    Ok((listing, text))
}

fn run_keywords(header: &Path, library: &str, output: &Path, stdout: bool) -> Result<()> {
    let (_, text) = compute_keywords(header, library)?;

    if stdout {
        print!("{}", text);
        return Ok(());
    }

    write_listing(output, &text)?;
    println!("Extracted keywords saved to: {}", output.display());
    Ok(())
}

/// Explicit destination, or the libdeps folder of the PlatformIO environment
fn copy_destination(dst: Option<&Path>, env: &str) -> PathBuf {
    match dst {
        Some(dst) => dst.to_path_buf(),
        None => {
            println!("PlatformIO environment: {}", env);
            cli::pio_libdeps_dir(env)
        }
    }
}

fn run_copy(src: &Path, dst: Option<&Path>, env: &str, use_json: bool) -> Result<()> {
    let dst = copy_destination(dst, env);
    println!("Updating source files to {}", dst.display());
    let stats = walk::copy_tree(src, &dst)?;
    info!(files = stats.files, directories = stats.directories, "copy finished");
    output(&stats, use_json)
}

/// Compute the version report (testable without printing)
fn compute_version_check(
    properties: &Path,
    manifest: &Path,
    header: &Path,
    macro_prefix: &str,
) -> Result<output::VersionReport> {
    version::compare_versions(properties, manifest, header, macro_prefix)
}

fn run_version_check(
    properties: &Path,
    manifest: &Path,
    header: &Path,
    macro_prefix: &str,
    use_json: bool,
) -> Result<()> {
    let report = compute_version_check(properties, manifest, header, macro_prefix)?;
    output(&report, use_json)?;
    report.ensure_match()?;
    Ok(())
}
