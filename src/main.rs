//! swelldoc — generate class documentation from annotated JavaScript.
//!
//! Walks the given sources, extracts `/** ... */` blocks and writes one page
//! per documented class:
//!
//! - **file mode** (default): `swelldoc -o compiled src/`
//! - **stdout mode**: `swelldoc --stdout -f markdown Lib/Fx.js`

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use swelldoc::output::{self, WriteOutcome};
use swelldoc::{discover, parser, render, MalformedPolicy};

#[derive(Parser)]
#[command(
    name = "swelldoc",
    about = "Generate class documentation from annotated JavaScript sources"
)]
struct Cli {
    /// Source files, directories (walked recursively) or glob patterns
    #[arg(default_value = "src/")]
    paths: Vec<String>,

    /// Output directory, created if missing
    #[arg(short = 'o', long, default_value = "compiled")]
    output: PathBuf,

    /// Output format: html (default), markdown, json
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Rewrite output files even when their content is unchanged
    #[arg(long)]
    overwrite: bool,

    /// Fail a file on a malformed @param/@return instead of skipping the tag
    #[arg(long)]
    strict: bool,

    /// Source extension picked up when walking directories
    #[arg(long, default_value = "js")]
    ext: String,

    /// Print pages to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// More logging (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Per-run counters, logged at the end.
#[derive(Debug, Default)]
struct Summary {
    created: usize,
    updated: usize,
    unchanged: usize,
    skipped: usize,
    failed: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let renderer = render::create_renderer(&cli.format)?;
    let policy = if cli.strict {
        MalformedPolicy::Fail
    } else {
        MalformedPolicy::Skip
    };

    let input_files = discover::expand(&cli.paths, &cli.ext)?;
    log::info!("{} source file(s) found", input_files.len());

    if !cli.stdout {
        fs::create_dir_all(&cli.output).with_context(|| {
            format!("failed to create output directory: {}", cli.output.display())
        })?;
    }

    let mut summary = Summary::default();
    // page name -> source that produced it
    let mut written: HashMap<String, String> = HashMap::new();

    for path in &input_files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("skipping {}: {}", path.display(), e);
                summary.failed += 1;
                continue;
            }
        };

        let doc = match parser::parse_file(path, &content, policy) {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                summary.skipped += 1;
                continue;
            }
            Err(e) => {
                log::error!("{}", e);
                summary.failed += 1;
                continue;
            }
        };

        for page in render::pages(&doc) {
            let rendered = match renderer.render(&page) {
                Ok(rendered) => rendered,
                Err(e) => {
                    log::error!("{}: {:#}", doc.source, e);
                    summary.failed += 1;
                    continue;
                }
            };
            if cli.stdout {
                print!("{}", rendered);
                continue;
            }

            if let Some(previous) = written.insert(page.name.clone(), doc.source.clone()) {
                log::warn!(
                    "{} documented in both {} and {}; keeping the latter",
                    page.name,
                    previous,
                    doc.source
                );
            }

            let out_path = output_path(&cli.output, &page.name, renderer.file_extension());
            match output::write_if_changed(&out_path, &rendered, cli.overwrite)? {
                WriteOutcome::Created => summary.created += 1,
                WriteOutcome::Updated => summary.updated += 1,
                WriteOutcome::Unchanged => summary.unchanged += 1,
            }
            log::debug!("{} -> {}", doc.source, out_path.display());
        }
    }

    log::info!(
        "{} created, {} updated, {} unchanged, {} source(s) without docs",
        summary.created,
        summary.updated,
        summary.unchanged,
        summary.skipped
    );

    if summary.failed > 0 {
        bail!("{} source file(s) could not be documented", summary.failed);
    }
    Ok(())
}

/// `-q` → errors only, default → warnings, each `-v` one level more.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

/// `compiled` + `Swell.Core.Event` + `html` → `compiled/Swell.Core.Event.html`
fn output_path(dir: &Path, page_name: &str, ext: &str) -> PathBuf {
    dir.join(format!("{}.{}", page_name, ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_keeps_dotted_name() {
        assert_eq!(
            output_path(Path::new("compiled"), "Swell.Core.Event", "html"),
            PathBuf::from("compiled/Swell.Core.Event.html")
        );
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["swelldoc"]);
        assert_eq!(cli.paths, vec!["src/"]);
        assert_eq!(cli.output, PathBuf::from("compiled"));
        assert_eq!(cli.format, "html");
        assert!(!cli.overwrite);
        assert!(!cli.strict);
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::parse_from(["swelldoc", "--overwrite", "--strict", "-vv", "a.js", "lib"]);
        assert!(cli.overwrite);
        assert!(cli.strict);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.paths, vec!["a.js", "lib"]);
    }
}
