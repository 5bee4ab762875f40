//! CLI entry point for dirnotes

use std::path::PathBuf;
use std::process;

use chrono::Local;
use clap::Parser;
use dirnotes::{
    Inventory, OutlineConfig, OutlineMetadata, OutlineMode, OutlineRenderer, ReportWriter,
    SystemInfo, TreeWalker, WalkerConfig, run_timestamp,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dirnotes")]
#[command(about = "Inventory document and archive files across directory trees as notes")]
#[command(version)]
struct Args {
    /// Directories to inventory
    #[arg(default_value = ".")]
    roots: Vec<PathBuf>,

    /// Directory the notes are written to
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Write one outline document per root instead of a combined one
    #[arg(long = "per-root")]
    per_root: bool,

    /// Skip directories with this name (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Also collect files with this extension (can be used multiple times)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    ext: Vec<String>,

    /// Start from an empty ignore list (only --ignore names are skipped)
    #[arg(long = "no-default-ignores")]
    no_default_ignores: bool,

    /// Start from an empty extension list (only --ext extensions are collected)
    #[arg(long = "no-default-extensions")]
    no_default_extensions: bool,

    /// Leave out the files of directories that have no subdirectories
    #[arg(long = "hide-leaf-files")]
    hide_leaf_files: bool,

    /// Log every collected file
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Add the leading dot if it was left off (`pdf` -> `.pdf`).
fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

fn walker_config(args: &Args) -> WalkerConfig {
    let mut config = WalkerConfig::default();
    if args.no_default_ignores {
        config.ignored_names.clear();
    }
    if args.no_default_extensions {
        config.extensions.clear();
    }
    config.ignored_names.extend(args.ignore.iter().cloned());
    config
        .extensions
        .extend(args.ext.iter().map(|e| normalize_extension(e)));
    config
}

fn init_logging(args: &Args) {
    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    let walker = TreeWalker::new(walker_config(&args));
    let inventory = Inventory::collect(&walker, &args.roots);

    for path in &inventory.rejected {
        println!("{} is not a valid file or container.", path.display());
    }

    let mode = if args.per_root {
        OutlineMode::PerRoot
    } else {
        OutlineMode::Combined
    };
    let renderer = OutlineRenderer::new(OutlineConfig {
        hide_leaf_files: args.hide_leaf_files,
    });
    let writer = ReportWriter::new(
        &args.output_dir,
        run_timestamp(&Local::now()),
        renderer,
        mode,
    );
    let meta = OutlineMetadata::capture(SystemInfo::detect());

    let written = match writer.write(&inventory, &meta) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("dirnotes: error writing output: {}", e);
            process::exit(1);
        }
    };

    if !args.quiet {
        for path in &written {
            println!("{}", path.display());
        }
        println!(
            "{} directories, {} files, {} errors",
            inventory.dir_count(),
            inventory.file_count(),
            inventory.errors.len()
        );
    }
}
