use crate::generator::{generate, GenerateOptions, TOOL_NAME};
use clap::Parser;
use log::{debug, LevelFilter};
use std::path::PathBuf;

/// CLI definition for the test data generator.
/// Underscore spellings of the long flags are accepted so existing build
/// scripts keep working.
#[derive(Parser, Debug)]
#[command(name = "gen-test-data")]
#[command(about = "Convert ifm/ofm .npy pairs into C++ test data sources")]
#[command(version)]
pub struct Cli {
    /// Folder holding the ifm<N>.npy / ofm<N>.npy pairs to convert
    #[arg(long, visible_alias = "data_folder_path", value_name = "DIR")]
    pub data_folder_path: PathBuf,

    /// Folder the generated .cc files are written to
    #[arg(
        long,
        visible_alias = "source_folder_path",
        value_name = "DIR",
        default_value = "."
    )]
    pub source_folder_path: PathBuf,

    /// Folder the generated header is written to
    #[arg(
        long,
        visible_alias = "header_folder_path",
        value_name = "DIR",
        default_value = "."
    )]
    pub header_folder_path: PathBuf,

    /// Suffix for generated symbols and file names (e.g. `kws` gives `ifm0_kws`)
    #[arg(long, default_value_t = String::new())]
    pub usecase: String,

    /// Namespace to wrap the generated code in; repeat for nested namespaces
    #[arg(long = "namespaces", value_name = "NS")]
    pub namespaces: Vec<String>,

    /// License/comment template used instead of the built-in header_template.txt
    #[arg(long, visible_alias = "license_template", value_name = "FILE")]
    pub license_template: Option<PathBuf>,

    /// Folder to load all templates from instead of the built-in ones
    #[arg(long, visible_alias = "template_dir", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long)]
    pub verbosity: bool,
}

impl Cli {
    pub fn to_options(&self) -> GenerateOptions {
        GenerateOptions {
            data_folder: self.data_folder_path.clone(),
            source_folder: self.source_folder_path.clone(),
            header_folder: self.header_folder_path.clone(),
            usecase: self.usecase.clone(),
            namespaces: self.namespaces.clone(),
            license_template: self.license_template.clone(),
            template_dir: self.template_dir.clone(),
        }
    }
}

/// Entrypoint for CLI logic.
/// Returns exit code (0 for success, nonzero for error).
pub fn run_cli(cli: Cli) -> i32 {
    init_logging(cli.verbosity);
    debug!("Running {} with {:?}", TOOL_NAME, cli);

    match generate(&cli.to_options()) {
        Ok(report) => {
            println!(
                "✓ Generated test data for {} ifm/ofm pair(s), {} file(s) written",
                report.fm_count(),
                report.written.len()
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Info by default, debug with `--verbosity`; `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
