use clap::Parser;
use std::process::exit;
use testdata_gen::cli::{run_cli, Cli};

/// ===============================================================
/// gen-test-data - embeds ifm/ofm .npy test vectors as C++ sources
///
/// Reads ifm<N>.npy / ofm<N>.npy pairs from a data folder and writes
/// one .cc file per array plus a shared TestData header and source
/// that index them.
/// ===============================================================
fn main() {
    let cli = Cli::parse();
    exit(run_cli(cli));
}
