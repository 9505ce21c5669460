//! # FHIR Generator CLI
//!
//! Regenerates a release module of the model crate from the official
//! StructureDefinitions. The R4 definitions the model is built from are
//! checked in under `crates/MeridianFhirGen/definitions/r4`.
//!
//! ## Usage
//!
//! ```bash
//! # Everything found under the definitions directory
//! meridian-fhir-gen
//!
//! # A reduced vocabulary from another download
//! meridian-fhir-gen --input ~/Downloads/fhir-definitions --only Period,Patient,Provenance
//! ```
//!
//! Set `RUST_LOG=debug` to see each file as it is parsed and written.

use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use meridian_fhir::FhirVersion;
use meridian_fhir_gen::{GeneratorConfig, run};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Directory holding the release's definition JSON files.
    #[arg(long, env = "MERIDIAN_FHIR_INPUT", default_value = "crates/MeridianFhirGen/definitions/r4")]
    input: PathBuf,

    /// Source directory of the model crate.
    #[arg(long, env = "MERIDIAN_FHIR_OUTPUT", default_value = "crates/MeridianFhir/src")]
    output: PathBuf,

    /// Comma-separated complex types and resources to generate.
    #[arg(long, value_delimiter = ',')]
    only: Option<Vec<String>>,

    /// FHIR release to generate.
    #[arg(long, value_enum, default_value_t = FhirVersion::default())]
    version: FhirVersion,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = GeneratorConfig {
        input_dir: args.input,
        output_dir: args.output,
        only: args.only,
        version: args.version,
    };

    let summary = run(&config)
        .with_context(|| format!("generating {} from {}", config.version, config.input_dir.display()))?;
    tracing::info!(
        primitives = summary.primitives.len(),
        complex_types = summary.complex_types.len(),
        resources = summary.resources.len(),
        "wrote {} files",
        summary.files_written
    );
    Ok(())
}
