use anyhow::{Context, Result};
use clap::{Parser, command};
use std::path::PathBuf;

use crate::config::ConvertConfig;

/// Convert a csv block model into a GOCAD voxet for 3D visualization
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the input csv file (header row, then x,y,z,... columns)
    input: PathBuf,

    /// Zero-based column holding the value to visualize
    #[arg(short, long, default_value_t = 3)]
    value_column: usize,

    /// Base name for the output files (defaults to the input file stem)
    #[arg(short = 'b', long)]
    output_base: Option<String>,

    /// Directory the output files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Name of the property in the output files
    #[arg(short, long, default_value = "prop_value")]
    property_name: String,

    /// Block size along x
    #[arg(long, default_value_t = 1.0)]
    block_size_x: f64,

    /// Block size along y
    #[arg(long, default_value_t = 1.0)]
    block_size_y: f64,

    /// Block size along z
    #[arg(long, default_value_t = 1.0)]
    block_size_z: f64,

    /// Value written for cells with no measurement
    #[arg(short, long, default_value_t = -99999.0, allow_hyphen_values = true)]
    no_data_value: f64,
}

pub fn get_args() -> Result<ConvertConfig> {
    let args = Args::parse();

    // Default the output base to the input file name without its extension
    let output_base = match args.output_base {
        Some(base) => base,
        None => args
            .input
            .file_stem()
            .context("Input path has no file name")?
            .to_string_lossy()
            .into_owned(),
    };

    Ok(ConvertConfig {
        input_path: args.input,
        value_column: args.value_column,
        output_base,
        output_dir: args.output_dir,
        property_name: args.property_name,
        block_size: [args.block_size_x, args.block_size_y, args.block_size_z],
        no_data_value: args.no_data_value,
    })
}
