use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

mod cli;
mod config;
mod error;
mod grid;
mod io;

use cli::get_args;
use config::ConvertConfig;
use grid::{BoundingBox, GridGeometry, build_block_index};
use io::csv::read_blocks;
use io::voxet::{write_property_data, write_voxet_header};

fn main() -> Result<()> {
    let config = get_args()?;
    run(&config)
}

fn run(config: &ConvertConfig) -> Result<()> {
    // Ingest the sparse block list
    println!("Reading input file");
    let blocks = read_blocks(&config.input_path, config.value_column)
        .with_context(|| format!("Failed to read input: {:?}", config.input_path))?;
    println!("- read {} blocks", blocks.len());

    // Resolve the dense grid from the observed extent
    let bounds = BoundingBox::from_blocks(&blocks)?;
    println!("- x {} to {}", bounds.min_x, bounds.max_x);
    println!("- y {} to {}", bounds.min_y, bounds.max_y);
    println!("- z {} to {}", bounds.min_z, bounds.max_z);

    let geometry = GridGeometry::new(&bounds, config.block_size);
    let index = build_block_index(&blocks);

    println!("Writing output .vo file");
    let header_path = config.header_path();
    write_voxet_header(&header_path, &geometry, config)
        .with_context(|| format!("Failed to write header: {:?}", header_path))?;

    println!("Writing output @@ file");
    let pb = ProgressBar::new(bounds.num_z() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} slabs ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let data_path = config.data_path();
    write_property_data(&data_path, &index, &bounds, config.no_data_value, &pb)
        .with_context(|| format!("Failed to write payload: {:?}", data_path))?;
    pb.finish_and_clear();

    println!("Done");
    Ok(())
}
