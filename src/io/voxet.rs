use crate::config::ConvertConfig;
use crate::error::Result;
use crate::grid::{BoundingBox, GridGeometry};
use byteorder::{BigEndian, WriteBytesExt};
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// Write the .vo text header describing the grid geometry and the single
// property. The grid is always axis aligned, so AXIS_U/V/W each carry one
// non-zero component.
pub fn write_voxet_header(
    path: &Path,
    geometry: &GridGeometry,
    config: &ConvertConfig,
) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "GOCAD Voxet 1")?;
    writeln!(
        out,
        "AXIS_O {:.6} {:.6} {:.6}",
        geometry.origin[0], geometry.origin[1], geometry.origin[2]
    )?;
    writeln!(out, "AXIS_U {:.6} 0 0", geometry.extent[0])?;
    writeln!(out, "AXIS_V 0 {:.6} 0", geometry.extent[1])?;
    writeln!(out, "AXIS_W 0 0 {:.6}", geometry.extent[2])?;
    writeln!(out, "AXIS_MIN 0 0 0")?;
    writeln!(out, "AXIS_MAX 1 1 1")?;
    writeln!(
        out,
        "AXIS_N {} {} {}",
        geometry.num[0], geometry.num[1], geometry.num[2]
    )?;
    writeln!(out)?;
    writeln!(out, "PROPERTY 1 \"{}\"", config.property_name)?;
    writeln!(out, "PROP_NO_DATA_VALUE 1 {:.6}", config.no_data_value)?;
    writeln!(out, "PROP_FILE 1 {}", config.data_file_name())?;
    writeln!(out)?;
    writeln!(out, "END")?;
    out.flush()?;

    Ok(())
}

// Stream the dense payload: one big-endian 4-byte float per cell, x
// varying fastest, then y, then z. Cells missing from the index get the
// no-data value. A source value equal to the no-data value is written
// as-is, so the viewer cannot tell it apart from an absent cell.
//
// The grid is never materialized; each cell is looked up as it is
// written, so memory stays proportional to the number of input blocks.
pub fn write_property_data(
    path: &Path,
    index: &HashMap<(i64, i64, i64), f64>,
    bounds: &BoundingBox,
    no_data_value: f64,
    progress: &ProgressBar,
) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    // u/v/w are the output file's zero-based coordinates
    for w in 0..bounds.num_z() {
        for v in 0..bounds.num_y() {
            for u in 0..bounds.num_x() {
                let key = (
                    bounds.min_x + u as i64,
                    bounds.min_y + v as i64,
                    bounds.min_z + w as i64,
                );
                let value = index.get(&key).copied().unwrap_or(no_data_value);
                out.write_f32::<BigEndian>(value as f32)?;
            }
        }
        progress.inc(1);
    }
    out.flush()?;

    Ok(())
}
