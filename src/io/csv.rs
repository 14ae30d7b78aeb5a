use crate::error::{ConvertError, Result};
use crate::grid::Block;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

// Parse one data row into a block: columns 0-2 are the integer x/y/z,
// value_column holds the value to visualize
fn parse_block(record: &StringRecord, value_column: usize, line: u64) -> Result<Block> {
    let needed = value_column.max(2) + 1;
    if record.len() < needed {
        return Err(ConvertError::Parse {
            line,
            message: format!(
                "expected at least {} columns, found {}",
                needed,
                record.len()
            ),
        });
    }

    let x = parse_coordinate(record, 0, "x", line)?;
    let y = parse_coordinate(record, 1, "y", line)?;
    let z = parse_coordinate(record, 2, "z", line)?;

    let value = record[value_column]
        .parse::<f64>()
        .map_err(|_| ConvertError::Parse {
            line,
            message: format!(
                "invalid value '{}' in column {}",
                &record[value_column], value_column
            ),
        })?;

    Ok(Block::new(x, y, z, value))
}

fn parse_coordinate(record: &StringRecord, column: usize, axis: &str, line: u64) -> Result<i64> {
    record[column]
        .parse::<i64>()
        .map_err(|_| ConvertError::Parse {
            line,
            message: format!("invalid {} coordinate '{}'", axis, &record[column]),
        })
}

// Read every data row of the input file; the header row is discarded
pub fn read_blocks(path: &Path, value_column: usize) -> Result<Vec<Block>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut blocks = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        blocks.push(parse_block(&record, value_column, line)?);
    }

    Ok(blocks)
}
