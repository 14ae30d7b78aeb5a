use crate::error::{ConvertError, Result};
use std::collections::HashMap;

// One measured cell from the input file
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub value: f64,
}

impl Block {
    pub fn new(x: i64, y: i64, z: i64, value: f64) -> Self {
        Block { x, y, z, value }
    }
}

// Integer extent of the observed blocks on each axis
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
    pub min_z: i64,
    pub max_z: i64,
}

impl BoundingBox {
    pub fn from_blocks(blocks: &[Block]) -> Result<Self> {
        let first = blocks.first().ok_or(ConvertError::EmptyInput)?;

        let mut bounds = BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
            min_z: first.z,
            max_z: first.z,
        };

        for block in blocks {
            bounds.min_x = bounds.min_x.min(block.x);
            bounds.max_x = bounds.max_x.max(block.x);
            bounds.min_y = bounds.min_y.min(block.y);
            bounds.max_y = bounds.max_y.max(block.y);
            bounds.min_z = bounds.min_z.min(block.z);
            bounds.max_z = bounds.max_z.max(block.z);
        }

        Ok(bounds)
    }

    // Number of cells in the dense grid along each axis, always >= 1
    pub fn num_x(&self) -> usize {
        (self.max_x - self.min_x + 1) as usize
    }

    pub fn num_y(&self) -> usize {
        (self.max_y - self.min_y + 1) as usize
    }

    pub fn num_z(&self) -> usize {
        (self.max_z - self.min_z + 1) as usize
    }

    pub fn cell_count(&self) -> usize {
        self.num_x() * self.num_y() * self.num_z()
    }
}

// Physical placement of the dense grid, derived once from the bounds and
// the per-axis block size
#[derive(Debug, Clone)]
pub struct GridGeometry {
    pub origin: [f64; 3],
    pub extent: [f64; 3],
    pub num: [usize; 3],
}

impl GridGeometry {
    pub fn new(bounds: &BoundingBox, block_size: [f64; 3]) -> Self {
        // Offset the origin so a minimum block at 1,1,1 lands at 0,0,0
        let origin = [
            block_size[0] * (bounds.min_x - 1) as f64,
            block_size[1] * (bounds.min_y - 1) as f64,
            block_size[2] * (bounds.min_z - 1) as f64,
        ];

        let num = [bounds.num_x(), bounds.num_y(), bounds.num_z()];

        // Each extent spans from the first to the last block center
        let extent = [
            block_size[0] * (num[0] - 1) as f64,
            block_size[1] * (num[1] - 1) as f64,
            block_size[2] * (num[2] - 1) as f64,
        ];

        GridGeometry {
            origin,
            extent,
            num,
        }
    }
}

// Index blocks by coordinate for O(1) lookup during the dense write.
// The last block read wins when the input repeats a coordinate.
pub fn build_block_index(blocks: &[Block]) -> HashMap<(i64, i64, i64), f64> {
    blocks
        .iter()
        .map(|block| ((block.x, block.y, block.z), block.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_blocks() -> Vec<Block> {
        vec![
            Block::new(1, 1, 1, 10.0),
            Block::new(1, 1, 2, 20.0),
            Block::new(2, 1, 1, 30.0),
        ]
    }

    #[test]
    fn bounding_box_covers_all_blocks() {
        let bounds = BoundingBox::from_blocks(&sample_blocks()).unwrap();
        assert_eq!((bounds.min_x, bounds.max_x), (1, 2));
        assert_eq!((bounds.min_y, bounds.max_y), (1, 1));
        assert_eq!((bounds.min_z, bounds.max_z), (1, 2));
        assert_eq!(bounds.num_x(), 2);
        assert_eq!(bounds.num_y(), 1);
        assert_eq!(bounds.num_z(), 2);
        assert_eq!(bounds.cell_count(), 4);
    }

    #[test]
    fn bounding_box_handles_negative_coordinates() {
        let blocks = vec![Block::new(-3, 0, 5, 1.0), Block::new(2, -1, 5, 2.0)];
        let bounds = BoundingBox::from_blocks(&blocks).unwrap();
        assert_eq!(bounds.num_x(), 6);
        assert_eq!(bounds.num_y(), 2);
        assert_eq!(bounds.num_z(), 1);
    }

    #[test]
    fn empty_block_list_is_rejected() {
        let result = BoundingBox::from_blocks(&[]);
        assert!(matches!(result, Err(ConvertError::EmptyInput)));
    }

    #[test]
    fn geometry_origin_is_offset_by_one_block() {
        let bounds = BoundingBox::from_blocks(&sample_blocks()).unwrap();
        let geometry = GridGeometry::new(&bounds, [1.0, 1.0, 1.0]);
        // A minimum block at 1,1,1 maps to a physical origin of 0,0,0
        assert_relative_eq!(geometry.origin[0], 0.0);
        assert_relative_eq!(geometry.origin[1], 0.0);
        assert_relative_eq!(geometry.origin[2], 0.0);
    }

    #[test]
    fn geometry_scales_with_block_size() {
        let blocks = vec![Block::new(2, 3, 4, 1.0), Block::new(5, 3, 4, 2.0)];
        let bounds = BoundingBox::from_blocks(&blocks).unwrap();
        let geometry = GridGeometry::new(&bounds, [2.0, 0.5, 10.0]);
        assert_relative_eq!(geometry.origin[0], 2.0);
        assert_relative_eq!(geometry.origin[1], 1.0);
        assert_relative_eq!(geometry.origin[2], 30.0);
        assert_relative_eq!(geometry.extent[0], 6.0);
        assert_relative_eq!(geometry.extent[1], 0.0);
        assert_relative_eq!(geometry.extent[2], 0.0);
        assert_eq!(geometry.num, [4, 1, 1]);
    }

    #[test]
    fn duplicate_coordinates_keep_last_value() {
        let blocks = vec![Block::new(1, 1, 1, 5.0), Block::new(1, 1, 1, 9.0)];
        let index = build_block_index(&blocks);
        assert_eq!(index.len(), 1);
        assert_eq!(index[&(1, 1, 1)], 9.0);
    }
}
