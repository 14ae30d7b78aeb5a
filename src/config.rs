use std::path::PathBuf;

// Configuration for one conversion run, resolved from the command line
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input_path: PathBuf,
    pub value_column: usize,
    pub output_base: String,
    pub output_dir: PathBuf,
    pub property_name: String,
    pub block_size: [f64; 3],
    pub no_data_value: f64,
}

impl ConvertConfig {
    // Name of the binary payload file, as referenced from the header
    pub fn data_file_name(&self) -> String {
        format!("{}_{}@@", self.output_base, self.property_name)
    }

    pub fn header_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.vo", self.output_base))
    }

    pub fn data_path(&self) -> PathBuf {
        self.output_dir.join(self.data_file_name())
    }
}
