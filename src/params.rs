/// Run parameters shared by every pipeline stage.
///
/// The caller fills in the path and selection fields; the solver file parser
/// writes `model_name` and the timing fields back as it encounters the
/// corresponding directives.
#[derive(Debug, Clone)]
pub struct Parameters {
    pub results_directory: String,      // Directory containing the solver file and data files
    pub solver_file_name: String,       // Solver description file name (e.g. "solver.in")
    pub output_directory: String,       // Directory for tabular output files
    pub output_file_name: String,       // Base name for tabular output files
    pub output_format: String,          // Extension of tabular output files (e.g. "csv")
    pub data_names: Vec<String>,        // Quantity names to extract (e.g. "flow", "pressure")
    pub segments: Vec<String>,          // Segment names selected for tabular output

    // Written by the solver file parser:
    pub model_name: String,             // From the MODEL directive; prefixes data file names
    pub time_step: f64,                 // From SOLVEROPTIONS
    pub save_freq: usize,               // From SOLVEROPTIONS; stride between saved steps
    pub num_steps: usize,               // From SOLVEROPTIONS; total step count
    pub times: Vec<f64>,                // Derived output times: i * time_step for i in (0..=num_steps).step_by(save_freq)
}

impl Parameters {
    pub const FILE_NAME_SEP: &'static str = "_";
    pub const DATA_FILE_EXTENSION: &'static str = ".dat";

    /// Full path of the solver description file.
    pub fn solver_file_path(&self) -> String {
        format!("{}/{}", self.results_directory, self.solver_file_name)
    }

    /// Full path of the data file holding one quantity for one segment.
    pub fn data_file_path(&self, segment_name: &str, data_name: &str) -> String {
        format!(
            "{}/{}{}{}{}{}",
            self.results_directory,
            self.model_name,
            segment_name,
            Self::FILE_NAME_SEP,
            data_name,
            Self::DATA_FILE_EXTENSION
        )
    }

    /// Full path of the tabular output file for one quantity.
    pub fn output_file_path(&self, data_name: &str) -> String {
        format!(
            "{}/{}{}{}.{}",
            self.output_directory,
            self.output_file_name,
            Self::FILE_NAME_SEP,
            data_name,
            self.output_format
        )
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            results_directory: String::new(),
            solver_file_name: String::new(),
            output_directory: String::new(),
            output_file_name: String::new(),
            output_format: "csv".to_string(),
            data_names: Vec::new(),
            segments: Vec::new(),
            model_name: String::new(),
            time_step: 0.0,
            save_freq: 0,
            num_steps: 0,
            times: Vec::new(),
        }
    }
}
