pub mod solver_file;
pub mod segment_data;
