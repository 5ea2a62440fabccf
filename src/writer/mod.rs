pub mod tabular;
pub mod vtp_writer;
