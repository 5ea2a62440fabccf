// Import standard library modules for system interaction
use std::env;                   // Command line arguments via env::args()
use std::io::Write;             // For the custom log line format
use std::process;               // process::exit() for terminating with error codes

use chrono::Local;
use log::LevelFilter;

use extractrs::database::SolverModel;
use extractrs::geometry::MeshGeometry;
use extractrs::params::Parameters;
use extractrs::parser::segment_data::SegmentDataReader;
use extractrs::parser::solver_file::SolverFileParser;
use extractrs::writer::tabular::TabularWriter;
use extractrs::writer::vtp_writer::VtpWriter;

/// Struct to hold parsed command line arguments in a structured format
struct CommandLineArgs {
    results_directory: String,      // Directory containing the solver file and data files
    solver_file_name: String,       // Solver description file name
    output_directory: String,       // Directory for output files
    output_file_name: String,       // Base name for tabular output files
    output_format: String,          // Tabular output extension (default "csv")
    data_names: Vec<String>,        // Quantity names to extract
    segments: Vec<String>,          // Segment names to include in output
    write_mesh: bool,               // Also emit .vtp mesh geometry files
}

/// Parse command line arguments and validate them according to program requirements
fn parse_arguments(args: Vec<String>) -> Result<CommandLineArgs, String> {
    if args.len() < 2 {
        return Err("Insufficient arguments".to_string());
    }

    // Defaults; the required options are validated after the loop
    let mut results_directory = ".".to_string();
    let mut solver_file_name: Option<String> = None;
    let mut output_directory = ".".to_string();
    let mut output_file_name = "results".to_string();
    let mut output_format = "csv".to_string();
    let mut data_names: Vec<String> = Vec::new();
    let mut segments: Vec<String> = Vec::new();
    let mut write_mesh = false;

    // Helper for options that consume a value argument
    fn take_value(args: &[String], i: &mut usize) -> Result<String, String> {
        let flag = args[*i].clone();
        *i += 1;
        if *i >= args.len() {
            return Err(format!("Missing value for {}", flag));
        }
        Ok(args[*i].clone())
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--results-dir" => {
                results_directory = take_value(&args, &mut i)?;
            }
            "--solver-file" => {
                solver_file_name = Some(take_value(&args, &mut i)?);
            }
            "--output-dir" => {
                output_directory = take_value(&args, &mut i)?;
            }
            "--output-file" => {
                output_file_name = take_value(&args, &mut i)?;
            }
            "--format" => {
                output_format = take_value(&args, &mut i)?;
            }
            "--data-names" => {
                // Comma-separated list, e.g. "flow,pressure"
                let value = take_value(&args, &mut i)?;
                data_names = value.split(',').map(|s| s.trim().to_string()).collect();
            }
            "--segments" => {
                let value = take_value(&args, &mut i)?;
                segments = value.split(',').map(|s| s.trim().to_string()).collect();
            }
            "--write-mesh" => {
                write_mesh = true;
            }
            _ => {
                return Err(format!("Unknown argument: {}", args[i]));
            }
        }
        i += 1;
    }

    let solver_file_name = match solver_file_name {
        Some(name) => name,
        None => return Err("--solver-file is required".to_string()),
    };
    if data_names.is_empty() || data_names.iter().any(|n| n.is_empty()) {
        return Err("--data-names requires a non-empty comma-separated list".to_string());
    }
    if segments.is_empty() || segments.iter().any(|n| n.is_empty()) {
        return Err("--segments requires a non-empty comma-separated list".to_string());
    }

    Ok(CommandLineArgs {
        results_directory,
        solver_file_name,
        output_directory,
        output_file_name,
        output_format,
        data_names,
        segments,
        write_mesh,
    })
}

/// Print usage information to help users understand how to use the program
fn print_usage(program_name: &str) {
    eprintln!("Usage: {} --solver-file <file> --data-names <q1,q2,...> --segments <s1,s2,...> [OPTIONS]", program_name);
    eprintln!();
    eprintln!("Required:");
    eprintln!("  --solver-file <file>   Solver description file name (within the results directory)");
    eprintln!("  --data-names <list>    Comma-separated quantity names (e.g. flow,pressure)");
    eprintln!("  --segments <list>      Comma-separated segment names to include in the output");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --results-dir <dir>    Directory containing solver and data files (default: .)");
    eprintln!("  --output-dir <dir>     Directory for output files (default: .)");
    eprintln!("  --output-file <name>   Base name for tabular output files (default: results)");
    eprintln!("  --format <ext>         Tabular output extension (default: csv)");
    eprintln!("  --write-mesh           Also write <name>_points.vtp and <name>_lines.vtp");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {} --results-dir run1 --solver-file solver.in --data-names flow,pressure \\", program_name);
    eprintln!("      --segments aorta,iliac --output-dir out --output-file demo --write-mesh");
}

fn init_logging() {
    let log_level = env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5}] {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

/// Main entry point - coordinates the parse / read / write pipeline
fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let cmd_args = match parse_arguments(args.clone()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    let mut params = Parameters {
        results_directory: cmd_args.results_directory,
        solver_file_name: cmd_args.solver_file_name,
        output_directory: cmd_args.output_directory,
        output_file_name: cmd_args.output_file_name,
        output_format: cmd_args.output_format,
        data_names: cmd_args.data_names,
        segments: cmd_args.segments,
        ..Default::default()
    };

    // Ensure the output directory exists before any stage runs
    if let Err(e) = std::fs::create_dir_all(&params.output_directory) {
        eprintln!("Error creating output directory: {}", e);
        process::exit(1);
    }

    // Stage 1: parse the solver file, building the registry and geometry
    let mut geometry = MeshGeometry::new();
    let mut model: SolverModel = match SolverFileParser::parse_file(&mut params, &mut geometry) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Error reading solver file: {}", e);
            process::exit(1);
        }
    };

    // Stage 2: read the data files of every configured segment
    for name in &params.segments {
        if let Err(e) = SegmentDataReader::read(&params, &mut model, name) {
            eprintln!("Error reading segment data: {}", e);
            process::exit(1);
        }
    }

    // Stage 3: write one tabular file per quantity
    if let Err(e) = TabularWriter::write(&params, &model) {
        eprintln!("Error writing segment data: {}", e);
        process::exit(1);
    }

    // Optional geometry handoff for visualization
    if cmd_args.write_mesh {
        let points_path = format!(
            "{}/{}_points.vtp",
            params.output_directory, params.output_file_name
        );
        let lines_path = format!(
            "{}/{}_lines.vtp",
            params.output_directory, params.output_file_name
        );
        log::info!("Write mesh geometry: {}", points_path);
        if let Err(e) = VtpWriter::write(geometry.points_polydata(), &points_path) {
            eprintln!("Error writing mesh points: {}", e);
            process::exit(1);
        }
        log::info!("Write mesh geometry: {}", lines_path);
        if let Err(e) = VtpWriter::write(geometry.lines_polydata(), &lines_path) {
            eprintln!("Error writing mesh lines: {}", e);
            process::exit(1);
        }
    }

    log::info!("Processing completed");
}
