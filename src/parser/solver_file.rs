use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::database::{Node, Segment, SolverModel};
use crate::error::ParseError;
use crate::geometry::MeshGeometry;
use crate::params::Parameters;

pub struct SolverFileParser;  // Parser for the 1D solver description file

impl SolverFileParser {
    /// Parse the solver file named by `params`, populating the registry and
    /// the mesh geometry. Writes the model name and timing fields back to
    /// `params` as the corresponding directives are encountered.
    pub fn parse_file(
        params: &mut Parameters,
        geometry: &mut MeshGeometry,
    ) -> Result<SolverModel, ParseError> {
        let file_name = params.solver_file_path();
        let file = File::open(&file_name)?;                        // ? propagates file-not-found to the caller
        let reader = BufReader::new(file);
        let model = Self::parse(reader, params, geometry)?;

        log::info!("Model name: {}", params.model_name);
        log::info!("Number of nodes: {}", model.nodes.len());
        log::info!("Number of segments: {}", model.segments.len());
        log::info!("Number of time steps: {}", params.num_steps);
        log::info!("Time step: {}", params.time_step);

        Ok(model)
    }

    /// Parse solver directives from any buffered reader.
    pub fn parse<R: BufRead>(
        reader: R,
        params: &mut Parameters,
        geometry: &mut MeshGeometry,
    ) -> Result<SolverModel, ParseError> {
        let mut model = SolverModel::new();

        for line in reader.lines() {
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {                                 // Skip blank lines
                continue;
            }

            // Dispatch on the leading directive token
            match tokens[0] {
                "NODE" => Self::add_node(&tokens, &line, &mut model, geometry)?,
                "SEGMENT" => Self::add_segment(&tokens, &line, &mut model, geometry)?,
                "SOLVEROPTIONS" => Self::add_solver_options(&tokens, &line, params)?,
                "MODEL" => {
                    if tokens.len() < 2 {
                        return Err(ParseError::FormatError(format!(
                            "MODEL line has no name: '{}'",
                            line
                        )));
                    }
                    params.model_name = tokens[1].to_string();
                }
                _ => {}                                            // Unknown directives are ignored
            }
        }

        Self::check_segment_nodes(&model)?;

        Ok(model)
    }

    // NODE id x y z
    fn add_node(
        tokens: &[&str],
        line: &str,
        model: &mut SolverModel,
        geometry: &mut MeshGeometry,
    ) -> Result<(), ParseError> {
        if tokens.len() < 5 {
            return Err(ParseError::FormatError(format!(
                "NODE line has {} tokens, expected 5: '{}'",
                tokens.len(),
                line
            )));
        }

        let _file_id = tokens[1].parse::<usize>()?;    // Ids are re-assigned by insertion order
        let x = tokens[2].parse::<f64>()?;
        let y = tokens[3].parse::<f64>()?;
        let z = tokens[4].parse::<f64>()?;

        let id = geometry.add_point(x, y, z);          // Point index doubles as the node id
        model.nodes.push(Node { id, x, y, z });

        Ok(())
    }

    // SEGMENT name id <unused> <unused> node1 node2 ...
    // The column layout is fixed; anything shorter is a malformed file.
    fn add_segment(
        tokens: &[&str],
        line: &str,
        model: &mut SolverModel,
        geometry: &mut MeshGeometry,
    ) -> Result<(), ParseError> {
        if tokens.len() < 7 {
            return Err(ParseError::FormatError(format!(
                "SEGMENT line has {} tokens, expected at least 7: '{}'",
                tokens.len(),
                line
            )));
        }

        let name = tokens[1].to_string();
        let id = tokens[2].parse::<usize>()?;
        let node1 = tokens[5].parse::<usize>()?;
        let node2 = tokens[6].parse::<usize>()?;

        geometry.add_line(node1, node2);
        log::info!("Add segment name: {}", name);
        model
            .segments
            .insert(name.clone(), Segment::new(id, name, node1, node2));

        Ok(())
    }

    // SOLVEROPTIONS time_step save_freq num_steps
    fn add_solver_options(
        tokens: &[&str],
        line: &str,
        params: &mut Parameters,
    ) -> Result<(), ParseError> {
        if tokens.len() < 4 {
            return Err(ParseError::FormatError(format!(
                "SOLVEROPTIONS line has {} tokens, expected 4: '{}'",
                tokens.len(),
                line
            )));
        }

        let time_step = tokens[1].parse::<f64>()?;
        let save_freq = tokens[2].parse::<usize>()?;
        let num_steps = tokens[3].parse::<usize>()?;

        if save_freq == 0 {
            return Err(ParseError::FormatError(format!(
                "SOLVEROPTIONS save frequency must be positive: '{}'",
                line
            )));
        }

        params.time_step = time_step;
        params.save_freq = save_freq;
        params.num_steps = num_steps;
        params.times = (0..=num_steps)
            .step_by(save_freq)
            .map(|i| i as f64 * time_step)
            .collect();

        Ok(())
    }

    // Every segment endpoint must index into the node sequence.
    fn check_segment_nodes(model: &SolverModel) -> Result<(), ParseError> {
        for segment in model.segments.values() {
            for node_id in [segment.node1, segment.node2] {
                if node_id >= model.nodes.len() {
                    return Err(ParseError::FormatError(format!(
                        "Segment '{}' references node {} but only {} nodes are defined",
                        segment.name,
                        node_id,
                        model.nodes.len()
                    )));
                }
            }
        }
        Ok(())
    }
}
