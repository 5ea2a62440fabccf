use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Node {                   // A mesh point of the 1D network
    pub id: usize,                  // Insertion order; doubles as the point index in the geometry
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone)]
pub struct Segment {                // A 1D element connecting two nodes
    pub id: usize,                  // Identifier from the solver file
    pub name: String,               // Unique key in the registry
    pub node1: usize,               // Upstream node id (back-reference into the node sequence)
    pub node2: usize,               // Downstream node id
    // Quantity name -> table of rows read from that quantity's data file.
    // Insert has replace semantics: re-reading a quantity overwrites the
    // previous table (last write wins), tables are never merged.
    pub data: HashMap<String, Vec<Vec<f64>>>,
}

impl Segment {
    pub fn new(id: usize, name: String, node1: usize, node2: usize) -> Self {
        Segment {
            id,
            name,
            node1,
            node2,
            data: HashMap::new(),   // Populated later by the segment data reader
        }
    }
}

/// Registry of everything parsed from the solver file. Owned by the pipeline
/// driver and passed by reference to each stage; there is no global state.
#[derive(Debug, Default)]
pub struct SolverModel {
    pub nodes: Vec<Node>,                       // Insertion order equals node id
    pub segments: HashMap<String, Segment>,     // Keyed by segment name
}

impl SolverModel {
    pub fn new() -> Self {
        SolverModel::default()
    }

    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.get(name)
    }

    pub fn segment_mut(&mut self, name: &str) -> Option<&mut Segment> {
        self.segments.get_mut(name)
    }
}
