use vtkio::model::*; // VTK file model (Vtk, DataSet, PolyDataPiece, ...)

/// Point-set and line-set representation of the parsed network, built
/// incrementally by the solver file parser and handed off to a visualization
/// consumer as VTK PolyData. The core never renders it.
#[derive(Debug, Default)]
pub struct MeshGeometry {
    points: Vec<f64>,               // Flattened x,y,z triples; point index = node id
    lines: Vec<(u64, u64)>,         // One entry per segment: (node1, node2)
}

impl MeshGeometry {
    pub fn new() -> Self {
        MeshGeometry::default()
    }

    /// Register a point and its vertex cell. Returns the point index, which
    /// the parser uses as the node id.
    pub fn add_point(&mut self, x: f64, y: f64, z: f64) -> usize {
        let id = self.points.len() / 3;
        self.points.push(x);
        self.points.push(y);
        self.points.push(z);
        id
    }

    /// Register a line cell connecting two previously added points.
    pub fn add_line(&mut self, node1: usize, node2: usize) {
        self.lines.push((node1 as u64, node2 as u64));
    }

    pub fn num_points(&self) -> usize {
        self.points.len() / 3
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// PolyData dataset holding the points with one vertex cell per point.
    pub fn points_polydata(&self) -> Vtk {
        let n = self.num_points() as u64;

        Vtk {
            version: Version { major: 2, minor: 2 },
            title: String::new(),
            byte_order: ByteOrder::LittleEndian,
            file_path: None,
            data: DataSet::inline(PolyDataPiece {
                points: IOBuffer::F64(self.points.clone()),
                verts: Some(VertexNumbers::XML {
                    connectivity: (0..n).collect(),         // One vertex cell per point
                    offsets: (1..=n).collect(),
                }),
                lines: None,
                polys: None,
                strips: None,
                data: Attributes {
                    ..Default::default()
                },
            }),
        }
    }

    /// PolyData dataset holding the points with one line cell per segment.
    pub fn lines_polydata(&self) -> Vtk {
        let mut connectivity = Vec::with_capacity(self.lines.len() * 2);
        let mut offsets = Vec::with_capacity(self.lines.len());
        let mut current_offset = 0u64;

        for (node1, node2) in &self.lines {
            connectivity.push(*node1);
            connectivity.push(*node2);
            current_offset += 2;
            offsets.push(current_offset);
        }

        Vtk {
            version: Version { major: 2, minor: 2 },
            title: String::new(),
            byte_order: ByteOrder::LittleEndian,
            file_path: None,
            data: DataSet::inline(PolyDataPiece {
                points: IOBuffer::F64(self.points.clone()),
                verts: None,
                lines: Some(VertexNumbers::XML {
                    connectivity,
                    offsets,
                }),
                polys: None,
                strips: None,
                data: Attributes {
                    ..Default::default()
                },
            }),
        }
    }
}
