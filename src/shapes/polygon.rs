use crate::error::ShapeError;
use crate::math::Vec2;

/// A convex polygon with clockwise-wound vertices (screen coordinates,
/// y pointing down). Local vertices are fixed at construction; world
/// vertices are refreshed from the owning body's transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub local_vertices: Vec<Vec2>,
    pub world_vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a polygon from clockwise-wound local vertices. At least 3
    /// vertices are required. World vertices start as a copy of the local
    /// ones until the owning body applies its transform.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices(vertices.len()));
        }
        Ok(Self {
            world_vertices: vertices.clone(),
            local_vertices: vertices,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.local_vertices.len()
    }

    /// Recomputes world vertices: rotate each local vertex, then translate.
    pub fn update_vertices(&mut self, rotation: f64, position: Vec2) {
        for (world, local) in self.world_vertices.iter_mut().zip(&self.local_vertices) {
            *world = local.rotate(rotation) + position;
        }
    }

    /// Index of the vertex after `index`, wrapping around.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.local_vertices.len()
    }

    /// World-space vertex after the one at `index`.
    pub fn world_vertex_after(&self, index: usize) -> Vec2 {
        self.world_vertices[self.next_index(index)]
    }

    /// World-space edge vector from vertex `index` to the next vertex.
    pub fn edge_at(&self, index: usize) -> Vec2 {
        self.world_vertex_after(index) - self.world_vertices[index]
    }

    /// Finds this polygon's axis of minimum penetration against `other`.
    ///
    /// For each edge, projects every vertex of `other` onto the edge's
    /// outward normal and keeps the smallest projection; the edge whose
    /// smallest projection is largest is the best separating axis.
    /// Returns the separation, the index of that reference edge, and the
    /// support point on `other` (the deepest vertex along the axis).
    /// A non-negative separation means the polygons do not overlap.
    pub fn find_min_separation(&self, other: &Polygon) -> (f64, usize, Vec2) {
        let mut separation = f64::MIN;
        let mut reference_edge_index = 0;
        let mut support_point = Vec2::ZERO;

        for i in 0..self.world_vertices.len() {
            let va = self.world_vertices[i];
            let normal = self.edge_at(i).right_unit_normal();

            let mut min_sep = f64::MAX;
            let mut min_vertex = Vec2::ZERO;
            for &vb in &other.world_vertices {
                let proj = (vb - va).dot(normal);
                if proj < min_sep {
                    min_sep = proj;
                    min_vertex = vb;
                }
            }

            if min_sep > separation {
                separation = min_sep;
                reference_edge_index = i;
                support_point = min_vertex;
            }
        }

        (separation, reference_edge_index, support_point)
    }

    /// Finds the incident edge: the edge whose outward normal is most
    /// anti-parallel to the given reference normal.
    pub fn find_incident_edge(&self, normal: Vec2) -> usize {
        let mut incident_index = 0;
        let mut min_proj = f64::MAX;
        for i in 0..self.world_vertices.len() {
            let edge_normal = self.edge_at(i).right_unit_normal();
            let proj = edge_normal.dot(normal);
            if proj < min_proj {
                min_proj = proj;
                incident_index = i;
            }
        }
        incident_index
    }
}

/// A rectangle, stored as a 4-vertex clockwise polygon centered on the
/// body's position.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    pub width: f64,
    pub height: f64,
    pub polygon: Polygon,
}

impl BoxShape {
    /// Creates a box. Width and height must be strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ShapeError::InvalidBoxDimensions { width, height });
        }
        let vertices = vec![
            Vec2::new(-width / 2.0, -height / 2.0),
            Vec2::new(width / 2.0, -height / 2.0),
            Vec2::new(width / 2.0, height / 2.0),
            Vec2::new(-width / 2.0, height / 2.0),
        ];
        // 4 vertices, cannot fail TooFewVertices
        let polygon = Polygon::new(vertices).expect("box polygon has 4 vertices");
        Ok(Self {
            width,
            height,
            polygon,
        })
    }
}
