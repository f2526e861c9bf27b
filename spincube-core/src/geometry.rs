/// Geometry primitives for textured face rendering
use nalgebra::{Point2, Point3, Vector3};

/// A 3D vertex with position, normal, and texture coordinate
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
    pub uv: Point2<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>, uv: Point2<f32>) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Calculate the face normal from the triangle's vertices
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0].position;
        let v1 = self.vertices[1].position;
        let v2 = self.vertices[2].position;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2).normalize()
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// One quadrilateral cube face, spanned from an origin corner toward two
/// adjacent corner points (plane-source convention). Geometry is immutable
/// once the descriptor is tessellated.
#[derive(Debug, Clone, Copy)]
pub struct FaceDescriptor {
    pub origin: Point3<f32>,
    pub point1: Point3<f32>,
    pub point2: Point3<f32>,
}

impl FaceDescriptor {
    pub fn new(origin: Point3<f32>, point1: Point3<f32>, point2: Point3<f32>) -> Self {
        Self {
            origin,
            point1,
            point2,
        }
    }

    /// The fourth corner of the quad, opposite the origin
    pub fn far_corner(&self) -> Point3<f32> {
        self.point1 + (self.point2 - self.origin)
    }

    /// Tessellate the quad into two triangles with texture coordinates.
    /// `origin` maps to uv (0,0), `point1` to (1,0), `point2` to (0,1).
    pub fn mesh(&self) -> Mesh {
        let normal = (self.point1 - self.origin)
            .cross(&(self.point2 - self.origin))
            .normalize();

        let v00 = Vertex::new(self.origin, normal, Point2::new(0.0, 0.0));
        let v10 = Vertex::new(self.point1, normal, Point2::new(1.0, 0.0));
        let v01 = Vertex::new(self.point2, normal, Point2::new(0.0, 1.0));
        let v11 = Vertex::new(self.far_corner(), normal, Point2::new(1.0, 1.0));

        let mut mesh = Mesh::with_capacity(2);
        mesh.add_triangle(Triangle::new(v00, v10, v11));
        mesh.add_triangle(Triangle::new(v00, v11, v01));
        mesh
    }
}

/// The six faces of a unit cube centered at the origin
pub fn cube_faces() -> [FaceDescriptor; 6] {
    [
        FaceDescriptor::new(
            Point3::new(-0.5, -0.5, -0.5),
            Point3::new(0.5, -0.5, -0.5),
            Point3::new(-0.5, 0.5, -0.5),
        ),
        FaceDescriptor::new(
            Point3::new(-0.5, -0.5, 0.5),
            Point3::new(0.5, -0.5, 0.5),
            Point3::new(-0.5, 0.5, 0.5),
        ),
        FaceDescriptor::new(
            Point3::new(-0.5, -0.5, -0.5),
            Point3::new(-0.5, 0.5, -0.5),
            Point3::new(-0.5, -0.5, 0.5),
        ),
        FaceDescriptor::new(
            Point3::new(0.5, -0.5, -0.5),
            Point3::new(0.5, 0.5, -0.5),
            Point3::new(0.5, -0.5, 0.5),
        ),
        FaceDescriptor::new(
            Point3::new(-0.5, 0.5, -0.5),
            Point3::new(0.5, 0.5, -0.5),
            Point3::new(-0.5, 0.5, 0.5),
        ),
        FaceDescriptor::new(
            Point3::new(-0.5, -0.5, -0.5),
            Point3::new(0.5, -0.5, -0.5),
            Point3::new(-0.5, -0.5, 0.5),
        ),
    ]
}
