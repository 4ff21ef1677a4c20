use cgmath::Vector3;

pub type Vec3 = Vector3<f32>;

/// Read access to externally owned triangle geometry.
///
/// This is the seam between the sampler and whatever owns the mesh data:
/// implementers expose per-vertex positions and a flat triangle index list.
/// Non-indexed geometry is representable behind this trait but cannot be
/// sampled and is rejected at build time.
pub trait TriangleMesh {
    /// Number of vertices in the position attribute.
    fn vertex_count(&self) -> usize;

    /// Position of the vertex at the given index.
    fn position(&self, vertex: usize) -> Vec3;

    /// Flat triangle index list, three entries per face, or `None` for
    /// non-indexed geometry.
    fn indices(&self) -> Option<&[u32]>;

    /// Number of faces addressable through the index list.
    fn triangle_count(&self) -> usize {
        self.indices().map_or(0, |indices| indices.len() / 3)
    }
}

/// Owned indexed triangle geometry, the default adapter for mesh data that
/// has already been loaded and decoded.
#[derive(Debug, Clone)]
pub struct IndexedMesh {
    positions: Vec<Vec3>,
    indices: Option<Vec<u32>>,
}

impl IndexedMesh {
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        IndexedMesh {
            positions,
            indices: Some(indices),
        }
    }

    /// Triangle soup without an index list.
    pub fn non_indexed(positions: Vec<Vec3>) -> Self {
        IndexedMesh {
            positions,
            indices: None,
        }
    }
}

impl TriangleMesh for IndexedMesh {
    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn position(&self, vertex: usize) -> Vec3 {
        self.positions[vertex]
    }

    fn indices(&self) -> Option<&[u32]> {
        self.indices.as_ref().map(|indices| &indices[..])
    }
}
