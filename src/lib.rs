//! Provides area-weighted sampling of points on triangle mesh surfaces, for instance:
//! * computing per-face selection weights proportional to surface area with [`face_weights`](fn.face_weights.html), optionally scaled by a per-vertex weight attribute,
//! * efficiently selecting a face out of a large mesh from a single uniform draw with the cumulative [`FaceDistribution`](struct.FaceDistribution.html),
//! * seeding thousands of particles evenly over a mesh with [`SurfaceSampler`](struct.SurfaceSampler.html), no matter how unevenly the surface is triangulated.

mod distribution;
mod error;
mod mesh;
mod sampler;
mod tri;
mod weight;

pub use self::distribution::FaceDistribution;
pub use self::error::SamplerError;
pub use self::mesh::{IndexedMesh, TriangleMesh, Vec3};
pub use self::sampler::SurfaceSampler;
pub use self::tri::{interpolate_bary, sample_bary};
pub use self::weight::face_weights;
