use crate::distribution::FaceDistribution;
use crate::error::SamplerError;
use crate::mesh::{TriangleMesh, Vec3};
use crate::tri::{interpolate_bary, sample_bary};
use crate::weight::face_weights;
use cgmath::Zero;
use log::{debug, warn};
use rand::Rng;

/// Draws points distributed uniformly over the surface of an indexed
/// triangle mesh, regardless of how evenly the surface is triangulated.
///
/// A sampler is bound to one mesh for its whole lifetime. `build` derives a
/// [`FaceDistribution`](struct.FaceDistribution.html) from the current mesh
/// geometry and an optional per-vertex weight attribute, `sample` then
/// selects a face with probability proportional to its weight and places a
/// point uniformly within it. Building is O(F) and runs once per mesh load,
/// sampling is O(log F) and allocation free, fit for tight batch loops that
/// seed tens of thousands of particles.
///
/// Sampling reuses scratch state inside the sampler, so `sample` borrows it
/// mutably and concurrent use needs one sampler per thread.
pub struct SurfaceSampler<'a, M> {
    mesh: &'a M,
    weight_attribute: Option<&'a [f32]>,
    distribution: Option<FaceDistribution>,
    /// Working copies of the selected face's corner positions, reused
    /// across calls.
    corners: [Vec3; 3],
}

impl<'a, M> SurfaceSampler<'a, M>
where
    M: TriangleMesh,
{
    /// Binds a new, unbuilt sampler to the given mesh.
    pub fn new(mesh: &'a M) -> Self {
        SurfaceSampler {
            mesh,
            weight_attribute: None,
            distribution: None,
            corners: [Vec3::zero(); 3],
        }
    }

    /// Selects or clears the per-vertex weight attribute that scales face
    /// weights at build time.
    ///
    /// The attribute must be parallel to the mesh's position attribute,
    /// which is checked by the next `build`.
    pub fn with_weight_attribute(mut self, attribute: Option<&'a [f32]>) -> Self {
        self.weight_attribute = attribute;
        self
    }

    /// Computes face weights and the cumulative distribution from the
    /// mesh's current geometry.
    ///
    /// Can be invoked again after the mesh changed; a successful rebuild
    /// replaces the previous distribution in one step and leaves nothing
    /// stale behind.
    pub fn build(mut self) -> Result<Self, SamplerError> {
        let weights = face_weights(self.mesh, self.weight_attribute)?;
        let distribution = FaceDistribution::from_weights(weights);

        let zero_faces = distribution
            .weights()
            .iter()
            .filter(|&&weight| weight == 0.0)
            .count();
        if zero_faces > 0 {
            warn!(
                "{} of {} faces weigh zero and will never be sampled",
                zero_faces,
                distribution.face_count()
            );
        }
        debug!(
            "built distribution over {} faces with total weight {}",
            distribution.face_count(),
            distribution.total_weight()
        );

        self.distribution = Some(distribution);
        Ok(self)
    }

    /// The face distribution of the last successful `build`, or `None` on
    /// a sampler that was never built.
    pub fn distribution(&self) -> Option<&FaceDistribution> {
        self.distribution.as_ref()
    }

    /// Draws one point on the mesh surface and writes it to `position`.
    ///
    /// Fails on a sampler that was never built and on a distribution whose
    /// total weight is not positive, since no face can be selected then.
    /// On failure `position` is left untouched. The mesh itself is never
    /// mutated.
    pub fn sample<R>(&mut self, rng: &mut R, position: &mut Vec3) -> Result<(), SamplerError>
    where
        R: Rng,
    {
        let distribution = self.distribution.as_ref().ok_or(SamplerError::NotBuilt)?;
        let indices = self.mesh.indices().ok_or(SamplerError::NonIndexedGeometry)?;

        let total = distribution.total_weight();
        if total <= 0.0 {
            return Err(SamplerError::DegenerateDistribution { total });
        }

        let u = rng.gen::<f32>() * total;
        // Rounding can push u up to exactly the total weight, which would
        // address one past the last face
        let face = distribution.select(u).min(distribution.face_count() - 1);

        for corner in 0..3 {
            self.corners[corner] = self.mesh.position(indices[3 * face + corner] as usize);
        }

        let bary = sample_bary(rng.gen(), rng.gen());
        *position = interpolate_bary(bary, self.corners[0], self.corners[1], self.corners[2]);

        Ok(())
    }
}
