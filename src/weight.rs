use crate::error::SamplerError;
use crate::mesh::TriangleMesh;
use cgmath::InnerSpace;

/// Computes one selection weight per face of the given mesh.
///
/// The weight of a face is the magnitude of the cross product of two of its
/// edge vectors. That is twice the face area, but only relative weight
/// matters for selection, so the factor is never divided out. If a
/// per-vertex weight attribute is given, each face weight is additionally
/// scaled by the mean of the attribute over the three corners.
///
/// Degenerate faces end up with weight zero. They stay addressable in a
/// distribution built from the result but can never be selected.
pub fn face_weights<M>(mesh: &M, weight_attribute: Option<&[f32]>) -> Result<Vec<f32>, SamplerError>
where
    M: TriangleMesh,
{
    let indices = mesh.indices().ok_or(SamplerError::NonIndexedGeometry)?;

    if let Some(attribute) = weight_attribute {
        if attribute.len() != mesh.vertex_count() {
            return Err(SamplerError::WeightAttributeLength {
                expected: mesh.vertex_count(),
                actual: attribute.len(),
            });
        }
    }

    let face_count = indices.len() / 3;
    let mut weights = Vec::with_capacity(face_count);

    for face in 0..face_count {
        let a = indices[3 * face] as usize;
        let b = indices[3 * face + 1] as usize;
        let c = indices[3 * face + 2] as usize;

        let edge1 = mesh.position(b) - mesh.position(a);
        let edge2 = mesh.position(c) - mesh.position(a);
        let mut weight = edge1.cross(edge2).magnitude();

        if let Some(attribute) = weight_attribute {
            weight *= (attribute[a] + attribute[b] + attribute[c]) / 3.0;
        }

        // A negative attribute mean must not break the monotonicity of the
        // cumulative table built on top of these weights
        weights.push(weight.max(0.0));
    }

    Ok(weights)
}
