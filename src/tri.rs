use crate::mesh::Vec3;

/// Computes barycentric weights that place a point uniformly over the area
/// of a triangle, from two independent uniform draws in `[0, 1)`.
///
/// The square root transform on the first draw is what makes the density
/// uniform over area. Mapping both draws linearly instead would crowd the
/// points towards one vertex.
///
/// The weights are non-negative, sum to one, and an all-zero draw collapses
/// onto the first vertex.
pub fn sample_bary(u: f32, v: f32) -> [f32; 3] {
    let sqrt_u = u.sqrt();

    [1.0 - sqrt_u, (sqrt_u * (1.0 - v)), (sqrt_u * v)]
}

/// Combines three corner positions under barycentric weights.
pub fn interpolate_bary(bary: [f32; 3], a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    bary[0] * a + bary[1] * b + bary[2] * c
}
