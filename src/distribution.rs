/// Cumulative weight table over the faces of a mesh, selecting a face from a
/// single uniform draw in O(log F).
///
/// Built once per mesh by prefix-summing per-face weights; selection then
/// inverts the cumulative table with a binary search. Faces with zero weight
/// remain addressable but carry an empty interval and are never selected.
#[derive(Debug, Clone)]
pub struct FaceDistribution {
    /// One non-negative weight per face, in face order.
    weights: Vec<f32>,
    /// Prefix sums of `weights`, one entry longer. The first entry is zero,
    /// the last is the total weight, and the sequence never decreases.
    cumulative: Vec<f32>,
}

impl FaceDistribution {
    pub fn from_weights(weights: Vec<f32>) -> Self {
        let mut cumulative = Vec::with_capacity(weights.len() + 1);
        let mut total = 0.0_f32;

        cumulative.push(total);
        for &weight in &weights {
            total += weight;
            cumulative.push(total);
        }

        FaceDistribution {
            weights,
            cumulative,
        }
    }

    pub fn face_count(&self) -> usize {
        self.weights.len()
    }

    /// The per-face weights the table was built from.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// The prefix-summed table itself.
    pub fn cumulative(&self) -> &[f32] {
        &self.cumulative
    }

    /// Sum of all face weights.
    pub fn total_weight(&self) -> f32 {
        self.cumulative[self.weights.len()]
    }

    /// Selects the greatest face index whose cumulative weight does not
    /// exceed `u`.
    ///
    /// `u` must lie in `[0, total_weight())`. A draw that hits a boundary of
    /// the table exactly resolves to the face whose interval starts there,
    /// so `u = 0` selects face 0 and faces with an empty interval are
    /// skipped over.
    pub fn select(&self, u: f32) -> usize {
        let mut start: isize = 0;
        let mut end: isize = self.cumulative.len() as isize - 1;

        while start <= end {
            let mid = (start + end) / 2;

            if self.cumulative[mid as usize] <= u {
                start = mid + 1;
            } else {
                end = mid - 1;
            }
        }

        (start - 1) as usize
    }
}
