use thiserror::Error;

/// Failure conditions of building a face distribution and sampling from it.
///
/// All of these are deterministic configuration or state faults. None is
/// transient, none is recovered from internally, and a failed `sample` never
/// writes to its output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    /// The mesh carries no triangle index list.
    #[error("mesh has no index list, only indexed triangle geometry can be sampled")]
    NonIndexedGeometry,

    /// The per-vertex weight attribute is not parallel to the position
    /// attribute.
    #[error("weight attribute holds {actual} scalars for {expected} vertices")]
    WeightAttributeLength { expected: usize, actual: usize },

    /// `sample` was invoked on a sampler that was never successfully built.
    #[error("sampler has not been built yet, call build() before sample()")]
    NotBuilt,

    /// Every face of the mesh has zero selection weight, no sample is
    /// definable.
    #[error("total face weight is {total}, no face carries positive weight")]
    DegenerateDistribution { total: f32 },
}
