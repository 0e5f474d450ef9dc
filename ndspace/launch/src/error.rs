/// Error type for launch geometry validation
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchError {
    #[error("local range is zero in dimension {dim}")]
    ZeroLocalSize { dim: usize },
    #[error(
        "global range ({global}) is not a multiple of the local range ({local}) in dimension {dim}"
    )]
    NotDivisible {
        dim: usize,
        global: usize,
        local: usize,
    },
    #[error(
        "rounding the global range ({global}) up to a multiple of {local} overflows in dimension {dim}"
    )]
    RangeOverflow {
        dim: usize,
        global: usize,
        local: usize,
    },
    #[error("the number of work items in the global range overflows a usize")]
    VolumeOverflow,
    #[error("work group size {size} exceeds the limit of {max}")]
    WorkGroupTooLarge { size: usize, max: usize },
    #[error("{groups} work groups in dimension {dim} exceeds the limit of {max}")]
    TooManyGroups { dim: usize, groups: usize, max: usize },
    #[error("allocation of {bytes} bytes overflows when rounded up")]
    AllocationOverflow { bytes: u64 },
    #[error("alignment must be greater than zero")]
    ZeroAlignment,
}
