use ndspace_types::checked_ceil_division;

use crate::LaunchError;

/// Device limits a launch has to respect.
///
/// The defaults are the WebGPU minimums every compute device supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LaunchLimits {
    /// The maximum number of work items in a single work group.
    pub max_work_group_size: usize,
    /// The maximum number of work groups along any one dispatch dimension.
    pub max_groups_per_dim: usize,
}

impl Default for LaunchLimits {
    fn default() -> Self {
        Self {
            max_work_group_size: 256,
            max_groups_per_dim: 65535,
        }
    }
}

impl LaunchLimits {
    pub fn with_max_work_group_size(mut self, max_work_group_size: usize) -> Self {
        self.max_work_group_size = max_work_group_size;
        self
    }

    pub fn with_max_groups_per_dim(mut self, max_groups_per_dim: usize) -> Self {
        self.max_groups_per_dim = max_groups_per_dim;
        self
    }

    /// Spread a linear number of work groups over the x, y and z dispatch dimensions.
    ///
    /// x is filled up to the per-dimension limit first, then y, then z. The dispatch may cover
    /// more groups than requested. Kernels launched this way must linearize their group id and
    /// skip the groups past `total_groups`.
    pub fn distribute_groups(&self, total_groups: usize) -> Result<[u32; 3], LaunchError> {
        if total_groups == 0 {
            return Ok([0, 0, 0]);
        }
        // A dispatch dimension is a u32 whatever the device reports.
        let max = (self.max_groups_per_dim as u64).min(u32::MAX as u64);
        let too_many = |dim, groups| LaunchError::TooManyGroups {
            dim,
            groups,
            max: max as usize,
        };
        if max == 0 {
            return Err(too_many(0, total_groups));
        }

        let total = total_groups as u64;
        let x = total.min(max);
        let remaining = checked_ceil_division(total, x).ok_or(too_many(1, total_groups))?;
        let y = remaining.min(max);
        let z = checked_ceil_division(total, x.saturating_mul(y)).ok_or(too_many(2, total_groups))?;
        if z > max {
            tracing::warn!(
                total_groups,
                max,
                "work group count does not fit in three dispatch dimensions"
            );
            return Err(too_many(2, z as usize));
        }

        Ok([
            dispatch_component(0, x)?,
            dispatch_component(1, y)?,
            dispatch_component(2, z)?,
        ])
    }
}

pub(crate) fn dispatch_component(dim: usize, groups: u64) -> Result<u32, LaunchError> {
    u32::try_from(groups).map_err(|_| LaunchError::TooManyGroups {
        dim,
        groups: groups as usize,
        max: u32::MAX as usize,
    })
}

#[test]
fn test_distribute_groups_fits_in_x() {
    let limits = LaunchLimits::default();
    assert_eq!(limits.distribute_groups(0), Ok([0, 0, 0]));
    assert_eq!(limits.distribute_groups(1), Ok([1, 1, 1]));
    assert_eq!(limits.distribute_groups(65535), Ok([65535, 1, 1]));
}

#[test]
fn test_distribute_groups_spills_into_y_and_z() {
    let limits = LaunchLimits::default();
    assert_eq!(limits.distribute_groups(100_000), Ok([65535, 2, 1]));

    let small = LaunchLimits::default().with_max_groups_per_dim(4);
    assert_eq!(small.distribute_groups(17), Ok([4, 4, 2]));
    assert_eq!(small.distribute_groups(64), Ok([4, 4, 4]));
    assert_eq!(
        small.distribute_groups(65),
        Err(LaunchError::TooManyGroups {
            dim: 2,
            groups: 5,
            max: 4
        })
    );
}

#[test]
fn test_zero_group_limit() {
    let limits = LaunchLimits::default().with_max_groups_per_dim(0);
    assert_eq!(limits.distribute_groups(0), Ok([0, 0, 0]));
    assert!(limits.distribute_groups(1).is_err());
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_group_limit_above_u32_spills_into_y() {
    let limits = LaunchLimits::default().with_max_groups_per_dim(usize::MAX);
    assert_eq!(
        limits.distribute_groups(u32::MAX as usize + 2),
        Ok([u32::MAX, 2, 1])
    );
    assert_eq!(
        limits.distribute_groups(u32::MAX as usize),
        Ok([u32::MAX, 1, 1])
    );
}
