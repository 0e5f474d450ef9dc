use ndspace_types::{
    Id, Range, checked_next_multiple_of, embed_in_id3, embed_in_range3,
};

use crate::{LaunchError, LaunchLimits, limits::dispatch_component};

/// A `D` dimensional launch: the global range of work items, the local range of one work
/// group and the offset of the first work item.
///
/// Every component of the local range is non-zero and divides the matching component of the
/// global range, and the number of work items in the global range fits in a `usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NdRange<const D: usize> {
    global: Range<D>,
    local: Range<D>,
    offset: Id<D>,
}

fn check_local<const D: usize>(local: Range<D>) -> Result<(), LaunchError> {
    match local.iter().position(|component| component == 0) {
        Some(dim) => Err(LaunchError::ZeroLocalSize { dim }),
        None => Ok(()),
    }
}

fn check_volume<const D: usize>(global: Range<D>) -> Result<(), LaunchError> {
    match global.checked_size() {
        Some(_) => Ok(()),
        None => {
            tracing::warn!(%global, "global range has more work items than fit in a usize");
            Err(LaunchError::VolumeOverflow)
        }
    }
}

impl<const D: usize> NdRange<D> {
    /// Create a launch from a global range that is already a multiple of the local range.
    pub fn new(global: Range<D>, local: Range<D>) -> Result<Self, LaunchError> {
        check_local(local)?;
        for dim in 0..D {
            if global[dim] % local[dim] != 0 {
                return Err(LaunchError::NotDivisible {
                    dim,
                    global: global[dim],
                    local: local[dim],
                });
            }
        }
        check_volume(global)?;
        Ok(Self {
            global,
            local,
            offset: Id::default(),
        })
    }

    /// Create a launch, padding the global range up to the next multiple of the local range.
    ///
    /// Kernels launched with a padded range must skip the work items outside the original
    /// global range.
    pub fn rounded_up(global: Range<D>, local: Range<D>) -> Result<Self, LaunchError> {
        check_local(local)?;
        let mut padded = global;
        for dim in 0..D {
            padded[dim] = checked_next_multiple_of(global[dim] as u64, local[dim] as u64)
                .and_then(|component| usize::try_from(component).ok())
                .ok_or(LaunchError::RangeOverflow {
                    dim,
                    global: global[dim],
                    local: local[dim],
                })?;
        }
        check_volume(padded)?;
        if padded != global {
            tracing::debug!(
                %global,
                %padded,
                %local,
                "padded global range to a multiple of the local range"
            );
        }
        Ok(Self {
            global: padded,
            local,
            offset: Id::default(),
        })
    }

    /// Shift every global id by `offset`.
    pub fn with_offset(mut self, offset: Id<D>) -> Self {
        self.offset = offset;
        self
    }

    pub fn global(&self) -> Range<D> {
        self.global
    }

    pub fn local(&self) -> Range<D> {
        self.local
    }

    pub fn offset(&self) -> Id<D> {
        self.offset
    }

    /// The number of work groups along each dimension.
    pub fn group_count(&self) -> Range<D> {
        self.global / self.local
    }

    /// The number of work items in one work group.
    pub fn work_group_size(&self) -> usize {
        self.local.size()
    }

    /// The number of work items in the whole launch.
    pub fn global_size(&self) -> usize {
        self.global.size()
    }

    /// The same launch in the canonical 3 dimensional form.
    pub fn embed3(&self) -> NdRange<3> {
        NdRange {
            global: embed_in_range3(self.global),
            local: embed_in_range3(self.local),
            offset: embed_in_id3(self.offset),
        }
    }

    /// Check the launch against device limits.
    pub fn validate(&self, limits: &LaunchLimits) -> Result<(), LaunchError> {
        let size = self.work_group_size();
        if size > limits.max_work_group_size {
            tracing::warn!(
                size,
                max = limits.max_work_group_size,
                "work group is larger than the device allows"
            );
            return Err(LaunchError::WorkGroupTooLarge {
                size,
                max: limits.max_work_group_size,
            });
        }
        let groups = self.group_count();
        for dim in 0..D {
            if groups[dim] > limits.max_groups_per_dim {
                tracing::warn!(
                    dim,
                    groups = groups[dim],
                    max = limits.max_groups_per_dim,
                    "too many work groups"
                );
                return Err(LaunchError::TooManyGroups {
                    dim,
                    groups: groups[dim],
                    max: limits.max_groups_per_dim,
                });
            }
        }
        Ok(())
    }

    /// The work group counts to dispatch, as `[x, y, z]`.
    ///
    /// x is the last (fastest varying) component of the canonical 3 dimensional form and z is
    /// the first.
    pub fn dispatch_size(&self, limits: &LaunchLimits) -> Result<[u32; 3], LaunchError> {
        self.validate(limits)?;
        let groups = self.embed3().group_count();
        let dispatch = [
            dispatch_component(0, groups[2] as u64)?,
            dispatch_component(1, groups[1] as u64)?,
            dispatch_component(2, groups[0] as u64)?,
        ];
        tracing::trace!(global = %self.global, local = %self.local, ?dispatch, "computed dispatch size");
        Ok(dispatch)
    }

    /// Split a global id into the id of its work group and its id inside that group.
    ///
    /// `global_id` must not be below the launch offset in any dimension.
    pub fn group_and_local_id(&self, global_id: Id<D>) -> (Id<D>, Id<D>) {
        debug_assert!(
            global_id.iter().zip(self.offset.iter()).all(|(id, offset)| id >= offset),
            "global id {global_id} is below the launch offset {}",
            self.offset
        );
        let relative = global_id - self.offset;
        (relative / self.local, relative % self.local)
    }

    /// Every global id in the launch in row-major order, with the offset applied.
    pub fn global_ids(&self) -> GlobalIds<D> {
        GlobalIds {
            range: self.global,
            offset: self.offset,
            next: 0,
            len: self.global.size(),
        }
    }
}

/// Iterator over the global ids of an [`NdRange`].
#[derive(Clone, Debug)]
pub struct GlobalIds<const D: usize> {
    range: Range<D>,
    offset: Id<D>,
    next: usize,
    len: usize,
}

impl<const D: usize> Iterator for GlobalIds<D> {
    type Item = Id<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let id = self.range.from_linear_index(self.next) + self.offset;
        self.next += 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<const D: usize> ExactSizeIterator for GlobalIds<D> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_requires_divisible_global_range() {
        let launch = NdRange::new(Range::<2>::new(64, 32), Range::<2>::new(8, 8)).unwrap();
        assert_eq!(launch.group_count(), Range::<2>::new(8, 4));
        assert_eq!(
            NdRange::new(Range::<2>::new(64, 30), Range::<2>::new(8, 8)),
            Err(LaunchError::NotDivisible {
                dim: 1,
                global: 30,
                local: 8
            })
        );
    }

    #[test]
    fn zero_local_range_is_rejected() {
        assert_eq!(
            NdRange::new(Range::<2>::new(64, 32), Range::<2>::new(8, 0)),
            Err(LaunchError::ZeroLocalSize { dim: 1 })
        );
        assert_eq!(
            NdRange::rounded_up(Range::<1>::new(10), Range::<1>::new(0)),
            Err(LaunchError::ZeroLocalSize { dim: 0 })
        );
    }

    #[test]
    fn rounded_up_pads_global_range() {
        let launch = NdRange::rounded_up(Range::<1>::new(10), Range::<1>::new(4)).unwrap();
        assert_eq!(launch.global(), Range::<1>::new(12));
        assert_eq!(launch.group_count(), Range::<1>::new(3));
        assert_eq!(launch.global_size(), 12);
        assert_eq!(launch.work_group_size(), 4);
    }

    #[test]
    fn rounded_up_reports_overflow() {
        assert_eq!(
            NdRange::rounded_up(Range::<1>::new(usize::MAX), Range::<1>::new(2)),
            Err(LaunchError::RangeOverflow {
                dim: 0,
                global: usize::MAX,
                local: 2
            })
        );
    }

    #[test]
    fn group_count_of_a_huge_range_is_exact() {
        let launch = NdRange::new(Range::<1>::new(usize::MAX), Range::<1>::new(3)).unwrap();
        let groups = usize::MAX / 3;
        assert_eq!(launch.group_count(), Range::<1>::new(groups));
        assert_eq!(
            launch.validate(&LaunchLimits::default()),
            Err(LaunchError::TooManyGroups {
                dim: 0,
                groups,
                max: 65535
            })
        );
        assert!(launch.dispatch_size(&LaunchLimits::default()).is_err());
    }

    #[test]
    fn global_volume_must_fit_in_usize() {
        assert_eq!(
            NdRange::new(Range::<2>::new(usize::MAX, 2), Range::<2>::new(1, 1)),
            Err(LaunchError::VolumeOverflow)
        );
        assert_eq!(
            NdRange::rounded_up(Range::<2>::new(usize::MAX, 3), Range::<2>::new(1, 2)),
            Err(LaunchError::VolumeOverflow)
        );
        let launch = NdRange::new(Range::<2>::new(usize::MAX, 1), Range::<2>::new(1, 1)).unwrap();
        assert_eq!(launch.global_size(), usize::MAX);
        assert_eq!(launch.global_ids().len(), usize::MAX);
    }

    #[test]
    fn group_and_local_id_split() {
        let launch = NdRange::new(Range::<2>::new(16, 16), Range::<2>::new(4, 8))
            .unwrap()
            .with_offset(Id::<2>::new(1, 1));
        let (group, local) = launch.group_and_local_id(Id::<2>::new(6, 10));
        assert_eq!(group, Id::<2>::new(1, 1));
        assert_eq!(local, Id::<2>::new(1, 1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "below the launch offset")]
    fn group_and_local_id_below_offset_panics() {
        let launch = NdRange::new(Range::<2>::new(16, 16), Range::<2>::new(4, 8))
            .unwrap()
            .with_offset(Id::<2>::new(2, 2));
        launch.group_and_local_id(Id::<2>::new(1, 5));
    }

    #[test]
    fn global_ids_are_row_major() {
        let launch = NdRange::new(Range::<2>::new(2, 3), Range::<2>::new(1, 3)).unwrap();
        let ids: Vec<_> = launch.global_ids().collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(ids[0], Id::<2>::new(0, 0));
        assert_eq!(ids[1], Id::<2>::new(0, 1));
        assert_eq!(ids[3], Id::<2>::new(1, 0));
        assert_eq!(ids[5], Id::<2>::new(1, 2));
    }

    #[test]
    fn empty_launch_has_no_ids() {
        let launch = NdRange::new(Range::<2>::new(0, 4), Range::<2>::new(1, 4)).unwrap();
        assert_eq!(launch.global_ids().len(), 0);
        assert_eq!(launch.global_ids().next(), None);
    }
}
