//! End to end launch planning from a 1, 2 or 3 dimensional problem size

use ndspace_launch::{LaunchError, LaunchLimits, NdRange, aligned_allocation_size};
use ndspace_types::{Id, Range, extract_from_id3};
use pretty_assertions::assert_eq;

#[test]
fn dispatch_2d_image() {
    let limits = LaunchLimits::default();
    let launch = NdRange::rounded_up(Range::<2>::new(64, 30), Range::<2>::new(8, 8)).unwrap();
    assert_eq!(launch.global(), Range::<2>::new(64, 32));
    assert_eq!(launch.dispatch_size(&limits), Ok([4, 8, 1]));
}

#[test]
fn dispatch_1d_and_3d() {
    let limits = LaunchLimits::default();
    let launch = NdRange::new(Range::<1>::new(1024), Range::<1>::new(256)).unwrap();
    assert_eq!(launch.dispatch_size(&limits), Ok([4, 1, 1]));

    let launch = NdRange::new(Range::<3>::new(2, 4, 64), Range::<3>::new(1, 2, 32)).unwrap();
    assert_eq!(launch.dispatch_size(&limits), Ok([2, 2, 2]));
}

#[test]
fn embedded_launch_keeps_work_item_count() {
    let launch = NdRange::new(Range::<2>::new(16, 12), Range::<2>::new(4, 4))
        .unwrap()
        .with_offset(Id::<2>::new(3, 5));
    let embedded = launch.embed3();
    assert_eq!(embedded.global(), Range::<3>::new(1, 16, 12));
    assert_eq!(embedded.local(), Range::<3>::new(1, 4, 4));
    assert_eq!(embedded.offset(), Id::<3>::new(0, 3, 5));
    assert_eq!(embedded.global_size(), launch.global_size());
    assert_eq!(embedded.work_group_size(), launch.work_group_size());

    let ids: Vec<_> = embedded
        .global_ids()
        .map(extract_from_id3::<2>)
        .collect();
    let expected: Vec<_> = launch.global_ids().collect();
    assert_eq!(ids, expected);
}

#[test]
fn limits_are_enforced() {
    let limits = LaunchLimits::default();
    let launch = NdRange::new(Range::<2>::new(64, 64), Range::<2>::new(32, 32)).unwrap();
    assert_eq!(
        launch.dispatch_size(&limits),
        Err(LaunchError::WorkGroupTooLarge {
            size: 1024,
            max: 256
        })
    );

    let limits = LaunchLimits::default().with_max_groups_per_dim(8);
    let launch = NdRange::new(Range::<1>::new(4096), Range::<1>::new(256)).unwrap();
    assert_eq!(
        launch.validate(&limits),
        Err(LaunchError::TooManyGroups {
            dim: 0,
            groups: 16,
            max: 8
        })
    );
}

#[test]
fn buffer_for_padded_launch() {
    let launch = NdRange::rounded_up(Range::<1>::new(250), Range::<1>::new(64)).unwrap();
    let bytes = (launch.global_size() * std::mem::size_of::<f32>()) as u64;
    assert_eq!(bytes, 1024);
    assert_eq!(aligned_allocation_size(bytes - 24, 256), Ok(1024));
}
