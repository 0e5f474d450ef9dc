//! Allocation sizes for buffers backing a launch

use ndspace_types::{checked_next_multiple_of, power_of_2_ceil};

use crate::LaunchError;

/// Round `bytes` up to a multiple of `alignment`.
pub fn aligned_allocation_size(bytes: u64, alignment: u64) -> Result<u64, LaunchError> {
    if alignment == 0 {
        return Err(LaunchError::ZeroAlignment);
    }
    let aligned =
        checked_next_multiple_of(bytes, alignment).ok_or(LaunchError::AllocationOverflow { bytes })?;
    if aligned != bytes {
        tracing::trace!(bytes, alignment, aligned, "aligned allocation size");
    }
    Ok(aligned)
}

/// Round `bytes` up to the power of two bucket it is allocated from. Zero bytes need no bucket
/// and stay zero.
pub fn bucketed_allocation_size(bytes: u64) -> Result<u64, LaunchError> {
    match power_of_2_ceil(bytes) {
        0 if bytes != 0 => Err(LaunchError::AllocationOverflow { bytes }),
        bucket => Ok(bucket),
    }
}

#[test]
fn test_aligned_allocation_size() {
    assert_eq!(aligned_allocation_size(1000, 256), Ok(1024));
    assert_eq!(aligned_allocation_size(1024, 256), Ok(1024));
    assert_eq!(aligned_allocation_size(0, 256), Ok(0));
    assert_eq!(
        aligned_allocation_size(1000, 0),
        Err(LaunchError::ZeroAlignment)
    );
    assert_eq!(
        aligned_allocation_size(u64::MAX, 256),
        Err(LaunchError::AllocationOverflow { bytes: u64::MAX })
    );
}

#[test]
fn test_bucketed_allocation_size() {
    assert_eq!(bucketed_allocation_size(0), Ok(0));
    assert_eq!(bucketed_allocation_size(1), Ok(1));
    assert_eq!(bucketed_allocation_size(1000), Ok(1024));
    assert_eq!(bucketed_allocation_size(4096), Ok(4096));
    assert_eq!(
        bucketed_allocation_size((1 << 63) + 1),
        Err(LaunchError::AllocationOverflow {
            bytes: (1 << 63) + 1
        })
    );
}
