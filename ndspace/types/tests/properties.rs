//! Algebraic properties of ids and ranges in every supported dimension

use ndspace_types::{
    Id, Range, StaticArray, embed_in_id3, embed_in_range3, extract_from_id3, extract_from_range3,
};
use pretty_assertions::{assert_eq, assert_ne};

// A handful of fixed component values, including zero and values that wrap.
const SAMPLES: &[usize] = &[0, 1, 2, 3, 7, 64, 1023, usize::MAX];

fn samples<const D: usize>() -> Vec<StaticArray<D>> {
    let mut arrays = Vec::new();
    for offset in 0..SAMPLES.len() {
        arrays.push(StaticArray::from_array(std::array::from_fn(|dim| {
            SAMPLES[(offset + dim * 3) % SAMPLES.len()]
        })));
    }
    arrays
}

fn check_arithmetic<const D: usize>() {
    for a in samples::<D>() {
        assert_eq!(a, a);
        for b in samples::<D>() {
            assert_eq!(a + b, b + a);
            assert_eq!((a + b) - b, a);
            let differs = a.iter().zip(b.iter()).any(|(x, y)| x != y);
            assert_eq!(a != b, differs);
        }
    }
}

fn check_splat_size<const D: usize>() {
    for s in [0usize, 1, 2, 5, 10] {
        assert_eq!(StaticArray::<D>::splat(s).size(), s.pow(D as u32));
    }
}

#[test]
fn arithmetic_laws_hold_in_every_dimension() {
    check_arithmetic::<1>();
    check_arithmetic::<2>();
    check_arithmetic::<3>();
}

#[test]
fn splat_size_is_scalar_to_the_dimension() {
    check_splat_size::<1>();
    check_splat_size::<2>();
    check_splat_size::<3>();
}

#[test]
fn embedding_round_trips() {
    for id in samples::<1>() {
        assert_eq!(extract_from_id3::<1>(embed_in_id3(id)), id);
        assert_eq!(extract_from_range3::<1>(embed_in_range3(id)), id);
    }
    for id in samples::<2>() {
        assert_eq!(extract_from_id3::<2>(embed_in_id3(id)), id);
        assert_eq!(extract_from_range3::<2>(embed_in_range3(id)), id);
    }
    for id in samples::<3>() {
        assert_eq!(extract_from_id3::<3>(embed_in_id3(id)), id);
        assert_eq!(extract_from_range3::<3>(embed_in_range3(id)), id);
    }
}

#[test]
fn range_embedding_preserves_size() {
    for range in samples::<1>() {
        assert_eq!(embed_in_range3(range).size(), range.size());
    }
    for range in samples::<2>() {
        assert_eq!(embed_in_range3(range).size(), range.size());
    }
    for range in samples::<3>() {
        assert_eq!(embed_in_range3(range).size(), range.size());
    }
}

#[test]
fn id_embedding_pads_leading_components_with_zero() {
    for id in samples::<1>() {
        let embedded = embed_in_id3(id);
        assert_eq!(embedded[0], 0);
        assert_eq!(embedded[1], 0);
    }
    for id in samples::<2>() {
        assert_eq!(embed_in_id3(id)[0], 0);
    }
}

#[test]
fn two_dimensional_range_embeds_with_same_volume() {
    let range = Range::<2>::new(4, 5);
    let embedded = embed_in_range3(range);
    assert_eq!(embedded, Range::<3>::new(1, 4, 5));
    assert_eq!(embedded.size(), 20);
    assert_eq!(embedded.size(), range.size());
}

#[test]
fn ids_and_ranges_share_a_representation() {
    let id: Id<2> = Id::<2>::new(1, 2);
    let range: Range<2> = id;
    assert_eq!(range, Range::<2>::new(1, 2));
    assert_ne!(embed_in_id3(id), embed_in_range3(range));
}
