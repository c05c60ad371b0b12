//! Integration tests for `SmallVector` and `CompressedPair`

use std::mem::{size_of, size_of_val};

use smallvec::SmallVec;
use vessel::{CompressedPair, Doubling, Exact, GrowthPolicy, Optional, OutOfRange, SmallVector};

#[derive(Debug, Clone, PartialEq)]
struct Point {
    i: i32,
    j: i32,
}

impl From<(i32, i32)> for Point {
    fn from((i, j): (i32, i32)) -> Self {
        Point { i, j }
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_list_construction() {
    let v: SmallVector<i32, 4> = SmallVector::from_list([1, 2, 3]);
    assert_eq!(v[0], 1);
    assert_eq!(v[1], 2);
    assert_eq!(v[2], 3);
    assert_eq!(v.len(), 3);
}

#[test]
fn test_list_construction_spills_when_too_long() {
    let v: SmallVector<i32, 2> = SmallVector::from_list([1, 2, 3, 4, 5]);
    assert!(v.spilled());
    assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_piecewise_construction() {
    let v: SmallVector<Point, 4> = SmallVector::from_piecewise([(1, 2), (3, 4)]);
    assert_eq!(v[0].i, 1);
    assert_eq!(v[0].j, 2);
    assert_eq!(v[1].i, 3);
    assert_eq!(v[1].j, 4);
}

#[test]
fn test_construction_with_policy() {
    let v: SmallVector<Point, 1, Exact> = SmallVector::with_policy(Exact);
    assert!(v.is_empty());
    assert_eq!(v.policy(), &Exact);
    assert_eq!(SmallVector::<Point, 1, Exact>::inline_capacity(), 1);
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_zero_sized_policy_is_free() {
    assert_eq!(size_of::<Doubling>(), 0);
    assert_eq!(
        size_of::<SmallVector<String, 3>>(),
        size_of::<SmallVec<[String; 3]>>()
    );
    assert_eq!(
        size_of::<CompressedPair<SmallVec<[u16; 8]>, Doubling>>(),
        size_of::<SmallVec<[u16; 8]>>()
    );
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_push_pop_lifo() {
    let mut v: SmallVector<String, 2> = SmallVector::new();
    for word in ["a", "b", "c"] {
        v.push(word.to_string());
    }
    assert_eq!(v.pop(), Optional::new("c".to_string()));
    assert_eq!(v.pop(), Optional::new("b".to_string()));
    assert_eq!(v.pop(), Optional::new("a".to_string()));
    assert!(!v.pop().has_value());
}

#[test]
fn test_capacity_never_below_len() {
    let mut v: SmallVector<u8, 3> = SmallVector::new();
    for i in 0..100 {
        v.push(i);
        assert!(v.capacity() >= v.len());
        assert!(v.capacity() >= SmallVector::<u8, 3>::inline_capacity());
    }
}

#[test]
fn test_custom_policy() {
    /// Rounds capacities up to the next multiple of 16
    #[derive(Default)]
    struct Blocks;

    impl GrowthPolicy for Blocks {
        fn next_capacity(&self, _current: usize, required: usize) -> usize {
            required.div_ceil(16) * 16
        }
    }

    let mut v: SmallVector<u32, 2, Blocks> = SmallVector::new();
    v.extend(0..3);
    assert_eq!(v.capacity(), 16);
    v.extend(3..17);
    assert_eq!(v.capacity(), 32);
}

#[test]
fn test_bounds_errors() {
    let mut v: SmallVector<i32, 4> = SmallVector::from_list([1, 2]);

    let err = v.at(5).unwrap_err();
    assert_eq!(err, OutOfRange { index: 5, len: 2 });
    assert_eq!(err.to_string(), "index 5 is out of range for length 2");

    assert!(v.at_mut(2).is_err());
    assert!(v.insert(3, 0).is_err());
    assert!(v.remove(2).is_err());
    assert_eq!(v.as_slice(), &[1, 2]);

    *v.at_mut(1).unwrap() = 20;
    assert_eq!(v.at(1), Ok(&20));
}

#[test]
fn test_slice_operations_through_deref() {
    let mut v: SmallVector<i32, 8> = SmallVector::from_list([3, 1, 2]);
    v.sort_unstable();
    assert_eq!(v.as_slice(), &[1, 2, 3]);
    assert!(v.contains(&2));
    assert_eq!(v.iter().sum::<i32>(), 6);

    for x in &mut v {
        *x *= 10;
    }
    assert_eq!(v.into_vec(), vec![10, 20, 30]);
}

// ============================================================================
// Interaction with Optional
// ============================================================================

#[test]
fn test_lookup_chains() {
    let v: SmallVector<Point, 4> = SmallVector::from_piecewise([(1, 2), (3, 4)]);

    let j = v.last().then(|p| p.j);
    assert_eq!(j, Optional::new(4));

    let missing = v.get(10).then(|p| p.i).catch_error(|| -1);
    assert_eq!(missing, Optional::new(-1));
}

#[test]
fn test_vector_as_combinator_result() {
    let words = Optional::new("a b c").then(|s| {
        s.split(' ')
            .map(str::to_string)
            .collect::<SmallVector<String, 4>>()
    });
    assert_eq!(words.value().map(|v| v.len()), Ok(3));
}

// ============================================================================
// CompressedPair
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct EmptyCat;

impl EmptyCat {
    fn purr(&self) -> &'static str {
        "purr"
    }
}

#[test]
fn test_pair_sizes_are_ordered() {
    let largest = CompressedPair::new(1_i32, 1_i32);
    let middle = CompressedPair::new(1_i32, EmptyCat);
    let smallest = CompressedPair::new(EmptyCat, EmptyCat);

    assert!(size_of_val(&largest) > size_of_val(&middle));
    assert!(size_of_val(&middle) > size_of_val(&smallest));
}

#[test]
fn test_pair_access() {
    let pair = CompressedPair::new(42, EmptyCat);
    assert_eq!(*pair.first(), 42);
    assert_eq!(pair.second().purr(), "purr");
}

#[test]
fn test_pair_in_optional() {
    let opt = Optional::new(CompressedPair::new(1, EmptyCat))
        .then(|pair| CompressedPair::new(*pair.first() + 1, *pair.second()));
    assert_eq!(opt.value().map(|p| *p.first()), Ok(2));
}
