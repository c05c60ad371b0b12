//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and check that
//! `Optional` and `SmallVector` behave like their standard-library models
//! (`Option` and `Vec`), and that held values are dropped exactly once.

use proptest::prelude::*;
use std::cell::Cell;
use vessel::{Optional, OutOfRange, SmallVector};

#[derive(Debug, Clone)]
enum OptionalOp {
    Emplace(i32),
    Assign(i32),
    Reset,
    Take,
    Replace(i32),
    SwapWithSpare,
    Then(i32),
    ThenEmpty,
    CatchError(i32),
}

fn optional_op() -> impl Strategy<Value = OptionalOp> {
    prop_oneof![
        any::<i32>().prop_map(OptionalOp::Emplace),
        any::<i32>().prop_map(OptionalOp::Assign),
        Just(OptionalOp::Reset),
        Just(OptionalOp::Take),
        any::<i32>().prop_map(OptionalOp::Replace),
        Just(OptionalOp::SwapWithSpare),
        any::<i32>().prop_map(OptionalOp::Then),
        Just(OptionalOp::ThenEmpty),
        any::<i32>().prop_map(OptionalOp::CatchError),
    ]
}

#[derive(Debug, Clone)]
enum VectorOp {
    Push(u16),
    Pop,
    Insert(usize, u16),
    Remove(usize),
    Truncate(usize),
    ShrinkToFit,
}

fn vector_op() -> impl Strategy<Value = VectorOp> {
    prop_oneof![
        3 => any::<u16>().prop_map(VectorOp::Push),
        1 => Just(VectorOp::Pop),
        1 => (0..20usize, any::<u16>()).prop_map(|(i, v)| VectorOp::Insert(i, v)),
        1 => (0..20usize).prop_map(VectorOp::Remove),
        1 => (0..20usize).prop_map(VectorOp::Truncate),
        1 => Just(VectorOp::ShrinkToFit),
    ]
}

/// Counts live instances so that leaks and double drops both show up
struct Counted<'a> {
    live: &'a Cell<isize>,
}

impl<'a> Counted<'a> {
    fn new(live: &'a Cell<isize>) -> Self {
        live.set(live.get() + 1);
        Self { live }
    }
}

impl Clone for Counted<'_> {
    fn clone(&self) -> Self {
        Counted::new(self.live)
    }
}

impl Drop for Counted<'_> {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

proptest! {
    #[test]
    fn prop_optional_matches_option(ops in prop::collection::vec(optional_op(), 0..64)) {
        let mut opt: Optional<i32> = Optional::none();
        let mut model: Option<i32> = None;
        let mut spare: Optional<i32> = Optional::new(-1);
        let mut spare_model: Option<i32> = Some(-1);

        for op in ops {
            match op {
                OptionalOp::Emplace(v) => {
                    opt.emplace(v);
                    model = Some(v);
                }
                OptionalOp::Assign(v) => {
                    opt.assign(v);
                    model = Some(v);
                }
                OptionalOp::Reset => {
                    opt.reset();
                    model = None;
                }
                OptionalOp::Take => {
                    let taken = opt.take();
                    prop_assert_eq!(taken.into_option(), model.take());
                }
                OptionalOp::Replace(v) => {
                    let old = opt.replace(v);
                    prop_assert_eq!(old.into_option(), model.replace(v));
                }
                OptionalOp::SwapWithSpare => {
                    opt.swap(&mut spare);
                    std::mem::swap(&mut model, &mut spare_model);
                }
                OptionalOp::Then(delta) => {
                    opt = opt.then(|v| v.wrapping_add(delta));
                    model = model.map(|v| v.wrapping_add(delta));
                }
                OptionalOp::ThenEmpty => {
                    opt = opt.then(|_| Optional::<i32>::none());
                    model = None;
                }
                OptionalOp::CatchError(v) => {
                    opt = opt.catch_error(|| v);
                    model = model.or(Some(v));
                }
            }

            prop_assert_eq!(opt.has_value(), model.is_some());
            prop_assert_eq!(opt.value().ok(), model.as_ref());
            prop_assert_eq!(opt.value_or(0), model.unwrap_or(0));
            prop_assert_eq!(spare.as_option(), spare_model.as_ref());
        }
    }

    #[test]
    fn prop_optional_ordering_matches_option(a in any::<Option<i16>>(), b in any::<Option<i16>>()) {
        let oa: Optional<i16> = a.into();
        let ob: Optional<i16> = b.into();
        prop_assert_eq!(oa.cmp(&ob), a.cmp(&b));
        prop_assert_eq!(oa == ob, a == b);
    }

    #[test]
    fn prop_optional_drops_balance(ops in prop::collection::vec(optional_op(), 0..64)) {
        let live = Cell::new(0_isize);
        {
            let mut opt: Optional<Counted<'_>> = Optional::none();
            let mut spare: Optional<Counted<'_>> = Optional::new(Counted::new(&live));

            for op in ops {
                match op {
                    OptionalOp::Emplace(_) => {
                        opt.emplace(Counted::new(&live));
                    }
                    OptionalOp::Assign(_) => opt.assign(Counted::new(&live)),
                    OptionalOp::Reset => opt.reset(),
                    OptionalOp::Take => drop(opt.take()),
                    OptionalOp::Replace(_) => drop(opt.replace(Counted::new(&live))),
                    OptionalOp::SwapWithSpare => opt.swap(&mut spare),
                    OptionalOp::Then(_) => opt = opt.then(Optional::new),
                    OptionalOp::ThenEmpty => {
                        opt = opt.then(|_| Optional::<Counted<'_>>::none());
                    }
                    OptionalOp::CatchError(_) => {
                        opt = opt.catch_error(|| Optional::new(Counted::new(&live)));
                    }
                }
                let expected = isize::from(opt.has_value()) + isize::from(spare.has_value());
                prop_assert_eq!(live.get(), expected);

                let copy = opt.clone();
                prop_assert_eq!(live.get(), expected + isize::from(copy.has_value()));
            }
        }
        prop_assert_eq!(live.get(), 0);
    }

    #[test]
    fn prop_small_vector_matches_vec(ops in prop::collection::vec(vector_op(), 0..128)) {
        let mut v: SmallVector<u16, 4> = SmallVector::new();
        let mut model: Vec<u16> = Vec::new();

        for op in ops {
            match op {
                VectorOp::Push(x) => {
                    v.push(x);
                    model.push(x);
                }
                VectorOp::Pop => {
                    prop_assert_eq!(v.pop().into_option(), model.pop());
                }
                VectorOp::Insert(i, x) => {
                    let result = v.insert(i, x);
                    if i <= model.len() {
                        prop_assert_eq!(result, Ok(()));
                        model.insert(i, x);
                    } else {
                        prop_assert_eq!(result, Err(OutOfRange { index: i, len: model.len() }));
                    }
                }
                VectorOp::Remove(i) => {
                    let result = v.remove(i);
                    if i < model.len() {
                        prop_assert_eq!(result, Ok(model.remove(i)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                VectorOp::Truncate(n) => {
                    v.truncate(n);
                    model.truncate(n);
                }
                VectorOp::ShrinkToFit => v.shrink_to_fit(),
            }

            prop_assert_eq!(v.as_slice(), model.as_slice());
            prop_assert!(v.capacity() >= v.len());
            prop_assert!(v.capacity() >= 4);
            prop_assert_eq!(v.spilled(), v.capacity() > 4);
            prop_assert_eq!(v.first().into_option(), model.first());
            prop_assert_eq!(v.last().into_option(), model.last());
        }
    }
}
