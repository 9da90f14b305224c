//! Fixture probe (spec §8): applying `f` with `rounds = 2` to the state
//! `[0, 1, .., 15]` must produce, in words `8..16`, exactly the
//! initialization constants `U0..U7` for the corresponding word width.
//! Also checks that `f` composes: `f(s, 2r)` is observationally identical
//! to applying `f(s, r)` twice.

use crate::{permutation::f, Word};

#[test]
fn fixture_probe_32() {
    fixture_probe::<u32>();
}

#[test]
fn fixture_probe_64() {
    fixture_probe::<u64>();
}

fn fixture_probe<W: Word>() {
    let mut s: [W; 16] = std::array::from_fn(|i| W::from_small(i as u32));
    f(&mut s, 2);
    assert_eq!(&s[8..16], &W::INIT, "F(2 rounds) did not reach U0..U7");
}

#[test]
fn composes_32() {
    composes::<u32>();
}

#[test]
fn composes_64() {
    composes::<u64>();
}

fn composes<W: Word>() {
    let initial: [W; 16] = std::array::from_fn(|i| W::from_small((i * 7 + 3) as u32));

    let mut combined = initial;
    f(&mut combined, 6);

    let mut stepped = initial;
    f(&mut stepped, 3);
    f(&mut stepped, 3);

    assert_eq!(combined, stepped, "F(s, 2r) != F(F(s, r), r)");
}
