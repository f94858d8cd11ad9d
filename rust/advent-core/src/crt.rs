use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One congruence `x ≡ a (mod n)` in a simultaneous system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub a: u64,
    pub n: u64,
}

/// Smallest non-negative `x` satisfying every congruence in `equations`.
///
/// Preconditions (not validated): the list is non-empty, the moduli are
/// pairwise coprime, and each equation has `n > 1` and `a < n`. The
/// Chinese Remainder Theorem then guarantees a unique solution modulo the
/// product of the moduli.
///
/// Solves by sieve: seed the candidate set from one equation and
/// intersect it with each remaining congruence. Not the fast way to do
/// CRT, but simple, and plenty for the small moduli the daily solvers
/// feed it.
pub fn solve_by_sieve(equations: &[Equation]) -> u64 {
    // Seeding from the largest modulus keeps the candidate list smallest.
    let sorted: Vec<Equation> = equations
        .iter()
        .copied()
        .sorted_by(|a, b| b.n.cmp(&a.n))
        .collect();

    let period: u64 = sorted.iter().map(|eq| eq.n).product();

    let (first, rest) = sorted.split_first().expect("at least one equation");
    let mut candidates: Vec<u64> = (first.a..period).step_by(first.n as usize).collect();

    for eq in rest {
        candidates.retain(|x| x % eq.n == eq.a);
    }

    *candidates
        .first()
        .expect("no simultaneous solution; moduli must be pairwise coprime")
}
