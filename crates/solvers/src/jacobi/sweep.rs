use jacomat_core::LinearSystem;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Performs one Jacobi sweep and returns the L1 delta.
///
/// Every component of `next` is computed from `current` alone:
///
/// ```text
/// next[i] = (b[i] - Σ_{j≠i} a[i][j]·current[j]) / a[i][i]
/// ```
///
/// With the `parallel` feature the rows are distributed across rayon's
/// thread pool. Each row is still summed sequentially, so both paths produce
/// identical values.
///
/// # Panics
///
/// Panics if `current` or `next` does not have one entry per unknown.
pub fn sweep(system: &LinearSystem, current: &[f64], next: &mut [f64]) -> f64 {
    let size = system.size();
    assert_eq!(current.len(), size, "current iterate has the wrong length");
    assert_eq!(next.len(), size, "next iterate has the wrong length");

    update_rows(system, current, next);
    l1_delta(current, next)
}

/// Returns `Σ |a[i] - b[i]|` over the common length of both slices.
#[must_use]
pub fn l1_delta(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(a, b)| (a - b).abs()).sum()
}

#[cfg(not(feature = "parallel"))]
fn update_rows(system: &LinearSystem, current: &[f64], next: &mut [f64]) {
    for (i, slot) in next.iter_mut().enumerate() {
        *slot = row_update(system, current, i);
    }
}

#[cfg(feature = "parallel")]
fn update_rows(system: &LinearSystem, current: &[f64], next: &mut [f64]) {
    next.par_iter_mut()
        .enumerate()
        .for_each(|(i, slot)| *slot = row_update(system, current, i));
}

fn row_update(system: &LinearSystem, current: &[f64], i: usize) -> f64 {
    let row = system.matrix().row(i);
    let off_diagonal: f64 = row
        .iter()
        .zip(current)
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(_, (a, x))| a * x)
        .sum();

    (system.rhs()[i] - off_diagonal) / row[i]
}
