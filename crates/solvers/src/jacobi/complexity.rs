/// Heuristic operation counts for a dense Jacobi solve.
///
/// Each sweep touches every matrix entry once, so one iteration costs `n²`
/// and the whole solve `n² × iters`. The figures are informational and never
/// drive control flow. Both saturate at `usize::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complexity {
    /// Operations per sweep, `n²`.
    pub per_iteration: usize,

    /// Operations for the whole solve, `n² × iters`.
    pub total: usize,
}

impl Complexity {
    /// Computes the counts for an `size`×`size` system after `iters` sweeps.
    #[must_use]
    pub fn new(size: usize, iters: usize) -> Self {
        let per_iteration = size.saturating_mul(size);
        Self {
            per_iteration,
            total: per_iteration.saturating_mul(iters),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_with_square_of_size() {
        let complexity = Complexity::new(3, 7);

        assert_eq!(complexity.per_iteration, 9);
        assert_eq!(complexity.total, 63);
    }

    #[test]
    fn zero_iterations_costs_nothing_in_total() {
        let complexity = Complexity::new(4, 0);

        assert_eq!(complexity.per_iteration, 16);
        assert_eq!(complexity.total, 0);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let complexity = Complexity::new(usize::MAX, 2);

        assert_eq!(complexity.per_iteration, usize::MAX);
        assert_eq!(complexity.total, usize::MAX);
    }
}
