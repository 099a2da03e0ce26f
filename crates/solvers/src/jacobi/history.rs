/// Ordered snapshots of the iterate, one per completed sweep.
///
/// Snapshots are taken after the update, so the entry at index `k` is the
/// iterate after sweep `k + 1`. The initial guess (the zero vector) is not
/// stored.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct History {
    snapshots: Vec<Vec<f64>>,
}

impl History {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn push(&mut self, snapshot: Vec<f64>) {
        self.snapshots.push(snapshot);
    }

    /// Returns the number of recorded sweeps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if no sweep was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the iterate after the given sweep (1-based).
    #[must_use]
    pub fn at_iteration(&self, iteration: usize) -> Option<&[f64]> {
        iteration
            .checked_sub(1)
            .and_then(|index| self.snapshots.get(index))
            .map(Vec::as_slice)
    }

    /// Returns the most recent snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&[f64]> {
        self.snapshots.last().map(Vec::as_slice)
    }

    /// Iterates over snapshots in sweep order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        self.snapshots.iter().map(Vec::as_slice)
    }

    /// Returns the evolution of unknown `index` across sweeps.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not smaller than the system size.
    #[must_use]
    pub fn variable(&self, index: usize) -> Vec<f64> {
        self.iter().map(|snapshot| snapshot[index]).collect()
    }

    /// Returns the max-norm change produced by each sweep.
    ///
    /// The first sweep is measured against the zero initial guess.
    #[must_use]
    pub fn max_errors(&self) -> Vec<f64> {
        let mut previous: Option<&[f64]> = None;
        self.iter()
            .map(|snapshot| {
                let change = snapshot
                    .iter()
                    .enumerate()
                    .map(|(i, value)| (value - previous.map_or(0.0, |p| p[i])).abs())
                    .fold(0.0, f64::max);
                previous = Some(snapshot);
                change
            })
            .collect()
    }

    /// Consumes the history and returns the raw snapshots.
    #[must_use]
    pub fn into_inner(self) -> Vec<Vec<f64>> {
        self.snapshots
    }
}
