/// Event emitted by the Jacobi solver after each completed sweep.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The sweep that just completed (1-based).
    pub iteration: usize,

    /// The iterate after this sweep.
    pub x: &'a [f64],

    /// The iterate before this sweep.
    pub previous: &'a [f64],

    /// L1 delta between `previous` and `x`.
    pub delta: f64,
}

impl Event<'_> {
    /// Returns the largest absolute change of any component in this sweep.
    #[must_use]
    pub fn max_change(&self) -> f64 {
        self.x
            .iter()
            .zip(self.previous)
            .map(|(new, old)| (new - old).abs())
            .fold(0.0, f64::max)
    }
}
