use crate::traits::{IteratedMap, Scalar};

/// Discrete map stepper.
/// Yields x_0, f(x_0), f(f(x_0)), ... without bound; callers decide how many
/// iterates to take. Values are never clamped, so a diverging orbit yields
/// infinities or NaN as they arise.
pub struct DiscreteMap<'a, M, T: Scalar> {
    system: &'a M,
    state: T,
    iteration: usize,
}

impl<'a, M: IteratedMap<T>, T: Scalar> DiscreteMap<'a, M, T> {
    pub fn new(system: &'a M, initial_state: T) -> Self {
        Self {
            system,
            state: initial_state,
            iteration: 0,
        }
    }

    /// Number of iterates yielded so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Advances the state without yielding it.
    pub fn skip_transient(&mut self, steps: usize) {
        for _ in 0..steps {
            self.state = self.system.apply(self.state);
        }
    }
}

impl<M: IteratedMap<T>, T: Scalar> Iterator for DiscreteMap<'_, M, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        // x_{n+1} = f(x_n); emit x_n first so index 0 is the initial state.
        let current = self.state;
        self.state = self.system.apply(current);
        self.iteration += 1;
        Some(current)
    }
}
