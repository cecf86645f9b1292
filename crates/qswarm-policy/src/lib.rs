//! Tabular action-value store with epsilon-greedy selection.
//!
//! A [`QTable`] maps discrete state keys to fixed-length vectors of action
//! values and carries the three learning hyperparameters (learning rate α,
//! discount γ, exploration rate ε) for its whole lifetime. It implements the
//! Q-learning temporal-difference update:
//!
//! ```text
//! Q(s,a) ← Q(s,a) + α · (r + γ · max_a' Q(s',a') − Q(s,a))
//! ```
//!
//! # Laziness
//!
//! The table is sparse: a state that has never been touched occupies no
//! memory and reads as an all-zero vector. States are materialized through
//! the get-or-insert-default accessor [`QTable::values_mut`] the first time
//! selection or an update touches them, which keeps freshly bred tables
//! cheap to clone.
//!
//! # Ownership
//!
//! A table is exclusively owned by one agent. Breeding clones it —
//! [`Clone`] deep-copies every materialized vector — so two live agents
//! never share backing storage.

use std::collections::BTreeMap;

use qswarm_engine::StateKey;
use rand::Rng;

/// Lazily materialized table of action values, one fixed-length vector per
/// visited state.
///
/// `N` is the action-set cardinality, fixed at compile time; every vector in
/// the table has exactly `N` entries. Random draws are made through an
/// injected [`Rng`] so callers can supply a seeded generator for
/// reproducible runs.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable<const N: usize> {
    values: BTreeMap<StateKey, [f32; N]>,
    learning_rate: f32,
    discount: f32,
    epsilon: f32,
}

impl<const N: usize> QTable<N> {
    /// Creates an empty table. Hyperparameters are fixed for the table's
    /// lifetime.
    #[must_use]
    pub fn new(learning_rate: f32, discount: f32, epsilon: f32) -> Self {
        Self {
            values: BTreeMap::new(),
            learning_rate,
            discount,
            epsilon,
        }
    }

    #[must_use]
    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    #[must_use]
    pub fn discount(&self) -> f32 {
        self.discount
    }

    #[must_use]
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Number of materialized states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get-or-insert-default accessor: the vector stored for `state`,
    /// materializing an all-zero one first if the state is new.
    pub fn values_mut(&mut self, state: StateKey) -> &mut [f32; N] {
        self.values.entry(state).or_insert([0.0; N])
    }

    /// Read-only probe: absent states read as all zeros and are not
    /// materialized.
    #[must_use]
    pub fn values(&self, state: StateKey) -> [f32; N] {
        self.values.get(&state).copied().unwrap_or([0.0; N])
    }

    /// Replaces the vector stored for `state`.
    pub fn insert(&mut self, state: StateKey, values: [f32; N]) {
        self.values.insert(state, values);
    }

    /// Iterates the materialized states and their vectors.
    pub fn states(&self) -> impl Iterator<Item = (StateKey, &[f32; N])> {
        self.values.iter().map(|(state, values)| (*state, values))
    }

    /// Mutable iteration over every stored action value.
    pub fn values_iter_mut(&mut self) -> impl Iterator<Item = &mut f32> {
        self.values.values_mut().flatten()
    }

    /// Epsilon-greedy selection: with probability ε a uniform random action,
    /// otherwise the greedy one. The state is materialized either way, so a
    /// later update hits an existing vector.
    pub fn choose_action<R>(&mut self, state: StateKey, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        let values = *self.values_mut(state);
        if rng.random::<f32>() < self.epsilon {
            rng.random_range(0..N)
        } else {
            greedy_index(&values)
        }
    }

    /// Greedy action for `state`, without exploring or materializing.
    ///
    /// Ties break toward the lowest action index, deterministically; a fresh
    /// all-zero state therefore always yields action 0.
    #[must_use]
    pub fn greedy_action(&self, state: StateKey) -> usize {
        greedy_index(&self.values(state))
    }

    /// Applies the Q-learning update for one observed transition.
    ///
    /// Both `state` and `next_state` are materialized before computing, so
    /// the bootstrap term is well-defined even on first contact.
    ///
    /// # Panics
    ///
    /// Panics if `action >= N`.
    pub fn update(&mut self, state: StateKey, action: usize, reward: f32, next_state: StateKey) {
        let max_next = self
            .values_mut(next_state)
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);
        let learning_rate = self.learning_rate;
        let discount = self.discount;
        let slot = &mut self.values_mut(state)[action];
        *slot += learning_rate * (reward + discount * max_next - *slot);
    }
}

/// Index of the first strict maximum: the lowest-indexed best action.
fn greedy_index<const N: usize>(values: &[f32; N]) -> usize {
    let mut best = 0;
    for (index, value) in values.iter().enumerate().skip(1) {
        if *value > values[best] {
            best = index;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn table() -> QTable<3> {
        QTable::new(0.1, 0.9, 0.2)
    }

    fn state(a: u16, b: u16) -> StateKey {
        StateKey::new(a, b)
    }

    #[test]
    fn fresh_states_materialize_as_zeros() {
        let mut table = table();
        assert!(table.is_empty());
        assert_eq!(*table.values_mut(state(1, 2)), [0.0; 3]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn probe_does_not_materialize() {
        let table = table();
        assert_eq!(table.values(state(1, 2)), [0.0; 3]);
        assert!(table.is_empty());
    }

    #[test]
    fn update_applies_the_td_rule() {
        let mut table = table();
        table.insert(state(0, 1), [1.0, 2.0, 0.5]);
        table.update(state(0, 0), 1, 3.0, state(0, 1));
        // Q(s,1) = 0 + 0.1 * (3.0 + 0.9 * 2.0 - 0) = 0.48
        let updated = table.values(state(0, 0))[1];
        assert!((updated - 0.48).abs() < 1e-6);
    }

    #[test]
    fn update_materializes_both_states() {
        let mut table = table();
        table.update(state(0, 0), 0, -1.0, state(0, 1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn zeroed_hyperparameters_make_update_a_no_op() {
        let mut table = QTable::<3>::new(0.0, 0.0, 0.2);
        table.insert(state(0, 0), [0.25, -0.5, 1.0]);
        table.update(state(0, 0), 2, 0.0, state(0, 1));
        assert_eq!(table.values(state(0, 0)), [0.25, -0.5, 1.0]);
    }

    #[test]
    fn greedy_breaks_ties_toward_the_lowest_index() {
        let mut table = table();
        table.insert(state(0, 0), [0.0, 0.0, 0.0]);
        assert_eq!(table.greedy_action(state(0, 0)), 0);

        table.insert(state(0, 1), [0.5, 1.5, 1.5]);
        assert_eq!(table.greedy_action(state(0, 1)), 1);
    }

    #[test]
    fn zero_epsilon_always_exploits() {
        let mut table = QTable::<3>::new(0.1, 0.9, 0.0);
        table.insert(state(0, 0), [0.1, 0.9, 0.3]);
        let mut rng = Pcg32::from_seed([1; 16]);
        for _ in 0..50 {
            assert_eq!(table.choose_action(state(0, 0), &mut rng), 1);
        }
    }

    #[test]
    fn full_epsilon_always_explores_in_range() {
        let mut table = QTable::<3>::new(0.1, 0.9, 1.0);
        table.insert(state(0, 0), [0.0, 100.0, 0.0]);
        let mut rng = Pcg32::from_seed([2; 16]);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let action = table.choose_action(state(0, 0), &mut rng);
            assert!(action < 3);
            seen[action] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut original = table();
        original.insert(state(0, 0), [1.0, 2.0, 3.0]);
        let cloned = original.clone();

        original.update(state(0, 0), 0, 10.0, state(0, 1));
        assert_eq!(cloned.values(state(0, 0)), [1.0, 2.0, 3.0]);
        assert_eq!(cloned.len(), 1);
    }

    #[test]
    fn clone_preserves_laziness_and_behavior() {
        let mut original = table();
        original.update(state(0, 0), 0, 1.0, state(0, 1));
        let mut cloned = original.clone();
        assert_eq!(original, cloned);

        // identical random draws produce identical choices
        let mut rng_a = Pcg32::from_seed([9; 16]);
        let mut rng_b = Pcg32::from_seed([9; 16]);
        for _ in 0..50 {
            assert_eq!(
                original.choose_action(state(0, 0), &mut rng_a),
                cloned.choose_action(state(0, 0), &mut rng_b)
            );
        }
    }
}
