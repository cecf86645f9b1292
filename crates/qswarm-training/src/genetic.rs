//! Genetic operators over learned Q-tables.
//!
//! Selection lives in [`Population`](crate::Population); this module holds
//! the two operators that produce a child brain from ranked parents:
//! [`crossover`] blends two tables, [`mutate`] perturbs one in place.

use qswarm_policy::QTable;
use rand::Rng;
use rand_distr::Uniform;

/// Half-width of the uniform mutation offset.
const MUTATION_SPAN: f32 = 0.5;

/// Blends two parent tables into a child.
///
/// Iterates the states materialized in `first` only: for each, the child's
/// vector is the elementwise mean of both parents' vectors, with `second`
/// contributing zeros for states it never visited. States known only to
/// `second` are not inherited — the first parent defines the child's state
/// coverage. Hyperparameters are taken from `first`.
#[must_use]
pub fn crossover<const N: usize>(first: &QTable<N>, second: &QTable<N>) -> QTable<N> {
    let mut child = QTable::new(first.learning_rate(), first.discount(), first.epsilon());
    for (state, values) in first.states() {
        let other = second.values(state);
        let mut blended = [0.0; N];
        for (index, slot) in blended.iter_mut().enumerate() {
            *slot = (values[index] + other[index]) / 2.0;
        }
        child.insert(state, blended);
    }
    child
}

/// Perturbs each stored value independently with probability `rate` by a
/// uniform offset in [−0.5, +0.5].
pub fn mutate<const N: usize, R>(table: &mut QTable<N>, rate: f32, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let offset = Uniform::new_inclusive(-MUTATION_SPAN, MUTATION_SPAN).unwrap();
    for value in table.values_iter_mut() {
        if rng.random_bool(rate.into()) {
            *value += rng.sample(offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use qswarm_engine::StateKey;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn table_with(entries: &[(StateKey, [f32; 3])]) -> QTable<3> {
        let mut table = QTable::new(0.1, 0.9, 0.2);
        for (state, values) in entries {
            table.insert(*state, *values);
        }
        table
    }

    #[test]
    fn crossover_averages_shared_states() {
        let a = StateKey::new(0, 0);
        let first = table_with(&[(a, [1.0, 2.0, 3.0])]);
        let second = table_with(&[(a, [3.0, 0.0, 1.0])]);

        let child = crossover(&first, &second);
        assert_eq!(child.values(a), [2.0, 1.0, 2.0]);
    }

    #[test]
    fn crossover_with_itself_is_identity() {
        let parent = table_with(&[
            (StateKey::new(0, 0), [1.0, -2.0, 0.5]),
            (StateKey::new(3, 1), [0.0, 7.0, -0.25]),
        ]);
        let child = crossover(&parent, &parent);
        assert_eq!(child, parent);
    }

    #[test]
    fn crossover_keeps_only_the_first_parents_states() {
        // the first parent defines state coverage; second-parent-only states
        // are dropped, and its missing states average against zero
        let shared = StateKey::new(0, 0);
        let first_only = StateKey::new(1, 0);
        let second_only = StateKey::new(2, 0);
        let first = table_with(&[(shared, [2.0, 2.0, 2.0]), (first_only, [4.0, 0.0, -4.0])]);
        let second = table_with(&[(shared, [0.0, 2.0, 4.0]), (second_only, [9.0, 9.0, 9.0])]);

        let child = crossover(&first, &second);
        assert_eq!(child.len(), 2);
        assert_eq!(child.values(shared), [1.0, 2.0, 3.0]);
        assert_eq!(child.values(first_only), [2.0, 0.0, -2.0]);
        assert!(!child.states().any(|(state, _)| state == second_only));
    }

    #[test]
    fn crossover_copies_hyperparameters_from_the_first_parent() {
        let first = QTable::<3>::new(0.3, 0.7, 0.05);
        let second = QTable::<3>::new(0.9, 0.1, 0.5);
        let child = crossover(&first, &second);
        assert_eq!(child.learning_rate(), 0.3);
        assert_eq!(child.discount(), 0.7);
        assert_eq!(child.epsilon(), 0.05);
    }

    #[test]
    fn zero_mutation_rate_changes_nothing() {
        let mut table = table_with(&[
            (StateKey::new(0, 0), [1.0, 2.0, 3.0]),
            (StateKey::new(1, 1), [-1.0, 0.0, 0.5]),
        ]);
        let before = table.clone();
        let mut rng = Pcg32::from_seed([5; 16]);
        mutate(&mut table, 0.0, &mut rng);
        assert_eq!(table, before);
    }

    #[test]
    fn full_mutation_rate_perturbs_every_value_within_the_span() {
        let mut table = table_with(&[
            (StateKey::new(0, 0), [1.0, 2.0, 3.0]),
            (StateKey::new(1, 1), [-1.0, 0.0, 0.5]),
        ]);
        let before = table.clone();
        let mut rng = Pcg32::from_seed([6; 16]);
        mutate(&mut table, 1.0, &mut rng);

        for (state, values) in before.states() {
            let mutated = table.values(state);
            for (index, original) in values.iter().enumerate() {
                assert_ne!(mutated[index], *original);
                assert!((mutated[index] - original).abs() <= MUTATION_SPAN);
            }
        }
    }
}
