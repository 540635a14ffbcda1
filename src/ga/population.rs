//! Population management.
//!
//! A [`Population`] holds one generation of candidates and advances it:
//! evaluate, rank best-first, carry the best unmodified, and refill by
//! breeding from the top-ranked members.
//!
//! # Reference
//! De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//! Adaptive Systems" (elitist strategy)

use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;

use crate::error::SolverError;
use crate::ga::candidate::Candidate;
use crate::ga::config::{GaConfig, PenaltyWeights};
use crate::problem::TimetableProblem;

/// One generation of candidate schedules.
#[derive(Debug, Clone)]
pub struct Population {
    candidates: Vec<Candidate>,
}

impl Population {
    /// Creates a population of uniformly random candidates.
    pub fn random<R: Rng>(problem: &TimetableProblem, size: usize, rng: &mut R) -> Self {
        let candidates = (0..size).map(|_| Candidate::random(problem, rng)).collect();
        Self { candidates }
    }

    /// The candidates, in current order (best-first after [`rank`](Self::rank)).
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the population holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Fills every stale fitness cache.
    ///
    /// Evaluation uses no randomness, so the parallel path produces the
    /// same scores as the sequential one.
    pub fn evaluate(&mut self, problem: &TimetableProblem, weights: &PenaltyWeights, parallel: bool) {
        if parallel {
            self.candidates.par_iter_mut().for_each(|c| {
                c.evaluate(problem, weights);
            });
        } else {
            for c in &mut self.candidates {
                c.evaluate(problem, weights);
            }
        }
    }

    /// Sorts candidates best-first (descending fitness).
    ///
    /// The sort is stable: ties keep their prior order, and unevaluated
    /// candidates sort last.
    pub fn rank(&mut self) {
        self.candidates.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
    }

    /// Advances one generation and returns the recorded best fitness.
    ///
    /// Evaluates and ranks the current generation, records its best, then
    /// rebuilds: the best candidate is carried unmodified, and the rest are
    /// bred by crossover over parents drawn uniformly with replacement from
    /// the top `parent_pool` members (clamped to the population size), each
    /// child taking one mutation trial. Drawing the same parent twice is
    /// legal self-crossover.
    ///
    /// The population must be non-empty.
    pub fn advance<R: Rng>(
        &mut self,
        problem: &TimetableProblem,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<i64, SolverError> {
        self.evaluate(problem, &config.weights, config.parallel);
        self.rank();
        let recorded = self.candidates[0].evaluate(problem, &config.weights);

        let size = self.candidates.len();
        let pool = config.parent_pool.min(size);
        let mut next = Vec::with_capacity(size);
        next.push(self.candidates[0].clone());

        let parents = &self.candidates[..pool];
        while next.len() < size {
            // pool >= 1, so choose cannot fail
            let p1 = parents.choose(rng).unwrap();
            let p2 = parents.choose(rng).unwrap();
            let mut child = p1.crossover(p2)?;
            child.mutate(problem, config.mutation_rate, rng);
            next.push(child);
        }

        self.candidates = next;
        Ok(recorded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassSession, Room, StudentGroup, Teacher, TimeSlot};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn campus_problem() -> TimetableProblem {
        let rooms = vec![Room::new("A101", 50), Room::new("B202", 30)];
        let teachers = vec![
            Teacher::new("T1")
                .with_subject("Math")
                .with_subject("Physics")
                .with_available_slot("Monday 8AM"),
            Teacher::new("T2")
                .with_subject("English")
                .with_available_slot("Monday 10AM")
                .with_available_slot("Wednesday 8AM"),
        ];
        let groups = vec![
            StudentGroup::new("S1").with_subject("Math").with_subject("English"),
            StudentGroup::new("S2").with_subject("Physics").with_subject("English"),
        ];
        let sessions = vec![
            ClassSession::new("Math", "T1", "S1"),
            ClassSession::new("Physics", "T1", "S2"),
            ClassSession::new("English", "T2", "S1"),
        ];
        let slots = vec![
            TimeSlot::new("Monday 8AM"),
            TimeSlot::new("Monday 10AM"),
            TimeSlot::new("Tuesday 8AM"),
            TimeSlot::new("Wednesday 8AM"),
        ];
        TimetableProblem::new(sessions, rooms, teachers, groups, slots).unwrap()
    }

    #[test]
    fn test_random_population() {
        let problem = campus_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let pop = Population::random(&problem, 10, &mut rng);

        assert_eq!(pop.len(), 10);
        for c in pop.candidates() {
            assert_eq!(c.len(), 3);
            assert!(c.fitness().is_none());
        }
    }

    #[test]
    fn test_rank_orders_best_first() {
        let problem = campus_problem();
        let config = GaConfig::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut pop = Population::random(&problem, 10, &mut rng);

        pop.evaluate(&problem, &config.weights, false);
        pop.rank();

        let scores: Vec<i64> = pop
            .candidates()
            .iter()
            .map(|c| c.fitness().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_parallel_evaluation_matches_serial() {
        let problem = campus_problem();
        let weights = PenaltyWeights::default();
        let mut rng = SmallRng::seed_from_u64(42);

        let mut serial = Population::random(&problem, 20, &mut rng);
        let mut parallel = serial.clone();

        serial.evaluate(&problem, &weights, false);
        parallel.evaluate(&problem, &weights, true);

        let left: Vec<Option<i64>> = serial.candidates().iter().map(|c| c.fitness()).collect();
        let right: Vec<Option<i64>> = parallel.candidates().iter().map(|c| c.fitness()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_advance_keeps_size() {
        let problem = campus_problem();
        let config = GaConfig::default().with_seed(42);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut pop = Population::random(&problem, 10, &mut rng);

        for _ in 0..5 {
            pop.advance(&problem, &config, &mut rng).unwrap();
            assert_eq!(pop.len(), 10);
            for c in pop.candidates() {
                assert_eq!(c.len(), 3);
            }
        }
    }

    #[test]
    fn test_advance_is_elitist() {
        let problem = campus_problem();
        let config = GaConfig::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut pop = Population::random(&problem, 10, &mut rng);

        let mut recorded = Vec::new();
        for _ in 0..20 {
            recorded.push(pop.advance(&problem, &config, &mut rng).unwrap());
        }
        // The best is carried unmodified, so the recorded series never drops
        assert!(recorded.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_advance_carries_best_into_next_generation() {
        let problem = campus_problem();
        let config = GaConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut pop = Population::random(&problem, 10, &mut rng);

        pop.advance(&problem, &config, &mut rng).unwrap();
        let elite = pop.candidates()[0].clone();

        let recorded = pop.advance(&problem, &config, &mut rng).unwrap();
        // The elite went in unmodified, so the next recorded best is at
        // least its score
        assert!(recorded >= elite.fitness().unwrap_or(i64::MIN));
    }

    #[test]
    fn test_small_pool_is_clamped() {
        let problem = campus_problem();
        let config = GaConfig::default()
            .with_population_size(3)
            .with_parent_pool(5);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut pop = Population::random(&problem, 3, &mut rng);

        // parent_pool exceeds the population; the draw clamps to 3
        let best = pop.advance(&problem, &config, &mut rng).unwrap();
        assert!(best <= 0);
        assert_eq!(pop.len(), 3);
    }
}
