//! Search driver.
//!
//! [`GaRunner`] orchestrates the generational loop: seed a random
//! population, advance it a configured number of generations while
//! recording each generation's best fitness, then hand back the best
//! candidate of the final generation together with the history.
//!
//! Generations are strictly sequential; only fitness evaluation within a
//! generation may be parallelized (see [`GaConfig::parallel`]).

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::SolverError;
use crate::ga::candidate::Candidate;
use crate::ga::config::GaConfig;
use crate::ga::population::Population;
use crate::problem::TimetableProblem;

/// Outcome of a genetic search run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best candidate of the final generation.
    pub best: Candidate,
    /// Conflict score of the best candidate (0 = conflict-free).
    pub best_fitness: i64,
    /// Best fitness per generation, recorded before reproduction.
    ///
    /// One entry per completed generation; empty when no generation ran.
    pub history: Vec<i64>,
    /// Number of generations actually completed.
    pub generations: usize,
}

/// Generational GA driver.
///
/// # Example
/// ```no_run
/// use timetable_ga::ga::{GaConfig, GaRunner};
/// use timetable_ga::problem::TimetableProblem;
///
/// # fn run(problem: TimetableProblem) -> Result<(), timetable_ga::error::SolverError> {
/// let config = GaConfig::default().with_generations(200).with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("best fitness: {}", result.best_fitness);
/// # Ok(())
/// # }
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the full generational loop.
    ///
    /// Fails fast on an invalid configuration; no partial results are
    /// produced.
    pub fn run(problem: &TimetableProblem, config: &GaConfig) -> Result<GaResult, SolverError> {
        let stop = AtomicBool::new(false);
        Self::run_with_stop(problem, config, &stop)
    }

    /// Runs the generational loop with a cancellation flag.
    ///
    /// The flag is checked once per generation boundary, never
    /// mid-generation. When raised, the loop ends early and the result
    /// reports the generations actually completed, with the history
    /// truncated to match.
    pub fn run_with_stop(
        problem: &TimetableProblem,
        config: &GaConfig,
        stop: &AtomicBool,
    ) -> Result<GaResult, SolverError> {
        config.validate().map_err(SolverError::InvalidConfig)?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        info!(
            "starting run: {} sessions over {} rooms x {} slots, population {}, {} generations",
            problem.session_count(),
            problem.room_count(),
            problem.slot_count(),
            config.population_size,
            config.generations,
        );

        let mut population = Population::random(problem, config.population_size, &mut rng);
        let mut history = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            if stop.load(Ordering::Relaxed) {
                info!("stop requested after {generation} generations");
                break;
            }
            let best = population.advance(problem, config, &mut rng)?;
            debug!("generation {generation}: best fitness {best}");
            history.push(best);
        }

        // Children bred in the last generation are still unranked
        population.evaluate(problem, &config.weights, config.parallel);
        population.rank();
        let mut best = population.candidates()[0].clone();
        let best_fitness = best.evaluate(problem, &config.weights);

        info!(
            "run complete: best fitness {} after {} generations",
            best_fitness,
            history.len(),
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: history.len(),
            history,
        })
    }
}
