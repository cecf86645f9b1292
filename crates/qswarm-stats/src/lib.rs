//! Statistical summaries for training runs.
//!
//! Currently a single module:
//!
//! - [`descriptive`]: descriptive statistics used to track the fitness
//!   distribution of a cohort across generations
//!
//! # Example
//!
//! ```
//! use qswarm_stats::descriptive::DescriptiveStats;
//!
//! let fitness = [12.0, -3.0, 40.5, 7.25];
//! let stats = DescriptiveStats::new(fitness).unwrap();
//! assert_eq!(stats.max, 40.5);
//! ```

pub mod descriptive;
