//! Append-only log of evaluated points.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::space::BoundedSpace;
use crate::types::Direction;

/// A single completed evaluation: the point and the score the objective
/// returned for it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    point: Vec<f64>,
    score: f64,
}

impl Observation {
    /// Creates a new observation. Validation happens on
    /// [`ObservationHistory::append`].
    #[must_use]
    pub fn new(point: Vec<f64>, score: f64) -> Self {
        Self { point, score }
    }

    /// The evaluated point.
    #[must_use]
    pub fn point(&self) -> &[f64] {
        &self.point
    }

    /// The objective value at [`point`](Self::point).
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Consumes the observation, returning its point.
    #[must_use]
    pub fn into_point(self) -> Vec<f64> {
        self.point
    }
}

/// Time-ordered log of observations for one optimization run.
///
/// Insertion order is evaluation order. The history only grows; every entry
/// has a finite score and a point inside the bounds it was created with.
///
/// # Examples
///
/// ```
/// use quickopt::{BoundedSpace, Direction, Observation, ObservationHistory};
///
/// let space = BoundedSpace::new(vec![0.0], vec![10.0]).unwrap();
/// let mut history = ObservationHistory::new(space, Direction::Maximize);
/// history.append(Observation::new(vec![1.0], 3.0)).unwrap();
/// history.append(Observation::new(vec![2.0], 7.0)).unwrap();
/// history.append(Observation::new(vec![3.0], 5.0)).unwrap();
///
/// let (good, bad) = history.split(1).unwrap();
/// assert_eq!(good[0].score(), 7.0);
/// assert_eq!(bad.len(), 2);
/// assert_eq!(history.best().unwrap().point(), &[2.0]);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationHistory {
    space: BoundedSpace,
    direction: Direction,
    observations: Vec<Observation>,
}

impl ObservationHistory {
    /// Creates an empty history over `space`, ranking by `direction`.
    #[must_use]
    pub fn new(space: BoundedSpace, direction: Direction) -> Self {
        Self {
            space,
            direction,
            observations: Vec::new(),
        }
    }

    /// Appends an observation.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidObservation` if the score is not finite or the
    /// point has the wrong length or lies outside the bounds.
    pub fn append(&mut self, observation: Observation) -> Result<()> {
        if !observation.score.is_finite() {
            return Err(Error::InvalidObservation(format!(
                "score must be finite, got {}",
                observation.score
            )));
        }
        if observation.point.len() != self.space.dimension() {
            return Err(Error::InvalidObservation(format!(
                "point has {} coordinates but the domain has {}",
                observation.point.len(),
                self.space.dimension()
            )));
        }
        if !self.space.contains(&observation.point) {
            return Err(Error::InvalidObservation(format!(
                "point {:?} lies outside the bounds",
                observation.point
            )));
        }

        self.observations.push(observation);
        Ok(())
    }

    /// Number of observations recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The ranking direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The bounds every observation lies in.
    #[must_use]
    pub fn space(&self) -> &BoundedSpace {
        &self.space
    }

    /// All observations in evaluation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Observation] {
        &self.observations
    }

    /// Iterates over observations in evaluation order.
    pub fn iter(&self) -> core::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Splits the history into the `k` best observations and the rest.
    ///
    /// Both halves are returned best-first. Ties are broken by insertion
    /// order: the earlier observation ranks higher.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientHistory` if `k == 0` or `k >= len()`.
    pub fn split(&self, k: usize) -> Result<(Vec<&Observation>, Vec<&Observation>)> {
        let size = self.observations.len();
        if k == 0 || k >= size {
            return Err(Error::InsufficientHistory { k, size });
        }

        // Stable sort keeps insertion order among equal scores.
        let mut ranked: Vec<&Observation> = self.observations.iter().collect();
        ranked.sort_by(|a, b| self.direction.compare(b.score, a.score));

        let bad = ranked.split_off(k);
        Ok((ranked, bad))
    }

    /// Returns the best observation so far. Ties go to the earliest.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoObservations` if the history is empty.
    pub fn best(&self) -> Result<&Observation> {
        let mut iter = self.observations.iter();
        let first = iter.next().ok_or(Error::NoObservations)?;
        Ok(iter.fold(first, |best, obs| {
            if self.direction.is_better(obs.score, best.score) {
                obs
            } else {
                best
            }
        }))
    }
}

impl<'a> IntoIterator for &'a ObservationHistory {
    type Item = &'a Observation;
    type IntoIter = core::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
