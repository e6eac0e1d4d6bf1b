//! Normalizing per-pair trajectories into a fixed-length field.

use aperture_core::{AssembleError, ControlPoint, PairId, Trajectory};

/// A complete field: every pair's trajectory resized to exactly the
/// device's control-point count.
///
/// Built only by [`assemble`]; consumed read-only by the device writer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    control_limit: usize,
    pairs: Vec<Trajectory>,
}

impl Field {
    /// The common control-point count every pair was normalized to.
    pub fn control_limit(&self) -> usize {
        self.control_limit
    }

    /// Number of leaf pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// One pair's normalized trajectory.
    pub fn pair(&self, id: PairId) -> Option<&Trajectory> {
        self.pairs.get(id.0 as usize)
    }

    /// Iterate over pairs in order, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = (PairId, &Trajectory)> {
        self.pairs
            .iter()
            .enumerate()
            .map(|(i, t)| (PairId(i as u32), t))
    }
}

/// Resize every trajectory to exactly `control_limit` control points.
///
/// Shorter trajectories are padded: a static pair repeats the stationary
/// origin row, a finished pair holds its last (closed) position, with
/// the MU index continuing to increment either way. A trajectory longer
/// than the limit is a sequencing/limit mismatch the fitter exists to
/// prevent, so it is a hard error — never silently truncated.
///
/// # Errors
///
/// [`AssembleError::LimitExceeded`] with the offending pair's index and
/// length.
pub fn assemble(
    trajectories: Vec<Trajectory>,
    control_limit: usize,
) -> Result<Field, AssembleError> {
    let mut pairs = Vec::with_capacity(trajectories.len());
    for (i, trajectory) in trajectories.into_iter().enumerate() {
        let len = trajectory.len();
        if len > control_limit {
            return Err(AssembleError::LimitExceeded {
                pair: PairId(i as u32),
                length: len,
                limit: control_limit,
            });
        }
        pairs.push(pad_to(trajectory, control_limit));
    }
    Ok(Field {
        control_limit,
        pairs,
    })
}

/// Extend a trajectory to `control_limit` rows by holding position.
fn pad_to(trajectory: Trajectory, control_limit: usize) -> Trajectory {
    let mut points = trajectory.points().to_vec();
    let hold = match points.last() {
        // Static pair: never opened, parked at the origin.
        Some(last) if points.len() == 1 => ControlPoint {
            mu: last.mu,
            leading: 0,
            trailing: 0,
        },
        Some(last) => *last,
        None => ControlPoint {
            mu: 0,
            leading: 0,
            trailing: 0,
        },
    };
    let mut mu = hold.mu;
    while points.len() < control_limit {
        mu += 1;
        points.push(ControlPoint { mu, ..hold });
    }
    Trajectory::from_points(points)
}
