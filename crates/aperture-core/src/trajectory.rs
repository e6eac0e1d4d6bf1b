//! MU-indexed leaf trajectories.

use std::fmt;

/// One control point: both leaf positions at a cumulative MU value.
///
/// Positions are column indices in the sequencer's padded frame; the
/// device writer converts them to physical lengths. Duplicate-MU rows
/// are legal and bracket an instantaneous leaf move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlPoint {
    /// Cumulative monitor units delivered at this state.
    pub mu: u32,
    /// Leading-leaf column.
    pub leading: u32,
    /// Trailing-leaf column.
    pub trailing: u32,
}

impl ControlPoint {
    /// Returns `true` if the aperture is fully closed here.
    pub fn is_closed(&self) -> bool {
        self.leading == self.trailing
    }
}

impl fmt::Display for ControlPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mu={} lead={} trail={}", self.mu, self.leading, self.trailing)
    }
}

/// An ordered control-point sequence for one leaf pair.
///
/// Invariants maintained by the builder: MU is non-decreasing, leaf
/// positions change only at schedule breakpoints, and the final row is
/// closed (`leading == trailing`). A static pair is the single row
/// `(0, 0, 0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trajectory {
    points: Vec<ControlPoint>,
}

impl Trajectory {
    /// Wrap an ordered control-point sequence.
    pub fn from_points(points: Vec<ControlPoint>) -> Self {
        Self { points }
    }

    /// Number of control points, duplicate-MU rows included. This is the
    /// length compared against the device's control-point limit.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no control points. Builders never
    /// produce an empty trajectory.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The control points in order.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// The final control point, if any.
    pub fn last(&self) -> Option<&ControlPoint> {
        self.points.last()
    }

    /// Returns `true` for a static pair (single stationary row).
    pub fn is_static(&self) -> bool {
        self.points.len() == 1
    }
}

impl FromIterator<ControlPoint> for Trajectory {
    fn from_iter<I: IntoIterator<Item = ControlPoint>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_detection() {
        assert!(ControlPoint {
            mu: 4,
            leading: 2,
            trailing: 2
        }
        .is_closed());
        assert!(!ControlPoint {
            mu: 0,
            leading: 2,
            trailing: 1
        }
        .is_closed());
    }

    #[test]
    fn display_is_compact() {
        let cp = ControlPoint {
            mu: 3,
            leading: 5,
            trailing: 2,
        };
        assert_eq!(cp.to_string(), "mu=3 lead=5 trail=2");
    }

    #[test]
    fn static_trajectory_is_single_row() {
        let t = Trajectory::from_points(vec![ControlPoint {
            mu: 0,
            leading: 0,
            trailing: 0,
        }]);
        assert!(t.is_static());
        assert_eq!(t.len(), 1);
        assert!(t.last().unwrap().is_closed());
    }
}
