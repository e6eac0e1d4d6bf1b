//! MU-stepped trajectory construction.
//!
//! Samples a pair's breakpoint schedules at integer MU steps into an
//! ordered control-point table. A leaf move at the exact MU where it
//! becomes due produces two consecutive rows at identical MU — a
//! vertical step bracketing the instant of motion — so the table is
//! piecewise-constant between rows.

use aperture_core::{ControlPoint, LeafSchedules, ScheduleEntry, Trajectory};
use smallvec::SmallVec;

/// Cursor over one leaf's breakpoint schedule.
///
/// `position` is the column of the entry the cursor points at: the leaf
/// dwells there until the entry's cumulative MU is reached, then hops to
/// the next entry's column.
struct LeafCursor<'a> {
    entries: &'a [ScheduleEntry],
    index: usize,
    position: u32,
}

impl<'a> LeafCursor<'a> {
    fn new(entries: &'a [ScheduleEntry]) -> Self {
        Self {
            entries,
            index: 0,
            position: entries.first().map(|e| e.column).unwrap_or(0),
        }
    }

    /// The current entry's threshold has been reached.
    fn due(&self, mu: u32) -> bool {
        self.index < self.entries.len() && mu >= self.entries[self.index].mu
    }

    /// No further entries to hop to.
    fn exhausted(&self) -> bool {
        self.index + 1 >= self.entries.len()
    }

    /// Hop to the next entry's column, if one exists.
    fn advance(&mut self) {
        if !self.exhausted() {
            self.index += 1;
            self.position = self.entries[self.index].column;
        }
    }
}

/// Build the control-point table for one pair's schedules.
///
/// One row per integer MU from 0 to `total_mu` inclusive, with a second
/// row at the same MU wherever a leaf moves. The terminal step forces
/// the trailing leaf onto the leading leaf's position, so the last row
/// is always closed. A static pair yields the single row `(0, 0, 0)`.
///
/// ```
/// use aperture_core::IntensityProfile;
/// use aperture_sequence::{build_trajectory, sweep_profile};
///
/// let t = build_trajectory(&sweep_profile(&IntensityProfile::new(vec![0, 4, 0])));
/// let last = t.last().unwrap();
/// assert_eq!((last.mu, last.leading, last.trailing), (4, 2, 2));
/// ```
pub fn build_trajectory(schedules: &LeafSchedules) -> Trajectory {
    if schedules.is_static() {
        return Trajectory::from_points(vec![ControlPoint {
            mu: 0,
            leading: 0,
            trailing: 0,
        }]);
    }

    let mut lead = LeafCursor::new(&schedules.leading);
    let mut trail = LeafCursor::new(&schedules.trailing);
    let total = schedules.total_mu;
    let mut points = Vec::with_capacity(total as usize + 2);

    for mu in 0..total {
        points.extend(step(mu, &mut lead, &mut trail));
    }

    // Terminal step: emit the pre-closure state, then close the pair.
    points.push(ControlPoint {
        mu: total,
        leading: lead.position,
        trailing: trail.position,
    });
    points.push(ControlPoint {
        mu: total,
        leading: lead.position,
        trailing: lead.position,
    });

    Trajectory::from_points(points)
}

/// Emit the row(s) for one MU step: the current state, plus a second
/// row at the same MU if either leaf moved.
fn step(mu: u32, lead: &mut LeafCursor<'_>, trail: &mut LeafCursor<'_>) -> SmallVec<[ControlPoint; 2]> {
    let mut rows = SmallVec::new();
    rows.push(ControlPoint {
        mu,
        leading: lead.position,
        trailing: trail.position,
    });

    let lead_due = lead.due(mu);
    let trail_due = trail.due(mu);
    if !lead_due && !trail_due {
        return rows;
    }

    if lead_due {
        lead.advance();
    }
    if trail_due {
        if trail.exhausted() {
            // Closing: nothing left in the schedule, catch the leading leaf.
            trail.position = lead.position;
        } else {
            trail.advance();
        }
    }

    rows.push(ControlPoint {
        mu,
        leading: lead.position,
        trailing: trail.position,
    });
    rows
}
