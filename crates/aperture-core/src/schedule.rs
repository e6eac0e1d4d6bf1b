//! Leaf schedules: cumulative-MU breakpoints for one leaf pair.

/// One leaf-motion breakpoint: the leaf departs `column` once the
/// cumulative delivered dose reaches `mu`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Column index in the padded profile frame (leaf-travel coordinate).
    pub column: u32,
    /// Cumulative monitor units at which the leaf leaves this column.
    pub mu: u32,
}

/// The pair of breakpoint schedules produced by sequencing one profile.
///
/// The leading leaf opens the aperture, the trailing leaf closes it;
/// both travel in the same fixed direction (decreasing column). Within
/// each schedule `mu` is strictly increasing and `column` strictly
/// decreasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafSchedules {
    /// Breakpoints for the leading (aperture-opening) leaf.
    pub leading: Vec<ScheduleEntry>,
    /// Breakpoints for the trailing (aperture-closing) leaf.
    pub trailing: Vec<ScheduleEntry>,
    /// Total monitor units for the pair: the trailing schedule's final
    /// cumulative MU, 0 for a flat profile.
    pub total_mu: u32,
}

impl LeafSchedules {
    /// Returns `true` if the pair never opens (flat profile).
    pub fn is_static(&self) -> bool {
        self.total_mu == 0
    }
}
