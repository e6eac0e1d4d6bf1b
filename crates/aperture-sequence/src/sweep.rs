//! Unidirectional-sweep schedule derivation.
//!
//! Reconstructs the classical leaf-sequencing result: the forward
//! differences of the zero-padded profile, scanned in the leaf-travel
//! direction, split by sign into the two leaf schedules. Positive
//! differences open the aperture (leading leaf), negative ones close it
//! (trailing leaf); cumulative MU is monotone by construction.

use aperture_core::{IntensityProfile, LeafSchedules, ScheduleEntry};

/// Decompose one intensity profile into leading/trailing leaf schedules.
///
/// The profile is treated as padded with a zero at both ends (the field
/// starts and ends fully closed). Scanning column `i` from `N` down to
/// `0`, the delta `padded[i] - padded[i+1]` produces at most one event:
/// positive deltas append to the leading schedule, negated negative
/// deltas to the trailing schedule, zeros are skipped. `total_mu` is the
/// trailing schedule's final cumulative MU.
///
/// An all-zero profile yields empty schedules and `total_mu = 0`: the
/// pair is static for the whole field, which is a valid case, not an
/// error.
///
/// ```
/// use aperture_core::IntensityProfile;
/// use aperture_sequence::sweep_profile;
///
/// let schedules = sweep_profile(&IntensityProfile::new(vec![0, 4, 0]));
/// assert_eq!(schedules.leading.len(), 1);
/// assert_eq!((schedules.leading[0].column, schedules.leading[0].mu), (2, 4));
/// assert_eq!((schedules.trailing[0].column, schedules.trailing[0].mu), (1, 4));
/// assert_eq!(schedules.total_mu, 4);
/// ```
pub fn sweep_profile(profile: &IntensityProfile) -> LeafSchedules {
    let n = profile.len();
    let values = profile.values();
    // Padded frame: index 0 and n+1 are the implicit zeros.
    let padded = |i: usize| -> i64 {
        if i == 0 || i == n + 1 {
            0
        } else {
            i64::from(values[i - 1])
        }
    };

    let mut leading = Vec::new();
    let mut trailing = Vec::new();
    let mut leading_mu: u32 = 0;
    let mut trailing_mu: u32 = 0;

    for i in (0..=n).rev() {
        let delta = padded(i) - padded(i + 1);
        if delta > 0 {
            leading_mu += delta as u32;
            leading.push(ScheduleEntry {
                column: i as u32,
                mu: leading_mu,
            });
        } else if delta < 0 {
            trailing_mu += (-delta) as u32;
            trailing.push(ScheduleEntry {
                column: i as u32,
                mu: trailing_mu,
            });
        }
    }

    let total_mu = trailing.last().map(|e| e.mu).unwrap_or(0);
    LeafSchedules {
        leading,
        trailing,
        total_mu,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn triangular_peak() {
        let s = sweep_profile(&IntensityProfile::new(vec![0, 4, 0]));
        assert_eq!(s.leading, vec![ScheduleEntry { column: 2, mu: 4 }]);
        assert_eq!(s.trailing, vec![ScheduleEntry { column: 1, mu: 4 }]);
        assert_eq!(s.total_mu, 4);
    }

    #[test]
    fn staircase_produces_one_event_per_step() {
        // 0 -> 2 -> 4 -> 0: two rises on the trailing side of the scan,
        // one drop on the leading side.
        let s = sweep_profile(&IntensityProfile::new(vec![0, 2, 4, 0]));
        assert_eq!(s.leading, vec![ScheduleEntry { column: 3, mu: 4 }]);
        assert_eq!(
            s.trailing,
            vec![
                ScheduleEntry { column: 2, mu: 2 },
                ScheduleEntry { column: 1, mu: 4 },
            ]
        );
        assert_eq!(s.total_mu, 4);
    }

    #[test]
    fn flat_profile_is_static() {
        let s = sweep_profile(&IntensityProfile::new(vec![0, 0, 0, 0]));
        assert!(s.leading.is_empty());
        assert!(s.trailing.is_empty());
        assert_eq!(s.total_mu, 0);
        assert!(s.is_static());
    }

    #[test]
    fn empty_profile_is_static() {
        let s = sweep_profile(&IntensityProfile::new(vec![]));
        assert!(s.is_static());
    }

    #[test]
    fn plateau_opens_and_closes_once() {
        let s = sweep_profile(&IntensityProfile::new(vec![3, 3, 3]));
        // Rising edge at the right boundary, falling edge at the left.
        assert_eq!(s.leading, vec![ScheduleEntry { column: 3, mu: 3 }]);
        assert_eq!(s.trailing, vec![ScheduleEntry { column: 0, mu: 3 }]);
        assert_eq!(s.total_mu, 3);
    }

    fn arb_profile() -> impl Strategy<Value = IntensityProfile> {
        prop::collection::vec(0u32..40, 0..16).prop_map(IntensityProfile::new)
    }

    proptest! {
        #[test]
        fn cumulative_mu_strictly_increasing(profile in arb_profile()) {
            let s = sweep_profile(&profile);
            for sched in [&s.leading, &s.trailing] {
                for pair in sched.windows(2) {
                    prop_assert!(pair[0].mu < pair[1].mu);
                }
            }
        }

        #[test]
        fn columns_strictly_decreasing(profile in arb_profile()) {
            let s = sweep_profile(&profile);
            for sched in [&s.leading, &s.trailing] {
                for pair in sched.windows(2) {
                    prop_assert!(pair[0].column > pair[1].column);
                }
            }
        }

        #[test]
        fn leading_and_trailing_totals_agree(profile in arb_profile()) {
            // The padded profile starts and ends at zero, so the rises
            // and falls telescope to the same total.
            let s = sweep_profile(&profile);
            let lead_total = s.leading.last().map(|e| e.mu).unwrap_or(0);
            prop_assert_eq!(lead_total, s.total_mu);
        }

        #[test]
        fn total_mu_bounded_by_profile_sum(profile in arb_profile()) {
            let s = sweep_profile(&profile);
            let sum: u32 = profile.values().iter().sum();
            let peak = profile.values().iter().copied().max().unwrap_or(0);
            prop_assert!(s.total_mu <= sum);
            prop_assert!(s.total_mu >= peak);
        }
    }
}
