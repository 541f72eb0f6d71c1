//! Weekly load: day values summed per week column.

use std::collections::BTreeMap;

use crate::domain::WeekLoad;

/// Sum `values` per week index.
///
/// `values` and `weeks` are parallel arrays (one entry per day). The result has
/// one entry per distinct week, ordered by week ascending. NaN days contribute
/// nothing, so a week holding only NaN sums to 0.0.
pub fn week_loads(values: &[f64], weeks: &[u32]) -> Vec<WeekLoad> {
    let mut sums: BTreeMap<u32, f64> = BTreeMap::new();
    for (&week, &value) in weeks.iter().zip(values) {
        let slot = sums.entry(week).or_insert(0.0);
        if !value.is_nan() {
            *slot += value;
        }
    }

    sums.into_iter().map(|(week, load)| WeekLoad { week, load }).collect()
}

/// The week with the highest load (first one on ties).
pub fn peak_week(loads: &[WeekLoad]) -> Option<WeekLoad> {
    loads
        .iter()
        .copied()
        .reduce(|best, w| if w.load > best.load { w } else { best })
}
