use std::time::Duration;

use rand::Rng;

use crate::errors::{Error, Result};
use crate::util::timed;


#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    pub shifts: u64,
}

pub struct SortReport {
    pub sorted: Vec<u32>,
    pub elapsed: Duration,
    pub stats: SortStats,
}

/// Stable in-place insertion sort.
///
/// Each element is moved left past its larger predecessors and dropped into
/// the gap. Sorted input costs `len - 1` comparisons and no shifts.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();

    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 {
            stats.comparisons += 1;
            if arr[j - 1] <= arr[j] {
                break;
            }
            // adjacent swaps keep it safe for non-Copy T
            arr.swap(j - 1, j);
            stats.shifts += 1;
            j -= 1;
        }
    }

    stats
}

pub fn random_array<R: Rng>(rng: &mut R, size: usize, max_value: u32) -> Result<Vec<u32>> {
    // gen_range panics on an empty range
    if max_value == 0 {
        return Err(Error::InvalidArgument("max_value must be at least 1".to_string()));
    }

    Ok((0..size).map(|_| rng.gen_range(0..max_value)).collect())
}

/// Sorts `size` random values in `[0, max_value)`. Only the sort itself is timed.
pub fn sort_and_time<R: Rng>(rng: &mut R, size: usize, max_value: u32) -> Result<SortReport> {
    let mut arr = random_array(rng, size, max_value)?;
    let (stats, elapsed) = timed(|| insertion_sort(&mut arr));
    log::debug!(
        "sorted {} values with {} comparisons, {} shifts",
        size,
        stats.comparisons,
        stats.shifts
    );

    Ok(SortReport {
        sorted: arr,
        elapsed,
        stats,
    })
}

pub fn parse_size(arg: Option<&str>) -> Result<usize> {
    match arg {
        None => Err(Error::InvalidSize("<missing>".to_string())),
        Some(raw) => raw.trim().parse::<usize>().map_err(|_| Error::InvalidSize(raw.to_string())),
    }
}
