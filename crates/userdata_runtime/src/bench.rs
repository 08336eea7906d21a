//! The timed, self-checking access loop.
//!
//! Every pass looks up each handle's value through the store and increments
//! it in place through the returned pointer. Afterwards every value must have
//! grown by exactly the sample count, in wrapping `i32` arithmetic; anything
//! else means the backend handed back the wrong pointer, and the run fails.

use std::cell::Cell;
use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, error};

use userdata_foundation::{BackendKind, Error, ErrorContext, ErrorKind, Handle, Result};
use userdata_store::UserdataStore;

/// Outcome of one benchmark run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BenchReport {
    /// Backend that was measured.
    pub kind: BackendKind,
    /// Its description.
    pub description: &'static str,
    /// Passes over the population.
    pub samples: usize,
    /// Handles in the population.
    pub handles: usize,
    /// Wall-clock time of the whole loop, in nanoseconds.
    pub total_ns: u64,
    /// Average time per `get` plus increment, in nanoseconds.
    pub average_ns: u64,
}

impl BenchReport {
    /// Renders the report as a single JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "average call time: {} ns ({})",
            self.average_ns, self.description
        )
    }
}

/// Runs `f` `samples` times and returns the total elapsed time.
///
/// Stops at the first error.
///
/// # Errors
///
/// Returns the first error `f` returns.
pub fn time_samples(samples: usize, mut f: impl FnMut() -> Result<()>) -> Result<Duration> {
    let start = Instant::now();
    for _ in 0..samples {
        f()?;
    }
    Ok(start.elapsed())
}

/// `samples` increments of an `i32` with wrapping arithmetic add
/// `samples mod 2^32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn wrapping_count(samples: usize) -> i32 {
    samples as u32 as i32
}

fn saturating_ns(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Measures read-increment access through `store` over `handles`.
///
/// `data[i]` is the value bound to `handles[i]`. Each of `samples` passes
/// calls `get` once per handle, in order, and increments the returned cell.
///
/// # Errors
///
/// - [`ErrorKind::InvalidConfig`] if `samples` is zero or the slices differ in length.
/// - [`ErrorKind::MissingUserData`] if `get` returns `None` for a handle.
/// - [`ErrorKind::BenchmarkMismatch`] if any value did not grow by exactly `samples`.
///
/// # Safety
///
/// Every pointer `store` can return for these handles must point to a live
/// `Cell<i32>` that stays in place for the duration of the call. Binding
/// each handle to `UserData::from_ref(&data[i])` satisfies this.
pub unsafe fn benchmark_userdata_access<S>(
    store: &mut S,
    handles: &[Handle],
    data: &[Cell<i32>],
    samples: usize,
) -> Result<BenchReport>
where
    S: UserdataStore + ?Sized,
{
    let context = || {
        ErrorContext::new()
            .with_backend(store.description())
            .with_run(samples, handles.len())
    };
    if samples == 0 {
        return Err(Error::invalid_config("sample count must be at least 1"));
    }
    if handles.len() != data.len() {
        return Err(Error::invalid_config(format!(
            "{} handles but {} values",
            handles.len(),
            data.len()
        )));
    }

    let snapshot: Vec<i32> = data.iter().map(Cell::get).collect();
    let context = context();

    let total = time_samples(samples, || {
        for &handle in handles {
            let Some(ptr) = store.get(handle) else {
                return Err(Error::missing_userdata(handle));
            };
            // SAFETY: the caller guarantees `ptr` points to a live `Cell<i32>`.
            let cell = unsafe { ptr.as_ref::<Cell<i32>>() };
            cell.set(cell.get().wrapping_add(1));
        }
        Ok(())
    })
    .map_err(|e| e.with_context(context.clone()))?;

    let added = wrapping_count(samples);
    let mismatch = snapshot
        .iter()
        .zip(data)
        .map(|(&old, new)| (old.wrapping_add(added), new.get()))
        .enumerate()
        .find(|(_, (expected, actual))| expected != actual);

    if let Some((index, (expected, actual))) = mismatch {
        error!(
            backend = store.description(),
            index, expected, actual, "benchmark data mismatch"
        );
        return Err(
            Error::benchmark_mismatch(index, i64::from(expected), i64::from(actual))
                .with_context(context),
        );
    }

    let accesses = (samples as u128).saturating_mul(handles.len() as u128);
    let average = if accesses == 0 {
        0
    } else {
        total.as_nanos() / accesses
    };

    let report = BenchReport {
        kind: store.kind(),
        description: store.description(),
        samples,
        handles: handles.len(),
        total_ns: saturating_ns(total),
        average_ns: u64::try_from(average).unwrap_or(u64::MAX),
    };
    debug!(kind = %report.kind, total_ns = report.total_ns, "benchmark finished");
    Ok(report)
}
