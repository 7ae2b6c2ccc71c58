//! Intentionally unsynchronized grayscale - a data-race demonstration.
//!
//! [`grayscale_racy`] computes the same luma as
//! [`grayscale`](crate::grayscale::grayscale), but routes the loop
//! cursor and the luma result through *process-wide shared mutable
//! state* instead of per-work-unit locals:
//!
//! - the cursor is advanced by a separate load and store, so two
//!   workers can claim the same pixel (duplicate processing) or leap
//!   past pixels another worker re-published an older cursor over
//!   (skipped or re-walked ranges);
//! - every worker publishes its luma through one shared cell and reads
//!   it back before writing, so a worker can stamp a pixel with a luma
//!   computed by a different worker for a different pixel (streaks).
//!
//! With more than one worker the output is not well-defined: repeated
//! runs on the same input are not guaranteed to match each other or
//! the correct transform. That is the point. This module exists to
//! make the hazard observable next to the per-pixel-local design that
//! avoids it; it must never become the default code path.
//!
//! All shared cells are relaxed atomics, so the demonstration is free
//! of undefined behavior - the races here are logical, exactly the
//! ones the missing discipline permits.

use crate::grayscale::luma;
use crate::{OpsError, OpsResult, expect_len, expect_rgb};
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::thread;
use tracing::warn;

/// Grayscale conversion driven by a shared cursor and a shared result
/// cell across `workers` threads.
///
/// With `workers == 1` the function degenerates to the correct
/// transform; with two or more, the output is non-deterministic.
///
/// # Errors
///
/// Returns an error if the buffer length does not match the
/// dimensions, `channels != 3`, or `workers == 0`.
pub fn grayscale_racy(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    workers: usize,
) -> OpsResult<()> {
    expect_len(data.len(), width, height, channels)?;
    expect_rgb(channels)?;
    if workers == 0 {
        return Err(OpsError::InvalidParameter("at least one worker".into()));
    }

    warn!(workers, "running intentionally unsynchronized grayscale");

    let cells: Vec<AtomicU8> = data.iter().map(|&s| AtomicU8::new(s)).collect();
    let cursor = AtomicUsize::new(0);
    let shared_gray = AtomicU8::new(0);
    let len = data.len();

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| {
                loop {
                    // shared cursor: claim is a load followed by a
                    // store, not an atomic advance
                    let i = cursor.load(Ordering::Relaxed);
                    if i >= len {
                        break;
                    }
                    cursor.store(i + channels, Ordering::Relaxed);

                    let r = cells[i].load(Ordering::Relaxed);
                    let g = cells[i + 1].load(Ordering::Relaxed);
                    let b = cells[i + 2].load(Ordering::Relaxed);

                    // shared result: published, then read back - maybe
                    // after another worker overwrote it
                    shared_gray.store(luma(r, g, b), Ordering::Relaxed);
                    let gray = shared_gray.load(Ordering::Relaxed);

                    for c in 0..channels {
                        cells[i + c].store(gray, Ordering::Relaxed);
                    }
                }
            });
        }
    });

    for (s, cell) in data.iter_mut().zip(&cells) {
        *s = cell.load(Ordering::Relaxed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grayscale::grayscale;

    fn gradient(width: usize, height: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                data.push((x % 256) as u8);
                data.push((y % 256) as u8);
                data.push(((x + y) % 256) as u8);
            }
        }
        data
    }

    #[test]
    fn single_worker_matches_the_correct_transform() {
        let original = gradient(32, 32);

        let mut reference = original.clone();
        grayscale(&mut reference, 32, 32, 3).unwrap();

        let mut racy = original.clone();
        grayscale_racy(&mut racy, 32, 32, 3, 1).unwrap();

        assert_eq!(racy, reference);
    }

    #[test]
    fn concurrent_workers_diverge_from_the_correct_transform() {
        let width = 256;
        let height = 256;
        let original = gradient(width, height);

        let mut reference = original.clone();
        grayscale(&mut reference, width, height, 3).unwrap();

        // Not every run races visibly; a handful of attempts is enough
        // in practice. Divergence in any attempt proves the hazard.
        let mut diverged = false;
        for _ in 0..12 {
            let mut racy = original.clone();
            grayscale_racy(&mut racy, width, height, 3, 4).unwrap();
            if racy != reference {
                diverged = true;
                break;
            }
        }

        assert!(
            diverged,
            "unsynchronized grayscale never diverged from the reference"
        );
    }

    #[test]
    fn rejects_zero_workers() {
        let mut data = gradient(4, 4);
        assert!(grayscale_racy(&mut data, 4, 4, 3, 0).is_err());
    }
}
