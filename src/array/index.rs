/*
    Index resolution
*/

use crate::{FuzzyError, Result};

// Resolves a possibly negative index against `len`.
pub(crate) fn resolve(index: isize, len: usize) -> Result<usize> {
    let n = len as isize;
    let i = if index < 0 { index + n } else { index };
    if (0..n).contains(&i) {
        Ok(i as usize)
    } else {
        Err(FuzzyError::IndexOutOfRange { index, len })
    }
}

// Computes the positions selected by `start:stop:step`.
// Negative bounds count from the end, out-of-range bounds are clamped,
// and missing bounds default to the ends in the direction of `step`.
// Steps of any size are accepted; stepping past `isize` ends the slice.
pub(crate) fn slice_indices(
    len: usize,
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
) -> Result<Vec<usize>> {
    if step == 0 {
        return Err(FuzzyError::invalid("slice step cannot be zero"));
    }

    let n = len as isize;
    let adjust = |i: isize, lo: isize, hi: isize| {
        let i = if i < 0 { i + n } else { i };
        i.clamp(lo, hi)
    };

    let mut indices = Vec::new();
    if step > 0 {
        let mut i = start.map_or(0, |i| adjust(i, 0, n));
        let stop = stop.map_or(n, |i| adjust(i, 0, n));
        while i < stop {
            indices.push(i as usize);
            i = match i.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
    } else {
        // -1 marks "before the first element"
        let mut i = start.map_or(n - 1, |i| adjust(i, -1, n - 1));
        let stop = stop.map_or(-1, |i| adjust(i, -1, n - 1));
        while i > stop {
            indices.push(i as usize);
            i = match i.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
    }
    Ok(indices)
}
