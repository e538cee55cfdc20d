use alloc::vec;
use alloc::vec::Vec;

use crate::key::KeySet;

/// Marks the members of one longest strictly increasing subsequence of `seq`.
///
/// `O(n log n)` patience sorting with predecessor links. Used by `sync` to pick the survivors
/// that stay put; every unmarked survivor gets a move.
pub(crate) fn lis_mask(seq: &[usize]) -> Vec<bool> {
    let mut mask = vec![false; seq.len()];
    if seq.is_empty() {
        return mask;
    }

    // tails[k] = index (into seq) of the smallest tail of an increasing run of length k + 1.
    let mut tails: Vec<usize> = Vec::with_capacity(seq.len());
    let mut prev: Vec<Option<usize>> = vec![None; seq.len()];

    for (i, &value) in seq.iter().enumerate() {
        let k = tails.partition_point(|&t| seq[t] < value);
        if k > 0 {
            prev[i] = Some(tails[k - 1]);
        }
        if k == tails.len() {
            tails.push(i);
        } else {
            tails[k] = i;
        }
    }

    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        mask[i] = true;
        cursor = prev[i];
    }
    mask
}

/// Returns the first id that appears twice.
pub(crate) fn first_duplicate<'a>(ids: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = KeySet::new();
    ids.into_iter().find(|&id| !seen.insert(id))
}

/// Groups ascending indices into `(start, count)` runs of consecutive values.
pub(crate) fn runs(ascending: &[usize]) -> Vec<(usize, usize)> {
    let mut out: Vec<(usize, usize)> = Vec::new();
    for &index in ascending {
        debug_assert!(
            out.last().is_none_or(|&(start, count)| index >= start + count),
            "runs: indexes must be ascending and unique"
        );
        match out.last_mut() {
            Some((start, count)) if *start + *count == index => *count += 1,
            _ => out.push((index, 1)),
        }
    }
    out
}
