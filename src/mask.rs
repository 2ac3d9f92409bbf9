//! Data masking and the evaluation of masked symbols.

use tracing::trace;

use crate::matrix::Matrix;
use crate::version::{Mask, Version};

const PENALTY_N2: usize = 3;
const PENALTY_N3: usize = 40;
const PENALTY_N4: usize = 10;

const FINDER_LIKE: [bool; 7] = [true, false, true, true, true, false, true];

// Micro QR Code mask 0..3 use the QR Code patterns 1, 4, 6 and 7
const MICRO_PATTERNS: [u8; 4] = [1, 4, 6, 7];

/// Returns whether the data module in row `i` and column `j` is inverted by
/// the QR Code mask pattern.
fn mask_condition(pattern: u8, i: usize, j: usize) -> bool {
    match pattern {
        0 => (i + j) % 2 == 0,
        1 => i % 2 == 0,
        2 => j % 3 == 0,
        3 => (i + j) % 3 == 0,
        4 => (i / 2 + j / 3) % 2 == 0,
        5 => (i * j) % 2 + (i * j) % 3 == 0,
        6 => ((i * j) % 2 + (i * j) % 3) % 2 == 0,
        7 => ((i + j) % 2 + (i * j) % 3) % 2 == 0,
        _ => unreachable!("mask pattern {}", pattern),
    }
}

fn pattern_of(mask: Mask, is_micro: bool) -> u8 {
    if is_micro {
        MICRO_PATTERNS[usize::from(mask.value())]
    } else {
        mask.value()
    }
}

/// Inverts the data modules selected by `mask`. Applying a mask twice
/// restores the matrix.
pub(crate) fn apply_mask(matrix: &mut Matrix, mask: Mask, is_micro: bool) {
    let pattern = pattern_of(mask, is_micro);
    let size = matrix.size();
    for (idx, module) in matrix.modules_mut().iter_mut().enumerate() {
        if module.is_data() && mask_condition(pattern, idx / size, idx % size) {
            *module = module.toggled();
        }
    }
}

/// Applies `proposed` or, if it is `None`, the best scoring mask to the
/// matrix and returns the mask used.
pub(crate) fn find_and_apply_best_mask(matrix: &mut Matrix, version: Version, proposed: Option<Mask>) -> Mask {
    let is_micro = version.is_micro();
    if let Some(mask) = proposed {
        apply_mask(matrix, mask, is_micro);
        return mask;
    }
    let count = if is_micro { 4 } else { 8 };
    let mut best: Option<(Mask, usize)> = None;
    for value in 0..count {
        let mask = Mask::from_index(value);
        apply_mask(matrix, mask, is_micro);
        let grid: Vec<bool> = matrix.modules().iter().map(|m| m.is_dark()).collect();
        let score = if is_micro {
            evaluate_micro_mask(&grid, matrix.size())
        } else {
            evaluate_mask(&grid, matrix.size())
        };
        trace!(mask = value, score, "evaluated mask");
        let better = match best {
            None => true,
            // Micro QR Codes prefer the highest score
            Some((_, best_score)) if is_micro => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if better {
            best = Some((mask, score));
        }
        apply_mask(matrix, mask, is_micro);
    }
    let mask = best.map_or(Mask::from_index(0), |(mask, _)| mask);
    apply_mask(matrix, mask, is_micro);
    mask
}

/// Penalty score of a QR Code symbol; lower is better.
pub(crate) fn evaluate_mask(grid: &[bool], size: usize) -> usize {
    score_n1(grid, size) + score_n2(grid, size) + score_n3(grid, size) + score_n4(grid, size)
}

/// Adjacent modules of the same color: runs of 5 + i modules score 3 + i.
fn score_n1(grid: &[bool], size: usize) -> usize {
    let mut score = 0;
    for i in 0..size {
        score += run_penalty((0..size).map(|j| grid[i * size + j]));
        score += run_penalty((0..size).map(|j| grid[j * size + i]));
    }
    score
}

fn run_penalty(line: impl Iterator<Item = bool>) -> usize {
    let mut score = 0;
    let mut prev = None;
    let mut run = 0;
    for bit in line {
        if prev == Some(bit) {
            run += 1;
        } else {
            if run >= 5 {
                score += run - 2;
            }
            run = 1;
            prev = Some(bit);
        }
    }
    if run >= 5 {
        score += run - 2;
    }
    score
}

/// 2x2 blocks of the same color.
fn score_n2(grid: &[bool], size: usize) -> usize {
    let mut blocks = 0;
    for i in 0..size.saturating_sub(1) {
        for j in 0..size - 1 {
            let bit = grid[i * size + j];
            if bit == grid[i * size + j + 1] && bit == grid[(i + 1) * size + j] && bit == grid[(i + 1) * size + j + 1] {
                blocks += 1;
            }
        }
    }
    blocks * PENALTY_N2
}

/// 1:1:3:1:1 patterns preceded or followed by four light modules.
fn score_n3(grid: &[bool], size: usize) -> usize {
    let mut hits = 0;
    let mut line = vec![false; size];
    for i in 0..size {
        line.copy_from_slice(&grid[i * size..(i + 1) * size]);
        hits += finder_like_occurrences(&line);
        for (j, bit) in line.iter_mut().enumerate() {
            *bit = grid[j * size + i];
        }
        hits += finder_like_occurrences(&line);
    }
    hits * PENALTY_N3
}

fn finder_like_occurrences(line: &[bool]) -> usize {
    let all_light = |start: usize, end: usize| line[start..end.min(line.len())].iter().all(|&b| !b);
    let mut count = 0;
    let mut from = 0;
    while let Some(pos) = find_from(line, from) {
        if all_light(pos.saturating_sub(4), pos) || all_light(pos + 7, pos + 11) {
            count += 1;
            from = pos + 7;
        } else {
            from = pos + 4;
        }
    }
    count
}

fn find_from(line: &[bool], from: usize) -> Option<usize> {
    if from >= line.len() {
        return None;
    }
    line[from..]
        .windows(FINDER_LIKE.len())
        .position(|w| w == &FINDER_LIKE[..])
        .map(|pos| pos + from)
}

/// Deviation of the dark module proportion from 50%, in steps of 5%.
fn score_n4(grid: &[bool], size: usize) -> usize {
    let dark = grid.iter().filter(|&&b| b).count();
    let total = size * size;
    let k = (dark * 2).abs_diff(total) * 10 / total;
    k * PENALTY_N4
}

/// Score of a Micro QR Code symbol, computed from the dark modules along the
/// right and the lower edge; higher is better.
pub(crate) fn evaluate_micro_mask(grid: &[bool], size: usize) -> usize {
    let sum1 = (1..size).filter(|&i| grid[i * size + size - 1]).count();
    let sum2 = (1..size).filter(|&j| grid[(size - 1) * size + j]).count();
    if sum1 <= sum2 {
        sum1 * 16 + sum2
    } else {
        sum2 * 16 + sum1
    }
}
