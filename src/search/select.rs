//! Move selection over evaluated root children.
//!
//! The minimax value ranks first. Among equally valued children the
//! selector prefers the shortest winning path and then the earliest
//! resolution, narrowing a candidate set step by step and drawing
//! uniformly from whatever survives.

use super::eval::{Evaluation, Horizon};
use crate::core::{GameRng, Move, Player};
use crate::error::{Error, Result};

/// Indices of `items` for which `keep` holds.
fn indices_where<T>(items: &[T], keep: impl Fn(&T) -> bool) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| keep(*item))
        .map(|(i, _)| i)
        .collect()
}

fn all_equal<T: PartialEq>(items: impl IntoIterator<Item = T>) -> bool {
    let mut iter = items.into_iter();
    match iter.next() {
        None => true,
        Some(first) => iter.all(|x| x == first),
    }
}

fn intersect(a: &[usize], b: &[usize]) -> Vec<usize> {
    a.iter().copied().filter(|i| b.contains(i)).collect()
}

/// Final candidate set of the tie-break cascade, as indices into `evals`.
///
/// Never empty on success.
pub fn candidates(
    evals: &[Evaluation],
    searcher: Player,
    maximizing: Player,
) -> Result<Vec<usize>> {
    let best_path = evals
        .iter()
        .map(|e| e.path_length)
        .min()
        .ok_or_else(|| Error::InvalidState("move selection over zero children".into()))?;
    let best_horizon = evals.iter().map(|e| e.horizon).max().unwrap_or(Horizon::CutOff);

    let on_path = indices_where(evals, |e| e.path_length == best_path);
    let on_horizon = indices_where(evals, |e| e.horizon == best_horizon);

    if all_equal(evals.iter().map(|e| e.value)) {
        if all_equal(evals.iter().map(|e| e.horizon)) {
            return Ok(on_path);
        }
        let narrowed = intersect(&on_path, &on_horizon);
        return Ok(if narrowed.is_empty() { on_path } else { narrowed });
    }

    let values = evals.iter().map(|e| e.value);
    let best_value = if searcher == maximizing {
        values.max()
    } else {
        values.min()
    };
    let best_value = best_value.unwrap_or_default();

    let on_value = indices_where(evals, |e| e.value == best_value);
    let cascade = [
        intersect(&intersect(&on_value, &on_path), &on_horizon),
        intersect(&on_value, &on_horizon),
        intersect(&on_value, &on_path),
    ];

    Ok(cascade
        .into_iter()
        .find(|set| !set.is_empty())
        .unwrap_or(on_value))
}

/// Pick the move to play from the root children's evaluations.
///
/// `moves[i]` is the move of the child evaluated as `evals[i]`.
pub fn select_move(
    moves: &[Move],
    evals: &[Evaluation],
    searcher: Player,
    maximizing: Player,
    rng: &mut GameRng,
) -> Result<Move> {
    if moves.len() != evals.len() {
        return Err(Error::InvalidState(format!(
            "{} moves but {} evaluations",
            moves.len(),
            evals.len()
        )));
    }

    let pool = candidates(evals, searcher, maximizing)?;
    let index = rng
        .choose(&pool)
        .copied()
        .ok_or_else(|| Error::InvalidState("empty candidate set".into()))?;
    Ok(moves[index])
}
