//! Pruning a lattice to its minimal-weight paths.

use rustfst::algorithms::{connect, shortest_distance};
use rustfst::prelude::*;

use super::Lattice;
use crate::error::Result;

// Weights closer than this are considered equal, matching the comparison
// delta used by the shortest-distance computations.
const WEIGHT_DELTA: f32 = 1.0 / 1024.0;

fn approx_eq(a: &TropicalWeight, b: &TropicalWeight) -> bool {
    (*a.value() - *b.value()).abs() <= WEIGHT_DELTA
}

/// Keeps exactly the states and arcs lying on some minimal-weight accepting
/// path.
///
/// Forward and backward shortest distances are combined per arc: an arc (or
/// final weight) survives iff the best path through it equals the lattice's
/// best weight. The result is reconnected, so dead branches disappear.
/// Lattices with no accepting path are returned unchanged; the caller's
/// extraction step reports those.
pub(crate) fn prune_to_optimal(lattice: &Lattice) -> Result<Lattice> {
    let start = match lattice.start() {
        Some(start) => start,
        None => return Ok(lattice.clone()),
    };
    let forward: Vec<TropicalWeight> = shortest_distance(lattice, false)?;
    let backward: Vec<TropicalWeight> = shortest_distance(lattice, true)?;
    let best = match backward.get(start as usize) {
        Some(weight) if *weight != TropicalWeight::zero() => weight.clone(),
        _ => return Ok(lattice.clone()),
    };

    let mut pruned = Lattice::new();
    for _ in 0..lattice.num_states() {
        pruned.add_state();
    }
    pruned.set_start(start)?;
    for state in 0..lattice.num_states() {
        let state = state as StateId;
        let from_start = match forward.get(state as usize) {
            Some(weight) => weight.clone(),
            None => continue,
        };
        if let Some(final_weight) = lattice.final_weight(state)? {
            if approx_eq(&from_start.times(&final_weight)?, &best) {
                pruned.set_final(state, final_weight)?;
            }
        }
        for tr in lattice.get_trs(state)?.trs() {
            let to_final = match backward.get(tr.nextstate as usize) {
                Some(weight) => weight,
                None => continue,
            };
            let through = from_start.times(&tr.weight)?.times(to_final)?;
            if approx_eq(&through, &best) {
                pruned.add_tr(state, tr.clone())?;
            }
        }
    }
    connect(&mut pruned)?;
    Ok(pruned)
}

#[cfg(test)]
mod tests {
    use rustfst::Label;

    use super::*;

    fn label(byte: u8) -> Label {
        byte as Label
    }

    // start --a/1--> f  and  start --b/2--> f
    fn two_arc_lattice() -> Lattice {
        let mut fst = Lattice::new();
        let start = fst.add_state();
        let end = fst.add_state();
        fst.set_start(start).unwrap();
        fst.set_final(end, TropicalWeight::one()).unwrap();
        fst.add_tr(
            start,
            Tr::new(label(b'a'), label(b'a'), TropicalWeight::new(1.0), end),
        )
        .unwrap();
        fst.add_tr(
            start,
            Tr::new(label(b'b'), label(b'b'), TropicalWeight::new(2.0), end),
        )
        .unwrap();
        fst
    }

    #[test]
    fn drops_suboptimal_arcs() {
        let pruned = prune_to_optimal(&two_arc_lattice()).unwrap();
        let outputs: Vec<Vec<Label>> = pruned.paths_iter().map(|p| p.olabels.to_vec()).collect();
        assert_eq!(outputs, vec![vec![label(b'a')]]);
    }

    #[test]
    fn keeps_all_tied_arcs() {
        let mut fst = two_arc_lattice();
        let start = fst.start().unwrap();
        fst.add_tr(
            start,
            Tr::new(label(b'c'), label(b'c'), TropicalWeight::new(1.0), 1),
        )
        .unwrap();
        let pruned = prune_to_optimal(&fst).unwrap();
        assert_eq!(pruned.paths_iter().count(), 2);
    }

    #[test]
    fn multi_arc_path_weights_accumulate() {
        // "ab" costs 1.0 + 0.0, "cd" costs 0.5 + 0.6; "ab" wins.
        let mut fst = Lattice::new();
        let start = fst.add_state();
        let mid_ab = fst.add_state();
        let mid_cd = fst.add_state();
        let end = fst.add_state();
        fst.set_start(start).unwrap();
        fst.set_final(end, TropicalWeight::one()).unwrap();
        fst.add_tr(
            start,
            Tr::new(label(b'a'), label(b'a'), TropicalWeight::new(1.0), mid_ab),
        )
        .unwrap();
        fst.add_tr(
            mid_ab,
            Tr::new(label(b'b'), label(b'b'), TropicalWeight::one(), end),
        )
        .unwrap();
        fst.add_tr(
            start,
            Tr::new(label(b'c'), label(b'c'), TropicalWeight::new(0.5), mid_cd),
        )
        .unwrap();
        fst.add_tr(
            mid_cd,
            Tr::new(label(b'd'), label(b'd'), TropicalWeight::new(0.6), end),
        )
        .unwrap();

        let pruned = prune_to_optimal(&fst).unwrap();
        let outputs: Vec<Vec<Label>> = pruned.paths_iter().map(|p| p.olabels.to_vec()).collect();
        assert_eq!(outputs, vec![vec![label(b'a'), label(b'b')]]);
    }

    #[test]
    fn empty_lattice_passes_through() {
        let empty = Lattice::new();
        let pruned = prune_to_optimal(&empty).unwrap();
        assert_eq!(pruned.num_states(), 0);
    }
}
