//! Flow Module: Directed Walks as Edge Flows
//!
//! A directed traversal u → v over edge (a, b), a < b, contributes
//!
//!   +1 if (u, v) = (a, b)   (along the reference direction)
//!   −1 if (u, v) = (b, a)   (against it)
//!
//! at the edge's index. Repeated traversals accumulate, so the result is
//! the net signed count per edge. The encoding depends only on the
//! complex's edge index, not on the incidence matrices, yet uses the same
//! orientation: B1 · f is the net inflow at each vertex.

use ndarray::Array1;
use tracing::debug;

use crate::complex::SimplicialComplex;
use crate::error::{HodgeError, Result};

/// Encode directed traversals `(u, v)` as a signed edge-flow vector
pub fn encode_flow(complex: &SimplicialComplex, traversals: &[(usize, usize)]) -> Result<Array1<i32>> {
    let mut flow = Array1::<i32>::zeros(complex.n_edges());

    for &(u, v) in traversals {
        let (index, sign) = complex.resolve_traversal(u, v)?;
        flow[index] += sign;
    }

    debug!(
        n_traversals = traversals.len(),
        support = flow.iter().filter(|&&x| x != 0).count(),
        "encoded edge flow"
    );

    Ok(flow)
}

/// Encode loosely-shaped traversal entries; each must be exactly a pair
pub fn encode_raw_flow<S: AsRef<[usize]>>(
    complex: &SimplicialComplex,
    entries: &[S],
) -> Result<Array1<i32>> {
    let traversals = entries
        .iter()
        .map(|entry| match entry.as_ref() {
            &[u, v] => Ok((u, v)),
            other => Err(HodgeError::MalformedTraversal { len: other.len() }),
        })
        .collect::<Result<Vec<_>>>()?;

    encode_flow(complex, &traversals)
}

/// Consecutive vertex pairs of a walk `[v0, v1, ..., vk]`
pub fn walk_traversals(walk: &[usize]) -> Vec<(usize, usize)> {
    walk.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Encode a vertex walk as the flow of its consecutive steps
pub fn encode_walk(complex: &SimplicialComplex, walk: &[usize]) -> Result<Array1<i32>> {
    encode_flow(complex, &walk_traversals(walk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TriangleOrdering;
    use crate::incidence::IncidenceMatrices;
    use ndarray::array;

    fn triangle_complex() -> SimplicialComplex {
        SimplicialComplex::from_parts(
            3,
            &[(0, 1), (1, 2), (0, 2)],
            &[[0, 1, 2]],
            TriangleOrdering::Discovery,
        )
        .unwrap()
    }

    #[test]
    fn test_forward_and_reverse() {
        // (0,1) forward; (2,0) is the reverse of canonical (0,2)
        let flow = encode_flow(&triangle_complex(), &[(0, 1), (2, 0)]).unwrap();
        assert_eq!(flow, array![1, -1, 0]);
    }

    #[test]
    fn test_traversals_accumulate() {
        let complex = triangle_complex();
        let flow = encode_flow(&complex, &[(1, 2), (1, 2), (2, 1), (1, 2)]).unwrap();
        assert_eq!(flow, array![0, 0, 2]);

        let cancel = encode_flow(&complex, &[(0, 2), (2, 0)]).unwrap();
        assert_eq!(cancel, array![0, 0, 0]);
    }

    #[test]
    fn test_missing_edge_is_named() {
        let err = encode_flow(&triangle_complex(), &[(0, 1), (0, 3)]).unwrap_err();
        assert_eq!(err, HodgeError::EdgeNotInComplex { tail: 0, head: 3 });
    }

    #[test]
    fn test_raw_entries_must_be_pairs() {
        let complex = triangle_complex();
        let good: Vec<Vec<usize>> = vec![vec![0, 1], vec![2, 0]];
        assert_eq!(encode_raw_flow(&complex, &good).unwrap(), array![1, -1, 0]);

        let bad: Vec<Vec<usize>> = vec![vec![0, 1], vec![0, 1, 2]];
        assert_eq!(
            encode_raw_flow(&complex, &bad).unwrap_err(),
            HodgeError::MalformedTraversal { len: 3 }
        );
    }

    #[test]
    fn test_closed_walk_is_divergence_free() {
        let complex = triangle_complex();
        let flow = encode_walk(&complex, &[0, 1, 2, 0]).unwrap();
        assert_eq!(flow, array![1, -1, 1]);

        let inc = IncidenceMatrices::build(&complex, 2).unwrap();
        assert_eq!(inc.divergence(&flow).unwrap(), array![0, 0, 0]);
    }

    #[test]
    fn test_open_walk_divergence_marks_endpoints() {
        let complex = triangle_complex();
        let flow = encode_walk(&complex, &[0, 1, 2]).unwrap();
        let inc = IncidenceMatrices::build(&complex, 2).unwrap();
        // B1 · f: −1 where the walk starts, +1 where it ends
        assert_eq!(inc.divergence(&flow).unwrap(), array![-1, 0, 1]);
    }

    #[test]
    fn test_short_walks() {
        let complex = triangle_complex();
        assert_eq!(encode_walk(&complex, &[]).unwrap(), array![0, 0, 0]);
        assert_eq!(encode_walk(&complex, &[2]).unwrap(), array![0, 0, 0]);
    }
}
