//! Nearest-neighbor queries over the body collection.
//!
//! Used by rendering hosts to draw connective edges between nearby bodies.
//! Brute force is plenty at the populations this simulation targets, so
//! there is no spatial index to keep in sync with the physics state.

use crate::body::Body;

/// Finds the `k` bodies closest to `bodies[index]`, excluding itself.
///
/// Returns `(index, distance)` pairs sorted nearest first. Ties keep
/// insertion order. Out-of-range `index` or `k == 0` yields an empty vec;
/// `k` larger than the population returns every other body.
///
/// Each endpoint of a close pair enumerates the other, so a caller drawing
/// undirected edges is expected to dedup the two directions itself.
pub fn k_nearest(bodies: &[Body], index: usize, k: usize) -> Vec<(usize, f32)> {
    let Some(origin) = bodies.get(index) else {
        return Vec::new();
    };

    let mut distances: Vec<(usize, f32)> = bodies
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .map(|(j, b)| (j, b.position.distance(origin.position)))
        .collect();

    distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
    distances.truncate(k);
    distances
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::ZERO, 0.0)
    }

    fn fixture() -> Vec<Body> {
        vec![
            body_at(0.0, 0.0),
            body_at(10.0, 0.0),
            body_at(0.0, 20.0),
            body_at(30.0, 40.0),
            body_at(-5.0, -5.0),
        ]
    }

    #[test]
    fn test_two_nearest_match_direct_distances() {
        let bodies = fixture();

        let nearest = k_nearest(&bodies, 0, 2);

        // From the origin: body 4 at ~7.07, body 1 at 10, body 2 at 20,
        // body 3 at 50.
        assert_eq!(nearest.len(), 2);
        assert_eq!(nearest[0].0, 4);
        assert!((nearest[0].1 - 50.0f32.sqrt()).abs() < 1e-5);
        assert_eq!(nearest[1].0, 1);
        assert!((nearest[1].1 - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_matches_brute_force_reference() {
        let bodies = fixture();

        for index in 0..bodies.len() {
            let got = k_nearest(&bodies, index, 3);

            let mut expected: Vec<(usize, f32)> = (0..bodies.len())
                .filter(|&j| j != index)
                .map(|j| (j, bodies[j].position.distance(bodies[index].position)))
                .collect();
            expected.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
            expected.truncate(3);

            assert_eq!(got, expected, "mismatch for body {}", index);
        }
    }

    #[test]
    fn test_excludes_self() {
        let bodies = fixture();

        let nearest = k_nearest(&bodies, 2, bodies.len());
        assert!(nearest.iter().all(|&(j, _)| j != 2));
        assert_eq!(nearest.len(), bodies.len() - 1);
    }

    #[test]
    fn test_k_zero_is_empty() {
        let bodies = fixture();
        assert!(k_nearest(&bodies, 0, 0).is_empty());
    }

    #[test]
    fn test_out_of_range_index_is_empty() {
        let bodies = fixture();
        assert!(k_nearest(&bodies, 99, 2).is_empty());
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let bodies = vec![
            body_at(0.0, 0.0),
            body_at(10.0, 0.0),
            body_at(-10.0, 0.0),
            body_at(0.0, 10.0),
        ];

        let nearest = k_nearest(&bodies, 0, 3);
        let order: Vec<usize> = nearest.iter().map(|&(j, _)| j).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }
}
