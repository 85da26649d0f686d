//! Temperature-scaled Gaussian neighbor generation.
//!
//! Each coordinate moves by a zero-mean normal draw whose standard
//! deviation is the dimension's domain width times `step_scale`. The runner
//! passes the current temperature as the scale, so hot phases take wide
//! exploratory jumps and cold phases take fine local steps.

use super::config::Bound;
use super::types::Point;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Returns a perturbed copy of `solution`, clamped into `bounds`.
///
/// Coordinates that overshoot collapse onto the violated bound.
/// `step_scale == 0.0` returns an unchanged copy.
///
/// `solution` and `bounds` must have the same length; extra coordinates on
/// either side are ignored.
pub fn generate<R: Rng + ?Sized>(
    solution: &[f64],
    bounds: &[Bound],
    step_scale: f64,
    rng: &mut R,
) -> Point {
    solution
        .iter()
        .zip(bounds)
        .map(|(&x, bound)| {
            let step_size = bound.width() * step_scale;
            let z: f64 = StandardNormal.sample(&mut *rng);
            bound.clamp(x + step_size * z)
        })
        .collect()
}

/// Draws a point uniformly from the box, one independent draw per dimension.
pub fn uniform_point<R: Rng + ?Sized>(bounds: &[Bound], rng: &mut R) -> Point {
    bounds
        .iter()
        .map(|b| rng.random_range(b.low..=b.high))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bounds_1d(low: f64, high: f64) -> Vec<Bound> {
        vec![Bound::new(low, high)]
    }

    #[test]
    fn test_zero_scale_does_not_move() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = vec![Bound::new(-1.0, 1.0), Bound::new(0.0, 100.0)];
        let current = vec![0.3, 42.0];
        let next = generate(&current, &bounds, 0.0, &mut rng);
        assert_eq!(next, current);
    }

    #[test]
    fn test_input_left_untouched() {
        let mut rng = StdRng::seed_from_u64(2);
        let bounds = bounds_1d(-10.0, 10.0);
        let current = vec![1.0];
        let next = generate(&current, &bounds, 0.5, &mut rng);
        assert_eq!(current, vec![1.0]);
        assert_ne!(next, current);
    }

    #[test]
    fn test_huge_scale_collapses_to_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = bounds_1d(-1.0, 2.0);
        let mut on_boundary = 0;
        for _ in 0..1000 {
            let next = generate(&[0.5], &bounds, 1e6, &mut rng);
            if next[0] == -1.0 || next[0] == 2.0 {
                on_boundary += 1;
            }
        }
        assert!(on_boundary > 990, "only {on_boundary} clamped draws");
    }

    #[test]
    fn test_step_scales_with_domain_width() {
        let mut rng = StdRng::seed_from_u64(4);
        // Widths 2 and 2000 at scale 0.01: sd 0.02 and 20, far from the walls.
        let bounds = vec![Bound::new(-1.0, 1.0), Bound::new(-1000.0, 1000.0)];
        let n = 5000;
        let mut sq = [0.0f64; 2];
        for _ in 0..n {
            let next = generate(&[0.0, 0.0], &bounds, 0.01, &mut rng);
            sq[0] += next[0] * next[0];
            sq[1] += next[1] * next[1];
        }
        let sd0 = (sq[0] / n as f64).sqrt();
        let sd1 = (sq[1] / n as f64).sqrt();
        assert!((sd0 - 0.02).abs() < 0.001, "sd0 = {sd0}");
        assert!((sd1 - 20.0).abs() < 1.0, "sd1 = {sd1}");
    }

    #[test]
    fn test_degenerate_dimension_is_constant() {
        let mut rng = StdRng::seed_from_u64(5);
        let bounds = vec![Bound::new(4.0, 4.0), Bound::new(0.0, 1.0)];
        for _ in 0..100 {
            let next = generate(&[4.0, 0.5], &bounds, 10.0, &mut rng);
            assert_eq!(next[0], 4.0);
        }
        let start = uniform_point(&bounds, &mut rng);
        assert_eq!(start[0], 4.0);
    }

    #[test]
    fn test_uniform_point_in_bounds() {
        let mut rng = StdRng::seed_from_u64(6);
        let bounds = vec![Bound::new(-150.0, 150.0), Bound::new(0.0, 1e-3)];
        for _ in 0..1000 {
            let p = uniform_point(&bounds, &mut rng);
            assert_eq!(p.len(), 2);
            assert!(bounds.iter().zip(&p).all(|(b, &x)| b.contains(x)));
        }
    }

    proptest! {
        #[test]
        fn prop_neighbor_stays_in_bounds(
            dims in prop::collection::vec((-1e3f64..1e3, 0.0f64..1e3, 0.0f64..1.0), 1..6),
            scale in 0.0f64..1e4,
            seed in any::<u64>(),
        ) {
            let bounds: Vec<Bound> = dims
                .iter()
                .map(|&(low, width, _)| Bound::new(low, low + width))
                .collect();
            let current: Vec<f64> = dims
                .iter()
                .map(|&(low, width, frac)| low + width * frac)
                .collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let next = generate(&current, &bounds, scale, &mut rng);
            prop_assert_eq!(next.len(), bounds.len());
            for (b, &x) in bounds.iter().zip(&next) {
                prop_assert!(b.contains(x), "{} outside [{}, {}]", x, b.low, b.high);
            }
        }
    }
}
