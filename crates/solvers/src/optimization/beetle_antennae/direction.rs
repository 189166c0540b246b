use rand::Rng;

/// Samples a random direction of (nearly) unit length.
///
/// Each component is drawn uniformly from `[-1, 1]`, then the vector is
/// divided by its Euclidean norm plus `eps`.
pub(super) fn sample<R: Rng, const N: usize>(rng: &mut R, eps: f64) -> [f64; N] {
    let raw: [f64; N] = std::array::from_fn(|_| rng.random_range(-1.0..=1.0));
    normalize(raw, eps)
}

/// Scales `v` by `1 / (‖v‖₂ + eps)`.
///
/// With `eps > 0` a zero vector stays zero instead of producing NaN.
/// The result is never longer than one, and falls short of one by
/// `eps / (‖v‖₂ + eps)`, so short inputs come out slightly shorter.
pub(super) fn normalize<const N: usize>(v: [f64; N], eps: f64) -> [f64; N] {
    let norm = v.iter().map(|c| c * c).sum::<f64>().sqrt();
    let scale = norm + eps;
    v.map(|c| c / scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    // Rounding slack on top of the analytic shortfall.
    const ROUNDING: f64 = 1e-14;

    fn norm<const N: usize>(v: &[f64; N]) -> f64 {
        v.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    #[test]
    fn sampled_directions_have_nearly_unit_length() {
        let eps = 1e-8;
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..1000 {
            let raw: [f64; 5] = std::array::from_fn(|_| rng.random_range(-1.0..=1.0));
            let dir = normalize(raw, eps);
            let shortfall = 1.0 - norm(&dir);

            assert!(norm(&dir) <= 1.0, "norm was {}", norm(&dir));
            assert!(shortfall <= eps / norm(&raw) + ROUNDING, "norm was {}", norm(&dir));
        }
    }

    #[test]
    fn unit_input_is_within_eps_of_unit_length() {
        let eps = 1e-8;
        let dir = normalize([0.6, 0.8], eps);

        assert!(1.0 - norm(&dir) <= eps + ROUNDING);
    }

    #[test]
    fn components_stay_within_unit_interval() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..1000 {
            let dir: [f64; 3] = sample(&mut rng, 1e-8);
            assert!(dir.iter().all(|c| (-1.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn eps_guards_the_zero_vector() {
        let dir = normalize([0.0; 4], 1e-8);
        assert_eq!(dir, [0.0; 4]);
    }

    #[test]
    fn one_dimension_is_a_sign() {
        let dir = normalize([-0.3], 0.0);
        assert_relative_eq!(dir[0], -1.0);
    }
}
