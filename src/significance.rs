//! Two-sample z-test used to decide whether the leading arm is conclusively
//! better than the runner-up.

use std::f64::consts::SQRT_2;

/// Complementary error function.
///
/// Chebyshev fit with fractional error below 1.2e-7 everywhere.
fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -z * z - 1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87 + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    let ans = t * poly.exp();
    if x >= 0.0 { ans } else { 2.0 - ans }
}

/// Cumulative distribution function of the standard normal distribution.
pub fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Result of comparing a baseline arm (index 0) with a challenger (index 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZTest {
    /// Standardised difference `(r1 - r0) / se`
    pub z_score: f64,
    /// One-sided p-value `Φ(-|z|)`
    pub p_value: f64,
}

impl ZTest {
    /// Runs the test on two reward rates and their trial counts.
    ///
    /// The per-arm standard error is `sqrt(r_i * (r_0 + r_1 - r_i) / n_i)`,
    /// taken as zero for arms without trials. A zero pooled error yields a
    /// zero z-score and therefore a p-value of one half.
    pub fn new(rewards: [f64; 2], counts: [i64; 2]) -> Self {
        let total: f64 = rewards.iter().sum();

        let standard_error = |r: f64, n: i64| {
            if n <= 0 {
                0.0
            } else {
                // Clamp guards against tiny negative products from rounding.
                (r * (total - r) / n as f64).max(0.0).sqrt()
            }
        };

        let se0 = standard_error(rewards[0], counts[0]);
        let se1 = standard_error(rewards[1], counts[1]);
        let se_diff = (se0 * se0 + se1 * se1).sqrt();

        let z_score = if se_diff == 0.0 {
            0.0
        } else {
            (rewards[1] - rewards[0]) / se_diff
        };

        Self {
            z_score,
            p_value: standard_normal_cdf(-z_score.abs()),
        }
    }

    /// True when the p-value does not exceed `threshold`.
    pub fn is_significant(&self, threshold: f64) -> bool {
        self.p_value <= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normal_cdf_known_values() {
        assert_abs_diff_eq!(standard_normal_cdf(0.0), 0.5, epsilon = 1e-7);
        assert_abs_diff_eq!(standard_normal_cdf(1.959_964), 0.975, epsilon = 1e-6);
        assert_abs_diff_eq!(standard_normal_cdf(-1.644_854), 0.05, epsilon = 1e-6);
        assert_abs_diff_eq!(standard_normal_cdf(1.0), 0.841_344_746, epsilon = 1e-6);
        assert!(standard_normal_cdf(-40.0) < 1e-12);
        assert_abs_diff_eq!(standard_normal_cdf(40.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_cdf_symmetry() {
        for x in [0.1, 0.5, 1.3, 2.7, 4.0] {
            assert_abs_diff_eq!(
                standard_normal_cdf(x) + standard_normal_cdf(-x),
                1.0,
                epsilon = 1e-7
            );
        }
    }

    #[test]
    fn test_identical_rates_not_significant() {
        let test = ZTest::new([0.5, 0.5], [10_000, 10_000]);
        assert_eq!(test.z_score, 0.0);
        assert_abs_diff_eq!(test.p_value, 0.5, epsilon = 1e-7);
        assert!(!test.is_significant(0.05));
    }

    #[test]
    fn test_large_gap_is_significant() {
        let test = ZTest::new([0.1, 0.9], [100, 100]);
        // se0 = se1 = 0.03, so z = 0.8 / (0.03 * sqrt(2))
        assert_abs_diff_eq!(test.z_score, 0.8 / (0.03 * SQRT_2), epsilon = 1e-9);
        assert!(test.p_value < 1e-10);
        assert!(test.is_significant(0.05));
    }

    #[test]
    fn test_order_only_flips_sign() {
        let forward = ZTest::new([0.3, 0.6], [50, 40]);
        let backward = ZTest::new([0.6, 0.3], [40, 50]);
        assert_abs_diff_eq!(forward.z_score, -backward.z_score, epsilon = 1e-12);
        assert_abs_diff_eq!(forward.p_value, backward.p_value, epsilon = 1e-12);
    }

    #[test]
    fn test_untried_arms_have_zero_error() {
        let test = ZTest::new([0.0, 0.0], [0, 0]);
        assert_eq!(test.z_score, 0.0);
        assert!(!test.is_significant(0.05));
    }
}
