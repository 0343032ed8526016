use std::f64::consts::PI;

use super::ObjectiveFunction;

/// Norwegian function.
///
/// `-prod(cos(pi * x^3) * (99 + x) / 100)`, minimum `-1` at every component equal to one
/// for an even number of components.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Norwegian;

impl ObjectiveFunction for Norwegian {
    fn calculate(&self, input: &[f64]) -> f64 {
        let product = input
            .iter()
            .fold(1.0, |acc, &xi| acc * ((PI * xi * xi * xi).cos() * (99.0 + xi) / 100.0));

        -product
    }

    fn minimum(&self) -> f64 {
        -1.1
    }

    fn maximum(&self) -> f64 {
        1.1
    }

    fn title(&self) -> &str {
        "Norwegian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        assert!((Norwegian.calculate(&[0.0; 3]) + 0.99f64.powi(3)).abs() < 1e-15);
    }

    #[test]
    fn test_ones_are_optimum() {
        assert_eq!(Norwegian.calculate(&[1.0, 1.0]), -1.0);
        assert_eq!(Norwegian.calculate(&[1.0; 4]), -1.0);
    }
}
