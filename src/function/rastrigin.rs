use std::f64::consts::PI;

use super::ObjectiveFunction;

const A: f64 = 10.0;

/// Rastrigin function.
///
/// <https://en.wikipedia.org/wiki/Rastrigin_function>
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Rastrigin;

impl ObjectiveFunction for Rastrigin {
    fn calculate(&self, input: &[f64]) -> f64 {
        let n = input.len() as f64;
        let sum: f64 = input
            .iter()
            .map(|&xi| xi * xi - A * (2.0 * PI * xi).cos())
            .sum();

        A * n + sum
    }

    fn minimum(&self) -> f64 {
        -5.12
    }

    fn maximum(&self) -> f64 {
        5.12
    }

    fn title(&self) -> &str {
        "Rastrigin"
    }
}
