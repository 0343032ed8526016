use std::f64::consts::PI;

use super::ObjectiveFunction;

/// Steepness of the valleys.
const M: f64 = 10.0;

/// Michalewicz function.
///
/// <https://www.sfu.ca/~ssurjano/michal.html>
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Michalewicz;

impl ObjectiveFunction for Michalewicz {
    fn calculate(&self, input: &[f64]) -> f64 {
        let sum = input.iter().zip(1u32..).fold(0.0, |acc, (&xi, i)| {
            acc + xi.sin() * (f64::from(i) * xi * xi / PI).sin().powf(2.0 * M)
        });

        -sum
    }

    fn minimum(&self) -> f64 {
        0.0
    }

    fn maximum(&self) -> f64 {
        PI
    }

    fn title(&self) -> &str {
        "Michalewicz"
    }
}
