//! Normally distributed values derived from uniform draws.

use std::f64::consts::TAU;

use crate::uniform::convert::Uniform;

/// Normal-distribution draws, available on every byte producer.
///
/// Built with the Box–Muller transform on top of [`Uniform::next_f64`];
/// no extra state is required.
pub trait Normal: Uniform {
    /// Draws a value from the standard normal distribution.
    fn next_f64_standard_normal(&mut self) -> f64 {
        let mut u1 = self.next_f64();

        // ln(0) is -inf; redraw the open-interval coordinate.
        while u1 == 0.0 {
            u1 = self.next_f64();
        }

        let u2 = self.next_f64();

        (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }

    /// Draws a value from the normal distribution with the given mean and
    /// variance.
    fn next_f64_normal(&mut self, mean: f64, variance: f64) -> f64 {
        self.next_f64_standard_normal() * variance + mean
    }
}

impl<T: Uniform + ?Sized> Normal for T {}
