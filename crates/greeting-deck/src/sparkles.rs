//! Background sparkles floating behind the page.

use rand::Rng;

/// Number of sparkles drawn per mount.
pub const SPARKLE_COUNT: usize = 50;

/// Placement and timing of one sparkle.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    /// Horizontal position in percent, in `[0, 100)`.
    pub left_pct: f64,
    /// Vertical position in percent, in `[0, 100)`.
    pub top_pct: f64,
    /// Animation start delay in seconds, in `[0, 5)`.
    pub delay_s: f64,
    /// Animation duration in seconds, in `[5, 15)`.
    pub duration_s: f64,
}

impl Sparkle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            delay_s: rng.random_range(0.0..5.0),
            duration_s: 5.0 + rng.random_range(0.0..10.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s;",
            self.left_pct, self.top_pct, self.delay_s, self.duration_s
        )
    }
}

/// Scatters a fresh field of sparkles.
pub fn scatter<R: Rng>(rng: &mut R) -> Vec<Sparkle> {
    (0..SPARKLE_COUNT).map(|_| Sparkle::random(rng)).collect()
}
