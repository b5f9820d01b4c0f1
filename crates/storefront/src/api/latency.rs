//! Artificial round-trip delays for the mock API.

use std::time::Duration;

/// Fixed delay applied before each mock API operation.
///
/// The delays only exist so loading states are observable; there is no
/// cancellation, retry or timeout policy attached to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub products: Duration,
    pub featured_products: Duration,
    pub product: Duration,
    pub categories: Duration,
    pub login: Duration,
    pub register: Duration,
}

impl LatencyProfile {
    /// No delay at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            products: Duration::ZERO,
            featured_products: Duration::ZERO,
            product: Duration::ZERO,
            categories: Duration::ZERO,
            login: Duration::ZERO,
            register: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            products: Duration::from_millis(500),
            featured_products: Duration::from_millis(500),
            product: Duration::from_millis(300),
            categories: Duration::from_millis(300),
            login: Duration::from_millis(800),
            register: Duration::from_millis(1000),
        }
    }
}

/// Sleep for `delay`, skipping the timer entirely when it is zero.
pub(crate) async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
