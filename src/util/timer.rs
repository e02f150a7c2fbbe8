//! One-shot delays used between a success alert and the navigation after it.

use std::future::Future;

/// Source of one-shot delays.
pub trait Timer {
    fn sleep(&self, millis: u32) -> impl Future<Output = ()>;
}

/// `setTimeout`-backed timer. Resolves immediately outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, millis: u32) -> impl Future<Output = ()> {
        async move {
            #[cfg(feature = "hydrate")]
            gloo_timers::future::TimeoutFuture::new(millis).await;
            #[cfg(not(feature = "hydrate"))]
            let _ = millis;
        }
    }
}
