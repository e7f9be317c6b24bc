//! Session countdown.

use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::{self, Instant, Sleep};

/// The single live countdown of a session.
///
/// Arming replaces the previous countdown by value, so a superseded timer can
/// never be observed. An unarmed deadline never fires.
#[derive(Debug, Default)]
pub struct Deadline {
    countdown: Option<Countdown>,
}

#[derive(Debug)]
struct Countdown {
    duration: Duration,
    armed_at: Instant,
    expires_at: Instant,
    sleep: Pin<Box<Sleep>>,
}

impl Deadline {
    pub fn unarmed() -> Self {
        Self::default()
    }

    /// Start a countdown of `duration` from now, discarding any previous one.
    pub fn arm(&mut self, duration: Duration) {
        let armed_at = Instant::now();
        let expires_at = armed_at + duration;
        self.countdown = Some(Countdown {
            duration,
            armed_at,
            expires_at,
            sleep: Box::pin(time::sleep_until(expires_at)),
        });
    }

    pub fn is_armed(&self) -> bool {
        self.countdown.is_some()
    }

    /// Time left on the live countdown, or `None` when unarmed.
    pub fn remaining(&self) -> Option<Duration> {
        self.countdown
            .as_ref()
            .map(|c| c.duration.saturating_sub(c.armed_at.elapsed()))
    }

    /// Resolves once the live countdown expires.
    ///
    /// Cancel-safe: dropping the returned future leaves the countdown ticking.
    pub async fn fired(&mut self) {
        match &mut self.countdown {
            // The timer wheel rounds up to the next millisecond; an already
            // expired countdown must win the very first poll.
            Some(countdown) if Instant::now() >= countdown.expires_at => {}
            Some(countdown) => countdown.sleep.as_mut().await,
            None => future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_zero_duration_fires_immediately() {
        let mut deadline = Deadline::unarmed();
        deadline.arm(Duration::ZERO);
        assert_eq!(deadline.remaining(), Some(Duration::ZERO));
        assert!(time::timeout(Duration::from_millis(1), deadline.fired())
            .await
            .is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_duration() {
        let mut deadline = Deadline::unarmed();
        deadline.arm(Duration::from_secs(10));

        assert!(time::timeout(Duration::from_secs(9), deadline.fired())
            .await
            .is_err());
        assert_eq!(deadline.remaining(), Some(Duration::from_secs(1)));
        assert!(time::timeout(Duration::from_secs(2), deadline.fired())
            .await
            .is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_supersedes_previous_countdown() {
        let mut deadline = Deadline::unarmed();
        deadline.arm(Duration::from_secs(10));
        time::advance(Duration::from_secs(8)).await;

        deadline.arm(Duration::from_secs(10));
        // The first countdown would have expired 2s from now.
        assert!(time::timeout(Duration::from_secs(9), deadline.fired())
            .await
            .is_err());
        assert!(time::timeout(Duration::from_secs(2), deadline.fired())
            .await
            .is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unarmed_never_fires() {
        let mut deadline = Deadline::unarmed();
        assert!(!deadline.is_armed());
        assert_eq!(deadline.remaining(), None);
        assert!(time::timeout(Duration::from_secs(3600), deadline.fired())
            .await
            .is_err());
    }
}
