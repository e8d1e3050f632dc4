//! Fixed-window request limiter keyed by `"<route>:<client ip>"`.
//!
//! State lives in memory, so limits are per process. A background sweeper drops
//! expired windows; see `spawn_sweeper`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use axum::http::HeaderMap;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::errors::AppError;

pub const ONE_DAY: Duration = Duration::from_secs(24 * 60 * 60);

// ────────────────────────────────────────────────────────────────────────────
// Clock
// ────────────────────────────────────────────────────────────────────────────

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock. Follows tokio's paused time in tests.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[cfg(test)]
pub struct ManualClock {
    start: Instant,
    elapsed: Mutex<Duration>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            elapsed: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut elapsed = self.elapsed.lock().unwrap_or_else(|e| e.into_inner());
        *elapsed += by;
    }
}

#[cfg(test)]
impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + *self.elapsed.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Policies and decisions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_requests: u32,
    pub window: Duration,
}

impl RateLimitPolicy {
    pub const fn per_day(max_requests: u32) -> Self {
        Self {
            max_requests,
            window: ONE_DAY,
        }
    }
}

/// Per-route policies for the interview endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimits {
    pub generate_questions: RateLimitPolicy,
    pub evaluate_answer: RateLimitPolicy,
    pub parse_resume: RateLimitPolicy,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            generate_questions: RateLimitPolicy::per_day(4),
            evaluate_answer: RateLimitPolicy::per_day(50),
            parse_resume: RateLimitPolicy::per_day(10),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub remaining: u32,
    /// Whole seconds until the window closes, rounded up.
    pub reset_in: u64,
}

// ────────────────────────────────────────────────────────────────────────────
// Limiter
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct Window {
    count: u32,
    resets_at: Instant,
}

pub struct RateLimiter {
    windows: Mutex<HashMap<String, Window>>,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Records one request against `key` and reports whether it may proceed.
    pub fn check(&self, key: &str, policy: RateLimitPolicy) -> RateLimitDecision {
        let now = self.clock.now();
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(window) = windows.get_mut(key) {
            if now < window.resets_at {
                let reset_in = ceil_secs(window.resets_at - now);
                if window.count >= policy.max_requests {
                    return RateLimitDecision {
                        allowed: false,
                        remaining: 0,
                        reset_in,
                    };
                }
                window.count += 1;
                return RateLimitDecision {
                    allowed: true,
                    remaining: policy.max_requests - window.count,
                    reset_in,
                };
            }
        }

        // no window yet, or the previous one has expired
        windows.insert(
            key.to_string(),
            Window {
                count: 1,
                resets_at: now + policy.window,
            },
        );
        RateLimitDecision {
            allowed: true,
            remaining: policy.max_requests.saturating_sub(1),
            reset_in: ceil_secs(policy.window),
        }
    }

    /// `check` for `<route>:<ip>`, turning a rejection into `AppError::RateLimited`.
    pub fn enforce(
        &self,
        route: &str,
        client_ip: &str,
        policy: RateLimitPolicy,
    ) -> Result<RateLimitDecision, AppError> {
        let key = format!("{route}:{client_ip}");
        let decision = self.check(&key, policy);
        if !decision.allowed {
            warn!("Rate limit exceeded for {key}, resets in {}s", decision.reset_in);
            return Err(AppError::RateLimited {
                reset_in: decision.reset_in,
            });
        }
        Ok(decision)
    }

    /// Drops every expired window. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());
        let before = windows.len();
        windows.retain(|_, window| now < window.resets_at);
        before - windows.len()
    }

    /// Number of tracked windows, expired or not.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.windows.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

fn ceil_secs(duration: Duration) -> u64 {
    duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}

// ────────────────────────────────────────────────────────────────────────────
// Sweeper
// ────────────────────────────────────────────────────────────────────────────

/// Owns the background sweep task. Dropping the handle stops the task.
pub struct SweeperHandle {
    task: Option<JoinHandle<()>>,
}

impl SweeperHandle {
    /// Stops the sweep task and waits for it to finish.
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Runs `sweep` every `period` until the handle is dropped or the limiter goes away.
pub fn spawn_sweeper(limiter: &Arc<RateLimiter>, period: Duration) -> SweeperHandle {
    let limiter: Weak<RateLimiter> = Arc::downgrade(limiter);
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let Some(limiter) = limiter.upgrade() else {
                break;
            };
            let removed = limiter.sweep();
            if removed > 0 {
                debug!("Rate limiter swept {removed} expired windows");
            }
        }
    });
    SweeperHandle { task: Some(task) }
}

// ────────────────────────────────────────────────────────────────────────────
// Client identity
// ────────────────────────────────────────────────────────────────────────────

/// First `x-forwarded-for` entry, else `x-real-ip`, else `"localhost"`.
pub fn client_ip(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    if let Some(forwarded) = header("x-forwarded-for") {
        if let Some(first) = forwarded.split(',').next().map(str::trim) {
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    header("x-real-ip")
        .map(str::to_string)
        .unwrap_or_else(|| "localhost".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn limiter() -> (Arc<ManualClock>, RateLimiter) {
        let clock = Arc::new(ManualClock::new());
        let limiter = RateLimiter::new(clock.clone());
        (clock, limiter)
    }

    #[test]
    fn test_first_request_opens_window() {
        let (_, limiter) = limiter();
        let decision = limiter.check("generate:1.2.3.4", RateLimitPolicy::per_day(4));
        assert_eq!(
            decision,
            RateLimitDecision {
                allowed: true,
                remaining: 3,
                reset_in: 86_400,
            }
        );
    }

    #[test]
    fn test_rejects_after_max_requests() {
        let (clock, limiter) = limiter();
        let policy = RateLimitPolicy::per_day(2);
        assert!(limiter.check("k", policy).allowed);
        clock.advance(Duration::from_millis(1500));
        let second = limiter.check("k", policy);
        assert!(second.allowed);
        assert_eq!(second.remaining, 0);
        assert_eq!(second.reset_in, 86_399);

        let third = limiter.check("k", policy);
        assert!(!third.allowed);
        assert_eq!(third.remaining, 0);
        assert_eq!(third.reset_in, 86_399);
    }

    #[test]
    fn test_rejections_do_not_consume_quota() {
        let (clock, limiter) = limiter();
        let policy = RateLimitPolicy {
            max_requests: 1,
            window: Duration::from_secs(10),
        };
        assert!(limiter.check("k", policy).allowed);
        for _ in 0..5 {
            assert!(!limiter.check("k", policy).allowed);
        }
        clock.advance(Duration::from_secs(10));
        let reopened = limiter.check("k", policy);
        assert!(reopened.allowed);
        assert_eq!(reopened.reset_in, 10);
    }

    #[test]
    fn test_keys_are_independent() {
        let (_, limiter) = limiter();
        let policy = RateLimitPolicy::per_day(1);
        assert!(limiter.check("generate:a", policy).allowed);
        assert!(limiter.check("generate:b", policy).allowed);
        assert!(limiter.check("evaluate:a", policy).allowed);
        assert!(!limiter.check("generate:a", policy).allowed);
    }

    #[test]
    fn test_enforce_maps_rejection_to_error() {
        let (_, limiter) = limiter();
        let policy = RateLimitPolicy::per_day(1);
        assert!(limiter.enforce("parse-resume", "10.0.0.1", policy).is_ok());
        let err = limiter
            .enforce("parse-resume", "10.0.0.1", policy)
            .unwrap_err();
        assert!(matches!(err, AppError::RateLimited { reset_in: 86_400 }));
    }

    #[test]
    fn test_sweep_removes_only_expired_windows() {
        let (clock, limiter) = limiter();
        limiter.check(
            "short",
            RateLimitPolicy {
                max_requests: 5,
                window: Duration::from_secs(60),
            },
        );
        limiter.check("long", RateLimitPolicy::per_day(5));
        clock.advance(Duration::from_secs(61));

        assert_eq!(limiter.sweep(), 1);
        assert_eq!(limiter.len(), 1);
        assert_eq!(limiter.sweep(), 0);
    }

    #[test]
    fn test_default_policies() {
        let limits = RateLimits::default();
        assert_eq!(limits.generate_questions.max_requests, 4);
        assert_eq!(limits.evaluate_answer.max_requests, 50);
        assert_eq!(limits.parse_resume.max_requests, 10);
        assert_eq!(limits.parse_resume.window, ONE_DAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_drops_expired_windows() {
        let limiter = Arc::new(RateLimiter::new(Arc::new(SystemClock)));
        limiter.check(
            "k",
            RateLimitPolicy {
                max_requests: 1,
                window: Duration::from_secs(30),
            },
        );
        let handle = spawn_sweeper(&limiter, Duration::from_secs(60));

        tokio::time::sleep(Duration::from_secs(61)).await;
        tokio::task::yield_now().await;

        assert_eq!(limiter.len(), 0);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_sweeper_stops_sweeping() {
        let limiter = Arc::new(RateLimiter::new(Arc::new(SystemClock)));
        limiter.check(
            "k",
            RateLimitPolicy {
                max_requests: 1,
                window: Duration::from_secs(30),
            },
        );
        drop(spawn_sweeper(&limiter, Duration::from_secs(60)));

        tokio::time::sleep(Duration::from_secs(180)).await;
        tokio::task::yield_now().await;

        assert_eq!(limiter.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_finishes_task() {
        let limiter = Arc::new(RateLimiter::new(Arc::new(SystemClock)));
        let handle = spawn_sweeper(&limiter, Duration::from_secs(60));
        assert!(!handle.is_finished());
        handle.shutdown().await;
    }

    #[test]
    fn test_client_ip_prefers_first_forwarded_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static(" 203.0.113.7 , 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_ip(&headers), "203.0.113.7");
    }

    #[test]
    fn test_client_ip_falls_back_to_real_ip_then_localhost() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_ip(&headers), "localhost");
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_ip(&headers), "10.0.0.2");
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));
        assert_eq!(client_ip(&headers), "10.0.0.2");
    }
}
