// core/src/stream/publisher.rs

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use async_stream::stream;
use futures_util::Stream;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, trace, warn};

use super::distinct::DistinctUntilChanged;
use crate::error::{CartError, CartResult};
use crate::model::Cart;
use crate::store::{cart_cache_key, CacheStore};

pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(1);

/// Infinite stream of cart snapshots for one subscriber.
pub type CartStream = Pin<Box<dyn Stream<Item = Cart> + Send>>;

/// Opens polling subscriptions against the cart cache.
///
/// The polling period bounds how long a cart change takes to reach a
/// subscriber. Each subscription owns its own comparison state, so
/// concurrent subscribers never affect each other.
#[derive(Clone)]
pub struct ChangeStreamPublisher {
  cache: Arc<dyn CacheStore>,
  period: Duration,
}

impl ChangeStreamPublisher {
  pub fn new(cache: Arc<dyn CacheStore>) -> Self {
    ChangeStreamPublisher {
      cache,
      period: DEFAULT_POLL_PERIOD,
    }
  }

  pub fn with_period(cache: Arc<dyn CacheStore>, period: Duration) -> CartResult<Self> {
    if period.is_zero() {
      return Err(CartError::Validation("Change-stream poll period must be greater than zero.".to_string()));
    }
    Ok(ChangeStreamPublisher { cache, period })
  }

  pub fn period(&self) -> Duration {
    self.period
  }

  /// Polls `cart:<userId>` once per period and yields a snapshot whenever it
  /// differs from the previous one yielded.
  ///
  /// The first read happens one period after subscribing. A cache miss or a
  /// failed read yields nothing for that tick. The stream never ends on its
  /// own; dropping it stops polling.
  pub fn subscribe(&self, user_id: i64) -> CartStream {
    let cache = Arc::clone(&self.cache);
    let period = self.period;
    let key = cart_cache_key(user_id);

    Box::pin(stream! {
      let _subscription = SubscriptionGuard { user_id };
      debug!(user_id, period_ms = period.as_millis() as u64, "Change-stream subscription opened.");

      let mut ticker = interval_at(Instant::now() + period, period);
      ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
      let mut distinct = DistinctUntilChanged::new();

      loop {
        ticker.tick().await;
        match cache.get(&key).await {
          Ok(Some(cart)) => match distinct.observe(cart) {
            Some(changed) => {
              debug!(user_id, cart_id = ?changed.id, status = %changed.status, "Emitting cart snapshot.");
              yield changed;
            }
            None => trace!(user_id, "Cart snapshot unchanged."),
          },
          Ok(None) => trace!(user_id, cache_key = %key, "No cart snapshot cached yet."),
          Err(e) => warn!(user_id, error = %e, "Change-stream cache read failed, skipping tick."),
        }
      }
    })
  }
}

/// Marks the end of a subscription when the stream is dropped.
struct SubscriptionGuard {
  user_id: i64,
}

impl Drop for SubscriptionGuard {
  fn drop(&mut self) {
    debug!(user_id = self.user_id, "Change-stream subscription closed.");
  }
}
