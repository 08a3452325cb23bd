// core/src/stream/distinct.rs

/// Comparison state for one subscription: passes a value through only when it
/// differs from the last value passed.
#[derive(Debug, Clone)]
pub struct DistinctUntilChanged<T> {
  last: Option<T>,
}

impl<T: PartialEq + Clone> DistinctUntilChanged<T> {
  pub fn new() -> Self {
    DistinctUntilChanged { last: None }
  }

  /// Returns `Some(value)` if it should be emitted.
  pub fn observe(&mut self, value: T) -> Option<T> {
    if self.last.as_ref() == Some(&value) {
      return None;
    }
    self.last = Some(value.clone());
    Some(value)
  }

  pub fn last(&self) -> Option<&T> {
    self.last.as_ref()
  }
}

impl<T: PartialEq + Clone> Default for DistinctUntilChanged<T> {
  fn default() -> Self {
    Self::new()
  }
}
