/// Payload byte contribution used by the byte-accounting query.
///
/// The queue cannot know how much memory an out-of-line payload reference keeps alive, so the
/// caller states the accounting policy explicitly. `Inline(0)` is a legitimate zero-sized
/// payload and is distinct from [`PayloadFootprint::OutOfLine`], which excludes payload bytes
/// altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFootprint {
  /// Payloads are out-of-line references; only structural node bytes are counted.
  OutOfLine,
  /// Every payload contributes exactly this many bytes.
  Inline(usize),
}

impl PayloadFootprint {
  /// Bytes contributed by a single payload under this accounting policy.
  #[must_use]
  pub const fn bytes_per_payload(self) -> usize {
    match self {
      | Self::OutOfLine => 0,
      | Self::Inline(bytes) => bytes,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn out_of_line_contributes_nothing() {
    assert_eq!(PayloadFootprint::OutOfLine.bytes_per_payload(), 0);
  }

  #[test]
  fn inline_zero_is_distinct_from_out_of_line() {
    assert_eq!(PayloadFootprint::Inline(0).bytes_per_payload(), 0);
    assert_ne!(PayloadFootprint::Inline(0), PayloadFootprint::OutOfLine);
  }

  #[test]
  fn inline_contributes_stated_bytes() {
    assert_eq!(PayloadFootprint::Inline(8).bytes_per_payload(), 8);
  }
}
