/// Monotonic ledger for in-flight requests. Every
/// dispatch takes a fresh sequence number; a
/// response may only be applied while its number is
/// still the latest issued. Responses to superseded
/// requests are dropped, so the rendered snapshot
/// always belongs to the newest request that
/// resolved.
#[derive(Debug, Default)]
pub struct RequestLedger {
  issued: u64
}

impl RequestLedger {
  pub fn begin(&mut self) -> u64 {
    self.issued += 1;
    self.issued
  }

  pub fn is_current(
    &self,
    seq: u64
  ) -> bool {
    seq == self.issued
  }

  pub fn issued(&self) -> u64 {
    self.issued
  }
}

#[cfg(test)]
mod sequence_tests {
  use super::*;

  #[test]
  fn sequence_numbers_are_monotonic() {
    let mut ledger =
      RequestLedger::default();

    assert_eq!(ledger.begin(), 1);
    assert_eq!(ledger.begin(), 2);
    assert_eq!(ledger.issued(), 2);
  }

  #[test]
  fn only_the_latest_issued_request_is_current(
  ) {
    let mut ledger =
      RequestLedger::default();

    let first = ledger.begin();
    let second = ledger.begin();

    assert!(!ledger.is_current(first));
    assert!(ledger.is_current(second));
  }

  #[test]
  fn earlier_request_resolving_late_is_stale(
  ) {
    let mut ledger =
      RequestLedger::default();

    let a = ledger.begin();
    let b = ledger.begin();

    // B resolves first and is applied; A resolving
    // afterwards must be discarded.
    assert!(ledger.is_current(b));
    assert!(!ledger.is_current(a));
  }
}
