/// Free-tier gating rule
///
/// A pure decision: a paid account always passes, a free account passes
/// while its invocation count is under the limit. The count lives on the
/// client in the reference behavior, so this is a UX affordance rather
/// than an enforcement mechanism; server-side enforcement would need an
/// authenticated counter behind this same rule.
#[derive(Debug, Clone, Copy)]
pub struct UsagePolicy {
    free_limit: u32,
}

impl UsagePolicy {
    pub const fn new(free_limit: u32) -> Self {
        Self { free_limit }
    }

    /// Whether another paid-feature invocation is allowed
    pub const fn allows(&self, paid: bool, used: u32) -> bool {
        paid || used < self.free_limit
    }

    pub const fn free_limit(&self) -> u32 {
        self.free_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_account_under_limit() {
        let policy = UsagePolicy::new(7);
        assert!(policy.allows(false, 0));
        assert!(policy.allows(false, 6));
    }

    #[test]
    fn free_account_at_limit() {
        let policy = UsagePolicy::new(7);
        assert!(!policy.allows(false, 7));
        assert!(!policy.allows(false, 100));
    }

    #[test]
    fn paid_account_always_passes() {
        let policy = UsagePolicy::new(7);
        assert!(policy.allows(true, 0));
        assert!(policy.allows(true, 7));
        assert!(policy.allows(true, u32::MAX));
    }

    #[test]
    fn zero_limit_gates_immediately() {
        let policy = UsagePolicy::new(0);
        assert!(!policy.allows(false, 0));
        assert!(policy.allows(true, 0));
    }
}
