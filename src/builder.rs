use crate::error::Result;
use crate::utils::DEFAULT_BASE_N;
use crate::HirschbergEngine;

/// Configures a [`HirschbergEngine`]: base-case threshold and optional
/// up-front scratch capacity.
#[derive(Debug, Clone, Default)]
pub struct HirschbergBuilder {
    base: Option<usize>,
    capacity: Option<(usize, usize)>,
}

impl HirschbergBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit threshold; `0` selects the default.
    pub fn with_base(mut self, base: usize) -> Self {
        self.base = (base > 0).then_some(base);
        self
    }

    /// Threshold as given on a command line: non-positive values select the
    /// default instead of failing.
    pub fn with_requested_base(mut self, requested: i64) -> Self {
        self.base = usize::try_from(requested).ok().filter(|&b| b > 0);
        self
    }

    pub fn with_capacity(mut self, m: usize, n: usize) -> Self {
        self.capacity = Some((m, n));
        self
    }

    /// The threshold [`build`](Self::build) will use.
    pub fn base(&self) -> usize {
        self.base.unwrap_or(DEFAULT_BASE_N)
    }

    pub fn build(self) -> Result<HirschbergEngine> {
        let (m, n) = self.capacity.unwrap_or((0, 0));
        HirschbergEngine::with_capacity(m, n, self.base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_applies() {
        assert_eq!(HirschbergBuilder::new().base(), DEFAULT_BASE_N);
        assert_eq!(HirschbergBuilder::new().with_base(0).base(), DEFAULT_BASE_N);
    }

    #[test]
    fn invalid_requested_base_falls_back() {
        assert_eq!(HirschbergBuilder::new().with_requested_base(-5).base(), 32);
        assert_eq!(HirschbergBuilder::new().with_requested_base(0).base(), 32);
        assert_eq!(HirschbergBuilder::new().with_requested_base(7).base(), 7);
    }

    #[test]
    fn builds_with_capacity() {
        let engine = HirschbergBuilder::new()
            .with_base(4)
            .with_capacity(16, 8)
            .build()
            .unwrap();
        assert_eq!(engine.base(), 4);
    }
}
