/// Folder counters for one walk. Only the coordinator thread mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    total: usize,
    processed: usize,
}

impl ProgressState {
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self {
            total,
            processed: 0,
        }
    }

    /// Record one finished folder. Returns true when the count lands on a
    /// 10%-of-total boundary (every folder when there are fewer than ten).
    pub fn advance(&mut self) -> bool {
        self.processed += 1;
        self.processed % self.step() == 0
    }

    const fn step(&self) -> usize {
        let step = self.total / 10;
        if step == 0 { 1 } else { step }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn processed(&self) -> usize {
        self.processed
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
