use tracing::info;

/// Counters describing one search invocation, logged periodically while the
/// search runs and once more when it finishes.
#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes popped and expanded
    expanded_nodes: usize,
    /// Number of nodes generated and inserted into the frontier
    generated_nodes: usize,
    /// Number of heuristic evaluations
    evaluated_nodes: usize,
    /// Number of pops skipped because the state was already explored
    duplicate_pops: usize,
    /// Largest frontier size observed
    peak_frontier_size: usize,
    /// Time when the search started
    search_start_time: std::time::Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: std::time::Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            evaluated_nodes: 0,
            duplicate_pops: 0,
            peak_frontier_size: 0,
            search_start_time: std::time::Instant::now(),
            last_log_time: std::time::Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_duplicate_pops(&mut self) {
        self.duplicate_pops += 1;
    }

    pub fn record_frontier_size(&mut self, size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(size);
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn duplicate_pops(&self) -> usize {
        self.duplicate_pops
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = std::time::Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            evaluated_nodes = self.evaluated_nodes,
            duplicate_pops = self.duplicate_pops,
            peak_frontier_size = self.peak_frontier_size,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
