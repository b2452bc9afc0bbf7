use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Instant;

pub struct GlobalStats {
    num_workers: usize,
    keys_generated: AtomicU64,
    start_time: Instant,
}

impl GlobalStats {
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers,
            keys_generated: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn add_keys(&self, keys: usize) {
        self.keys_generated.fetch_add(keys as u64, Ordering::Relaxed);
    }

    pub fn keys_generated(&self) -> u64 {
        self.keys_generated.load(Ordering::Relaxed)
    }

    pub fn summary(&self) -> String {
        let keys_generated = self.keys_generated();
        let elapsed_seconds = self.start_time.elapsed().as_secs_f64();
        let (keys_per_second, worker_keys_per_second) = if elapsed_seconds > 0.0 {
            let rate = keys_generated as f64 / elapsed_seconds;
            (rate, rate / self.num_workers.max(1) as f64)
        } else {
            (0.0, 0.0)
        };
        let num_workers = self.num_workers;

        format!("GLOBAL STATS ({num_workers} workers): Generated {keys_generated} keys in {elapsed_seconds:.2}s ({keys_per_second:.2} keys/sec, {worker_keys_per_second:.2} keys/sec/worker)")
    }

    pub fn print_stats(&self) {
        eprintln!("{}", self.summary());
    }
}
