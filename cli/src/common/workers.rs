use std::error::Error;
use std::sync::Arc;

/// Spawns `num_workers` threads, each running `worker_fn(thread_id, shared_data)`.
/// Waits for all to complete. Propagates errors without panicking.
pub fn spawn_cpu_workers<T, F>(
    num_workers: usize,
    shared_data: Arc<T>,
    worker_fn: F,
) -> Result<(), Box<dyn Error + Send + Sync>>
where
    T: Send + Sync + 'static,
    F: Fn(usize, Arc<T>) -> Result<(), Box<dyn Error + Send + Sync>> + Send + Clone + 'static,
{
    let handles: Vec<_> = (0..num_workers)
        .map(|i| {
            let data = Arc::clone(&shared_data);
            let f = worker_fn.clone();
            std::thread::spawn(move || f(i, data))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        handle
            .join()
            .map_err(|_| format!("Worker thread {} panicked", i))?
            .map_err(|e| format!("Worker thread {} failed: {}", i, e))?;
    }

    Ok(())
}

/// Number of items worker `thread_id` handles when `total` items are spread over `num_workers`.
pub fn worker_share(thread_id: usize, num_workers: usize, total: usize) -> usize {
    total / num_workers + usize::from(thread_id < total % num_workers)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn shares_cover_total_exactly() {
        for (workers, total) in [(1, 1), (4, 10), (8, 3), (3, 3000)] {
            let sum: usize = (0..workers).map(|i| worker_share(i, workers, total)).sum();
            assert_eq!(sum, total);
        }
        assert_eq!(worker_share(0, 4, 10), 3);
        assert_eq!(worker_share(3, 4, 10), 2);
    }

    #[test]
    fn runs_every_worker_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        spawn_cpu_workers(5, Arc::clone(&counter), |_, counter| {
            counter.fetch_add(1, Ordering::Relaxed);
            Ok(())
        })
        .unwrap();
        assert_eq!(counter.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn propagates_worker_errors() {
        let result = spawn_cpu_workers(3, Arc::new(()), |thread_id, _| {
            if thread_id == 1 {
                return Err("boom".into());
            }
            Ok(())
        });
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Worker thread 1 failed: boom"), "{}", message);
    }
}
