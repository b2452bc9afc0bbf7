use crate::common::{spawn_cpu_workers, worker_share, GlobalStats};
use std::error::Error;
use std::io::Write;
use std::sync::Arc;

fn worker<W: Write>(
    thread_id: usize,
    num_keys: usize,
    with_public_key: bool,
    global_stats: &GlobalStats,
    out: &mut W,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    eprintln!("[CPU-{}] Starting key generation worker thread ({} keys)", thread_id, num_keys);

    for _ in 0..num_keys {
        let private_key = logic::generate_private_key();

        if with_public_key {
            let public_key = private_key.public_key()?;
            writeln!(out, "[CPU-{}] private_key = {} public_key = {}", thread_id, private_key.to_hex(), public_key)?;
        } else {
            writeln!(out, "[CPU-{}] private_key = {}", thread_id, private_key.to_hex())?;
        }

        global_stats.add_keys(1);
    }

    Ok(())
}

pub fn run(
    num_threads: usize,
    count: usize,
    with_public_key: bool,
    global_stats: Arc<GlobalStats>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    // No point in idle workers
    let num_threads = num_threads.min(count).max(1);
    eprintln!("Starting CPU mode with {} threads", num_threads);

    spawn_cpu_workers(num_threads, Arc::clone(&global_stats), move |thread_id, stats| {
        let num_keys = worker_share(thread_id, num_threads, count);
        worker(thread_id, num_keys, with_public_key, &stats, &mut std::io::stdout())
    })?;

    global_stats.print_stats();
    Ok(())
}
