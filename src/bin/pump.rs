use bytering::ring::RingBuffer;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("bytering pump stress test");
    println!("Press Ctrl+C to stop early\n");

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| format!("Failed to set Ctrl+C handler: {}", e))?;

    let mut ring = RingBuffer::new(64 * 1024)?;

    let mut chunk = vec![0u8; 4096];
    let mut scratch = vec![0u8; 4096];

    let mut seq_in = 0u64;
    let mut seq_out = 0u64;

    let started = Instant::now();
    let mut last_report = Instant::now();
    let deadline = Duration::from_secs(5);

    println!("Running for 5 seconds...");

    while running.load(Ordering::SeqCst) && started.elapsed() < deadline {
        for (i, b) in chunk.iter_mut().enumerate() {
            *b = (seq_in + i as u64) as u8;
        }
        let n = ring.insert_range(&chunk);
        seq_in += n as u64;

        let n = ring.extract_range(&mut scratch);
        for &b in &scratch[..n] {
            if b != seq_out as u8 {
                return Err(format!("FIFO violation at byte {}", seq_out).into());
            }
            seq_out += 1;
        }

        if last_report.elapsed() >= Duration::from_secs(1) {
            println!(
                "[STATUS] in={} out={} used={} available={}",
                seq_in,
                seq_out,
                ring.used(),
                ring.available()
            );
            last_report = Instant::now();
        }
    }

    while !ring.is_empty() {
        let n = ring.extract_range(&mut scratch);
        for &b in &scratch[..n] {
            if b != seq_out as u8 {
                return Err(format!("FIFO violation at byte {}", seq_out).into());
            }
            seq_out += 1;
        }
    }

    let elapsed = started.elapsed().as_secs_f64();

    println!("\nResults:");
    println!("  Inserted: {} bytes", seq_in);
    println!("  Extracted: {} bytes", seq_out);
    println!(
        "  Throughput: {:.2} MB/sec",
        seq_out as f64 / elapsed / 1024.0 / 1024.0
    );

    if seq_in != seq_out {
        return Err(format!("byte count mismatch: in={} out={}", seq_in, seq_out).into());
    }

    Ok(())
}
