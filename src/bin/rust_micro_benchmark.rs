use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tribloom::BloomFilter;

const FILTER_SIZE: u32 = 8192;
const KEY_LEN: usize = 12;
const QUERY_COUNT: usize = 10_000;

fn random_key(rng: &mut impl Rng, len: usize) -> String {
    rng.sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("🦀 Rust Micro Benchmark - Native Performance Test");
    println!("{}", "=".repeat(55));

    let element_counts: Vec<usize> = (0..=2000).step_by(250).collect();

    println!("Filter size: {} bits", FILTER_SIZE);
    println!("Testing element counts: {:?}", element_counts);
    println!();

    let mut rng = thread_rng();
    let mut results = Vec::new();

    for &n_elements in &element_counts {
        info!(n_elements, "running benchmark round");

        let start = Instant::now();
        let mut filter = match BloomFilter::new(FILTER_SIZE) {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        };
        let creation_time = start.elapsed().as_secs_f64();

        if n_elements == 0 {
            results.push((n_elements, creation_time, 0.0, 0.0, 0.0, 0.0, 0, 0.0, 0.0));
            continue;
        }

        // Inserted keys are KEY_LEN long, queries one longer, so no query was inserted
        let test_keys: Vec<String> = (0..n_elements)
            .map(|_| random_key(&mut rng, KEY_LEN))
            .collect();
        let query_keys: Vec<String> = (0..QUERY_COUNT)
            .map(|_| random_key(&mut rng, KEY_LEN + 1))
            .collect();

        let start = Instant::now();
        for key in &test_keys {
            filter.add(key);
        }
        let insert_time = start.elapsed().as_secs_f64();

        let missing = test_keys.iter().filter(|key| !filter.contains(key)).count();
        assert_eq!(missing, 0, "bloom filter lost an inserted key");

        let start = Instant::now();
        let mut false_positives = 0;
        for key in &query_keys {
            if filter.contains(key) {
                false_positives += 1;
            }
        }
        let query_time = start.elapsed().as_secs_f64();

        let insert_rate = if insert_time > 0.0 {
            n_elements as f64 / insert_time
        } else {
            f64::INFINITY
        };
        let query_rate = if query_time > 0.0 {
            query_keys.len() as f64 / query_time
        } else {
            f64::INFINITY
        };
        let false_positive_rate = false_positives as f64 / query_keys.len() as f64;

        results.push((
            n_elements,
            creation_time,
            insert_time,
            query_time,
            insert_rate,
            query_rate,
            false_positives,
            false_positive_rate,
            filter.estimated_fpr(),
        ));

        println!(
            "   ✅ {} elements - Insert rate: {:.0} ops/s, Query rate: {:.0} ops/s",
            n_elements, insert_rate, query_rate
        );
    }

    println!("\n📊 Results (CSV format):");
    println!("elements,creation_time,insert_time,query_time,insert_rate,query_rate,false_positives,false_positive_rate,estimated_fpr");

    for (
        elements,
        creation_time,
        insert_time,
        query_time,
        insert_rate,
        query_rate,
        false_positives,
        fpr,
        estimated_fpr,
    ) in &results
    {
        println!(
            "{},{:.6},{:.6},{:.6},{:.0},{:.0},{},{:.6},{:.6}",
            elements,
            creation_time,
            insert_time,
            query_time,
            insert_rate,
            query_rate,
            false_positives,
            fpr,
            estimated_fpr
        );
    }
}
