use tracing_subscriber::EnvFilter;
use tribloom::BloomFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut bloom = match BloomFilter::new(16) {
        Ok(bloom) => bloom,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    let keys = ["bat", "rat", "cats"];
    for key in keys {
        bloom.add(key);
    }
    for key in keys {
        println!("{} {}", key, bloom.contains(key));
    }
    println!("cat {}", bloom.contains("cat"));
    println!("{}", bloom.stats());

    bloom.clear();
    println!("After clearing..");
    println!("bat {}", bloom.contains("bat"));
}
