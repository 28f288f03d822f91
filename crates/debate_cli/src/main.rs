//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `debate_core` linkage.
//! - Print the seeded store shape for quick local sanity checks.

use debate_core::DebateStore;

fn main() {
    let store = DebateStore::new();
    let counts = store.counts();
    println!("debate_core ping={}", debate_core::ping());
    println!("debate_core version={}", debate_core::core_version());
    println!(
        "debate_core seeded topics={} notes={} beliefs={} drawings={}",
        counts.topics, counts.notes, counts.beliefs, counts.drawings
    );
}
