use acpma::alphabet::Lowercase;
use acpma::{AhoCorasickBuilder, LowercaseAhoCorasick, Transitions};
use acpma_bench::generate_patterns;

fn main() {
    for n in [100, 5000, 15000, 50000] {
        println!("== words_{n} ==");
        let patterns = generate_patterns(n);
        show_memory_stats(&patterns);
    }
}

fn show_memory_stats(patterns: &[String]) {
    {
        let pma = LowercaseAhoCorasick::new(patterns).unwrap();
        format_memory("acpma (lazy)", pma.heap_bytes());
        println!("  {} states", pma.num_states());
    }
    {
        let pma = AhoCorasickBuilder::new(Lowercase)
            .transitions(Transitions::Eager)
            .build(patterns)
            .unwrap();
        format_memory("acpma (eager)", pma.heap_bytes());
    }
    {
        let pma = aho_corasick::AhoCorasick::new(patterns).unwrap();
        format_memory("aho_corasick (nfa)", pma.memory_usage());
    }
    {
        let pma = aho_corasick::AhoCorasickBuilder::new()
            .kind(Some(aho_corasick::AhoCorasickKind::DFA))
            .build(patterns)
            .unwrap();
        format_memory("aho_corasick (dfa)", pma.memory_usage());
    }
}

fn format_memory(title: &str, bytes: usize) {
    println!(
        "{}: {} bytes, {:.3} MiB",
        title,
        bytes,
        bytes as f64 / (1024.0 * 1024.0)
    );
}
