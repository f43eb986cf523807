use std::time::Duration;

use acpma::alphabet::Lowercase;
use acpma::{AhoCorasickBuilder, LowercaseAhoCorasick, Transitions};
use acpma_bench::{generate_haystacks, generate_patterns};
use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, SamplingMode,
};

const BUILD_SAMPLE_SIZE: usize = 10;
const BUILD_WARM_UP_TIME: Duration = Duration::from_millis(500);
const BUILD_MEASURE_TIME: Duration = Duration::from_secs(2);

const SEARCH_SAMPLE_SIZE: usize = 30;
const SEARCH_WARM_UP_TIME: Duration = Duration::from_millis(500);
const SEARCH_MEASURE_TIME: Duration = Duration::from_secs(2);

const NUM_HAYSTACKS: usize = 100;
const HAYSTACK_LEN: usize = 1000;

macro_rules! define_build_bench {
    ( $func_name:ident, $group:literal, $num_patterns:literal ) => {
        fn $func_name(c: &mut Criterion) {
            let mut group = c.benchmark_group($group);
            group.sample_size(BUILD_SAMPLE_SIZE);
            group.warm_up_time(BUILD_WARM_UP_TIME);
            group.measurement_time(BUILD_MEASURE_TIME);
            group.sampling_mode(SamplingMode::Flat);
            let patterns = generate_patterns($num_patterns);
            add_build_benches(&mut group, &patterns);
        }
    };
}

macro_rules! define_find_bench {
    ( $func_name:ident, $group:literal, $num_patterns:literal ) => {
        fn $func_name(c: &mut Criterion) {
            let mut group = c.benchmark_group($group);
            group.sample_size(SEARCH_SAMPLE_SIZE);
            group.warm_up_time(SEARCH_WARM_UP_TIME);
            group.measurement_time(SEARCH_MEASURE_TIME);
            group.sampling_mode(SamplingMode::Flat);
            let patterns = generate_patterns($num_patterns);
            let haystacks = generate_haystacks(NUM_HAYSTACKS, HAYSTACK_LEN);
            add_find_overlapping_benches(&mut group, &patterns, &haystacks);
        }
    };
}

define_build_bench!(criterion_words_100_build, "words_100/build", 100);
define_build_bench!(criterion_words_5000_build, "words_5000/build", 5000);
define_build_bench!(criterion_words_50000_build, "words_50000/build", 50000);

define_find_bench!(
    criterion_words_100_find_overlapping,
    "words_100/find_overlapping",
    100
);
define_find_bench!(
    criterion_words_5000_find_overlapping,
    "words_5000/find_overlapping",
    5000
);
define_find_bench!(
    criterion_words_50000_find_overlapping,
    "words_50000/find_overlapping",
    50000
);

fn add_build_benches(group: &mut BenchmarkGroup<WallTime>, patterns: &[String]) {
    group.bench_function("acpma/lazy", |b| {
        b.iter(|| LowercaseAhoCorasick::new(patterns).unwrap());
    });

    group.bench_function("acpma/eager", |b| {
        b.iter(|| {
            AhoCorasickBuilder::new(Lowercase)
                .transitions(Transitions::Eager)
                .build(patterns)
                .unwrap()
        });
    });

    group.bench_function("aho_corasick/nfa", |b| {
        b.iter(|| aho_corasick::AhoCorasick::new(patterns).unwrap());
    });

    group.bench_function("aho_corasick/dfa", |b| {
        b.iter(|| {
            aho_corasick::AhoCorasickBuilder::new()
                .kind(Some(aho_corasick::AhoCorasickKind::DFA))
                .build(patterns)
                .unwrap()
        });
    });
}

fn add_find_overlapping_benches(
    group: &mut BenchmarkGroup<WallTime>,
    patterns: &[String],
    haystacks: &[String],
) {
    group.bench_function("acpma/lazy", |b| {
        let pma = LowercaseAhoCorasick::new(patterns).unwrap();
        b.iter(|| {
            let mut sum = 0;
            for haystack in haystacks {
                for m in pma.find_overlapping_iter(haystack) {
                    let m = m.unwrap();
                    sum += m.start() + m.end() + m.pattern();
                }
            }
            if sum == 0 {
                panic!();
            }
        });
    });

    group.bench_function("acpma/eager", |b| {
        let pma = AhoCorasickBuilder::new(Lowercase)
            .transitions(Transitions::Eager)
            .build(patterns)
            .unwrap();
        b.iter(|| {
            let mut sum = 0;
            for haystack in haystacks {
                for m in pma.find_overlapping_iter(haystack) {
                    let m = m.unwrap();
                    sum += m.start() + m.end() + m.pattern();
                }
            }
            if sum == 0 {
                panic!();
            }
        });
    });

    group.bench_function("aho_corasick/nfa", |b| {
        let pma = aho_corasick::AhoCorasick::new(patterns).unwrap();
        b.iter(|| {
            let mut sum = 0;
            for haystack in haystacks {
                for m in pma.find_overlapping_iter(haystack) {
                    sum += m.start() + m.end() + m.pattern().as_usize();
                }
            }
            if sum == 0 {
                panic!();
            }
        });
    });

    group.bench_function("aho_corasick/dfa", |b| {
        let pma = aho_corasick::AhoCorasickBuilder::new()
            .kind(Some(aho_corasick::AhoCorasickKind::DFA))
            .build(patterns)
            .unwrap();
        b.iter(|| {
            let mut sum = 0;
            for haystack in haystacks {
                for m in pma.find_overlapping_iter(haystack) {
                    sum += m.start() + m.end() + m.pattern().as_usize();
                }
            }
            if sum == 0 {
                panic!();
            }
        });
    });
}

criterion_group!(
    benches,
    criterion_words_100_build,
    criterion_words_5000_build,
    criterion_words_50000_build,
    criterion_words_100_find_overlapping,
    criterion_words_5000_find_overlapping,
    criterion_words_50000_find_overlapping,
);
criterion_main!(benches);
