use branching::iterator::Traversal;
use branching::trie::Trie;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{distributions::Alphanumeric, thread_rng, Rng};

static POPULATION_SIZE: usize = 1000;

fn random_word(max: usize) -> Vec<char> {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(thread_rng().gen_range(1..=max))
        .map(char::from)
        .collect()
}

fn random_words(max: usize) -> Vec<Vec<char>> {
    (0..POPULATION_SIZE).map(|_| random_word(max)).collect()
}

fn make_trie(words: &[Vec<char>]) -> Trie<char, String> {
    let mut trie = Trie::strings();
    for word in words {
        trie.add(word.iter().copied());
    }
    trie
}

fn trie_add(c: &mut Criterion) {
    let words = random_words(32);
    c.bench_function("trie add", |b| b.iter(|| make_trie(&words)));
}

fn trie_contains(c: &mut Criterion) {
    let words = random_words(32);
    let trie = make_trie(&words);
    c.bench_function("trie contains", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|word| trie.contains(word.iter().copied()))
                .count()
        })
    });
}

fn trie_remove(c: &mut Criterion) {
    let words = random_words(32);
    c.bench_function("trie remove", |b| {
        b.iter_batched(
            || make_trie(&words),
            |mut trie| {
                for word in &words {
                    trie.remove(word.iter().copied());
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn iterate(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;

    let mut group = c.benchmark_group("iterate");
    for size in [BASE_SIZE, 2 * BASE_SIZE, 4 * BASE_SIZE].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let words = random_words(*size);
        let trie = make_trie(&words);
        group.bench_with_input(
            BenchmarkId::new("depth first (char)", size),
            size,
            |b, &_size| b.iter(|| trie.iter().count()),
        );
        group.bench_with_input(
            BenchmarkId::new("breadth first (char)", size),
            size,
            |b, &_size| b.iter(|| trie.iter_ordered(Traversal::BreadthFirst).count()),
        );
    }
    group.finish();
}

criterion_group!(benches, trie_add, trie_contains, trie_remove, iterate);
criterion_main!(benches);
