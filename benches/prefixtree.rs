use prefixtree::tree::{PrefixTree, TrieAtom};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{
    distr::{Alphanumeric, Uniform},
    rng, Rng,
};

fn random_words(population: usize, max_len: usize) -> Vec<String> {
    (0..population)
        .map(|_| {
            rng()
                .sample_iter(&Alphanumeric)
                .take(rng().random_range(1..=max_len))
                .map(char::from)
                .collect()
        })
        .collect()
}

fn make_tree(words: &[String]) -> PrefixTree<char> {
    words.iter().map(|w| w.chars()).collect()
}

fn tree_insert(c: &mut Criterion) {
    let words = random_words(10_000, 12);
    c.bench_function("tree insert", |b| b.iter(|| make_tree(&words)));
}

fn tree_contains(c: &mut Criterion) {
    let words = random_words(10_000, 12);
    let tree = make_tree(&words);
    c.bench_function("tree contains", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|w| tree.contains(w.chars()))
                .count()
        })
    });
}

fn tree_complete(c: &mut Criterion) {
    let words = random_words(10_000, 12);
    let tree = make_tree(&words);
    c.bench_function("tree complete (1 char prefix)", |b| {
        b.iter_batched(
            || char::from(rng().sample(Alphanumeric)),
            |prefix| tree.complete::<_, String>([prefix]),
            BatchSize::SmallInput,
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut tree = PrefixTree::<char>::new();
    c.bench_function("inserting: char items (len: 1..=512)", |b| {
        b.iter_batched(
            || {
                rng()
                    .sample_iter(&Alphanumeric)
                    .take(rng().random_range(1..=512))
                    .map(char::from)
            },
            |input| insert_tree(&mut tree, input),
            BatchSize::SmallInput,
        )
    });
    c.bench_function("contains: char items (len: 1..=512)", |b| {
        b.iter_batched(
            || {
                rng()
                    .sample_iter(&Alphanumeric)
                    .take(rng().random_range(1..=512))
                    .map(char::from)
            },
            |input| contains_tree(&tree, input),
            BatchSize::SmallInput,
        )
    });
    tree.clear();
}

fn iterate(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;
    static POPULATION_SIZE: usize = 1000;

    let mut group = c.benchmark_group("iterate");
    for size in [BASE_SIZE, 4 * BASE_SIZE, 16 * BASE_SIZE, 64 * BASE_SIZE].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("reference iteration (char)", size),
            size,
            |b, &size| {
                let tree = make_tree(&random_words(POPULATION_SIZE, size));
                b.iter_batched(|| {}, |_| iterate_tree(&tree), BatchSize::SmallInput)
            },
        );
    }
    group.finish();
}

fn search(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;
    static POPULATION_SIZE: usize = 10000;

    let mut group = c.benchmark_group("search");
    for size in [BASE_SIZE, 4 * BASE_SIZE, 16 * BASE_SIZE, 64 * BASE_SIZE].iter() {
        let range = Uniform::new_inclusive(1, size).unwrap();
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("random find (usize)", size),
            size,
            |b, &size| {
                let mut tree = PrefixTree::<usize>::new();
                for _i in 0..POPULATION_SIZE {
                    let entry: Vec<usize> = rng()
                        .sample_iter(range)
                        .take(rng().random_range(1..=size))
                        .collect();
                    tree.insert(entry);
                }
                b.iter_batched(
                    || rng().sample_iter(range).take(rng().random_range(1..=size)),
                    |input| contains_tree(&tree, input),
                    BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("always find (char)", size),
            size,
            |b, &size| {
                let searches: Vec<Vec<char>> = random_words(POPULATION_SIZE, size)
                    .iter()
                    .map(|w| w.chars().collect())
                    .collect();
                let tree: PrefixTree<char> = searches.iter().cloned().collect();
                b.iter_batched(
                    || searches[rng().random_range(0..POPULATION_SIZE)].clone(),
                    |input| contains_tree(&tree, input),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    tree_insert,
    tree_contains,
    tree_complete,
    criterion_benchmark,
    search,
    iterate
);
criterion_main!(benches);

fn insert_tree<S: IntoIterator<Item = A>, A: TrieAtom>(tree: &mut PrefixTree<A>, input: S) {
    tree.insert(input);
}

fn contains_tree<S: IntoIterator<Item = A>, A: TrieAtom>(tree: &PrefixTree<A>, input: S) {
    tree.contains(input);
}

fn iterate_tree<A: TrieAtom>(tree: &PrefixTree<A>) {
    tree.iter().for_each(|_x| ());
}
