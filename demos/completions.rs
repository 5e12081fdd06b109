use rand::{distr::Alphanumeric, rng, Rng};
use prefixtree::tree::PrefixTree;

fn main() {
    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Create our tree and a collection of searches
    let mut tree = PrefixTree::new();
    let mut searches = vec![];

    // Store 10 random strings (char sequences)
    // composed of between 1 and 10 characters in
    // our search collection and our tree.
    for _i in 0..POPULATION_SIZE {
        let entry: String = rng()
            .sample_iter(&Alphanumeric)
            .take(rng().random_range(1..=SIZE))
            .map(char::from)
            .collect();
        searches.push(entry.clone());
        tree.insert(entry.chars());
    }

    // iterate over our tree and confirm that all keys
    // are in our search collection
    println!("pre-order");
    for key in tree.strings::<String>() {
        assert!(searches.contains(&key));
        println!("key: {key}");
    }
    println!("sorted");
    for key in tree.iter_sorted() {
        println!("key: {}", String::from_iter(key));
    }

    // Every search completes to at least itself
    for search in &searches {
        let prefix: String = search.chars().take(1).collect();
        let completions: Vec<String> = tree.complete(prefix.chars());
        assert!(completions.contains(search));
        println!("complete({prefix:?}): {completions:?}");
    }
}
