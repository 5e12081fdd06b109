//! Build prefix trees from a few word lists and exercise every query.
//!
//! Run with `RUST_LOG=prefixtree=trace` to see the tree's own events.

use std::collections::{BTreeSet, HashSet};
use std::env;

use prefixtree::tree::PrefixTree;

fn create_prefix_tree(strings: &[&str]) {
    println!("strings: {strings:?}");

    let mut tree: PrefixTree<char> = PrefixTree::new();
    println!("\ntree: {tree}");
    println!("strings: {:?}", tree.strings::<String>());

    println!("\nInserting strings:");
    for string in strings {
        tree.insert(string.chars());
        println!("insert({string:?}), size: {}", tree.size());
    }
    println!("\ntree: {tree}");

    println!("\nSearching for strings in tree:");
    let unique: BTreeSet<&str> = strings.iter().copied().collect();
    for string in &unique {
        println!("contains({string:?}): {}", tree.contains(string.chars()));
    }

    println!("\nSearching for strings not in tree:");
    let prefixes: BTreeSet<String> = strings
        .iter()
        .map(|s| {
            let half = s.chars().count() / 2;
            s.chars().take(half).collect()
        })
        .collect();
    for prefix in &prefixes {
        if prefix.is_empty() || unique.contains(prefix.as_str()) {
            continue;
        }
        println!("contains({prefix:?}): {}", tree.contains(prefix.chars()));
    }

    println!("\nCompleting prefixes in tree:");
    for prefix in &prefixes {
        let completions: Vec<String> = tree.complete(prefix.chars());
        println!("complete({prefix:?}): {completions:?}");
    }

    println!("\nRetrieving all strings:");
    let retrieved: Vec<String> = tree.strings();
    println!("strings: {retrieved:?}");
    let matches = retrieved.iter().map(String::as_str).collect::<HashSet<_>>()
        == strings.iter().copied().collect::<HashSet<_>>();
    println!("matches? {matches}");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .init();

    // Simple test case of strings with partial substring overlaps
    create_prefix_tree(&["ABC", "ABD", "A", "XYZ"]);

    println!("\n{}\n", "=".repeat(80));

    // A tongue-twister with similar words to test with
    let seashells: Vec<&str> = "Shelly sells seashells by the sea shore"
        .split_whitespace()
        .collect();
    println!("Seashells tongue-twister:");
    create_prefix_tree(&seashells);
}
