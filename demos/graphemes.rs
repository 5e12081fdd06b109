use prefixtree::tree::PrefixTree;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    let s = "a̐éö̲\r\n";
    let head: String = s.graphemes(true).take(2).collect();

    // Create our tree
    let mut tree = PrefixTree::new();

    // Insert some graphemes
    let input = s.graphemes(true);
    tree.insert(input.clone());
    tree.insert(head.graphemes(true));
    assert!(tree.contains(input.clone()));
    assert_eq!(2, tree.size());

    // Complete on the first grapheme cluster only
    let completions: Vec<String> = tree.complete(input.take(1));
    assert_eq!(vec![head.as_str(), s], completions);
    println!("{tree}");
}
