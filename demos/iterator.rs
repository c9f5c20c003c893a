use branching::iterator::Traversal;
use branching::trie::Trie;
use rand::{distributions::Alphanumeric, thread_rng, Rng};

fn main() {
    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Create our trie and a collection of searches
    let mut trie = Trie::strings();
    let mut searches = vec![];

    // Store 10 random strings (char sequences) composed of between
    // 1 and 10 characters in our search collection and our trie.
    for _i in 0..POPULATION_SIZE {
        let entry: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(thread_rng().gen_range(1..=SIZE))
            .map(char::from)
            .collect();
        trie.add(entry.chars());
        searches.push(entry);
    }

    // Iterate depth first (lexicographic, because of the strings
    // sorter) and confirm every word is one we stored.
    println!("depth first");
    for word in trie.iter() {
        assert!(searches.contains(&word));
        println!("word: {}", word);
    }

    // The same leaves again, shallowest first.
    println!("breadth first");
    for word in trie.iter_ordered(Traversal::BreadthFirst) {
        assert!(searches.contains(&word));
        println!("word: {}", word);
    }

    // A per-call override: how long is each stored word?
    println!("lengths");
    for len in trie.iter_with(
        Traversal::DepthFirst,
        |keys| keys,
        |path: Vec<char>| path.len() - 1,
    ) {
        println!("len: {}", len);
    }
}
