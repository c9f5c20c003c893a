use branching::trie::Trie;

fn main() {
    let mut trie = Trie::paths();

    // Relative and absolute paths can share the same trie.
    for path in [
        vec!["/", "usr", "local", "bin"],
        vec!["/", "usr", "share"],
        vec!["src", "lib.rs"],
        vec!["src", "trie.rs"],
        vec![".", "config"],
    ] {
        trie.add(path.into_iter().map(String::from));
    }

    // The joiner reassembles each leaf with the platform separator,
    // emitting absolute prefixes verbatim.
    for path in trie.iter() {
        println!("{}", path);
    }

    // The structural dump shows the shared segments, leaves starred.
    println!("{:?}", trie);
}
