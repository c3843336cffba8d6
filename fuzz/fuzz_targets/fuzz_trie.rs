#![no_main]

use lcw::dict::Trie;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Chunk arbitrary bytes into keys and check insert/contains agree.
    let mut trie = Trie::new();
    let mut keys = Vec::new();
    for chunk in data.chunks(5) {
        trie.insert_bytes(chunk);
        keys.push(chunk);
    }

    for key in &keys {
        assert!(trie.contains_bytes(key));
        // Any proper extension of a key was only inserted if it is itself
        // some chunk; probing it must not panic either way.
        let mut extended = key.to_vec();
        extended.push(b'!');
        let _ = trie.contains_bytes(&extended);
    }

    assert!(trie.len() <= keys.len());
});
