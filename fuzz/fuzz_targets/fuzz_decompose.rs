#![no_main]

use arbitrary::Arbitrary;
use lcw::dict::Trie;
use lcw::scan::is_compound;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    words: Vec<&'a [u8]>,
    candidate: &'a [u8],
}

/// Reference decomposer without memoization: same split loop, same
/// short-circuiting, exponential in the worst case.
fn naive_compound(s: &[u8], dict: &Trie) -> bool {
    for i in 1..s.len().saturating_sub(1) {
        if dict.contains_bytes(&s[..i])
            && (naive_compound(&s[i..], dict) || dict.contains_bytes(&s[i..]))
        {
            return true;
        }
    }
    false
}

fuzz_target!(|input: Input| {
    // Keep the naive reference tractable.
    if input.candidate.len() > 20 || input.words.len() > 64 {
        return;
    }

    let mut trie = Trie::new();
    for word in &input.words {
        if word.len() <= 16 {
            trie.insert_bytes(word);
        }
    }

    // The memoized decomposer must agree with the naive reference.
    let candidate = String::from_utf8_lossy(input.candidate).into_owned();
    assert_eq!(
        is_compound(&candidate, &trie),
        naive_compound(candidate.as_bytes(), &trie)
    );
});
