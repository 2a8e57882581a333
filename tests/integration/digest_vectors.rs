use trunccol::engine::digest::{digest, digest_str};

#[test]
fn empty_input_matches_published_vector() {
    assert_eq!(
        digest(b"").to_hex(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn repeated_digests_are_bit_identical() {
    for input in ["", "a", "This is a test", "zzzzzzzzzz"] {
        assert_eq!(digest_str(input).as_bytes(), digest_str(input).as_bytes());
    }
}

#[test]
fn long_input_matches_published_vector() {
    let million_a = vec![b'a'; 1_000_000];
    assert_eq!(
        digest(&million_a).to_hex(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}
