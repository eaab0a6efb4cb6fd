//! Fuzz target for signature splitting and signer recovery.
//!
//! ## Running
//!
//! ```bash
//! cd crates/cc-signature
//! cargo +nightly fuzz run fuzz_recover
//! ```

#![no_main]

use cc_signature::{recover, split, SignatureError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    message_hash: [u8; 32],
    signature: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    // Must never panic, whatever the bytes.
    let result = recover(&input.message_hash, &input.signature);

    if input.signature.len() != 65 {
        assert_eq!(
            result,
            Err(SignatureError::InvalidSignatureLength {
                actual: input.signature.len()
            })
        );
        return;
    }

    let parts = split(&input.signature).expect("65 bytes always split");
    assert_eq!(parts.to_bytes().as_slice(), input.signature.as_slice());

    // Deterministic
    assert_eq!(result, recover(&input.message_hash, &input.signature));
});
