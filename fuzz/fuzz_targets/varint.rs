#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: decode_varint.
//
// Catches bugs in:
// - Continuation past the 10-byte limit
// - Zero-length input
// - Values that overflow u64 in the final byte
fuzz_target!(|data: &[u8]| {
    if let Ok((_, consumed)) = skies_wire::varint::decode_varint(data) {
        assert!(consumed >= 1 && consumed <= data.len());
    }
});
