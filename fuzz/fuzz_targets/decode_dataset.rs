#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use skies_loader::{decode_dataset, DatasetKind};

// Fuzz target: whole-dataset decode of untrusted bytes.
//
// Catches bugs in:
// - Huge or negative array counts (negative reads as empty)
// - Runaway record nesting
// - Flag bytes that misalign later fields
// - Invalid UTF-8 in strings and the backers list
#[derive(Debug, Arbitrary)]
struct Input {
    kind: u8,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let kind = DatasetKind::ALL[usize::from(input.kind) % DatasetKind::ALL.len()];
    let _ = decode_dataset(kind, &input.data);
});
