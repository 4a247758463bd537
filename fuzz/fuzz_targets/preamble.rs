#![no_main]

use libfuzzer_sys::fuzz_target;
use skies_wire::preamble::{Preamble, MAX_NAME_LEN};

// Fuzz target: framing block detection.
//
// A detected block must fit in the input, carry a short name and end on
// a 4-byte boundary; the cursor must start exactly after it.
fuzz_target!(|data: &[u8]| {
    if let Some(preamble) = Preamble::detect(data) {
        assert!(preamble.size <= data.len());
        assert!(preamble.name.len() < MAX_NAME_LEN);
        assert_eq!(preamble.size % 4, 0);

        let cursor = skies_wire::Cursor::with_preamble(data);
        assert_eq!(cursor.position(), preamble.size);
    }
});
