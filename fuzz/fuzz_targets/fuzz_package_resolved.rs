//! Fuzz target for `Package.resolved` decoding.
//!
//! Goal: the decoder should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_package_resolved
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Raw bytes on purpose: encoding errors are part of the surface.
    let _ = acknow_package::fuzz::decode(data);
});
