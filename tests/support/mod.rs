// tests/support/mod.rs
// The helpers and mocks modules are test-only support code used by multiple
// integration test binaries. Some symbols are unused in individual test
// crates, so dead_code / unused_imports warnings are allowed here.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use builders::*;
