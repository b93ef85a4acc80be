// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod cache;
pub mod content;
pub mod time;

pub use cache::RecordingCache;
pub use content::{StubClient, StubContent, StubProvider};
pub use time::{FixedClock, fixed_now};
