//! Test helpers para ctxlog-server.

#![allow(dead_code, unused_imports)]

pub mod client;

pub use client::{TestClient, TestResponse, buffered_context, client, records};
