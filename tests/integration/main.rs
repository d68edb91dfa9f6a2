//! End-to-end tests driving the full router over the in-memory store.

mod anime_test;
mod health_test;
mod helpers;
