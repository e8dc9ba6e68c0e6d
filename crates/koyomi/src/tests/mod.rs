//! Fixture-driven integration tests over the public API.

mod api;
