//! Use-case and HTTP-level tests for the auth crate, run against an
//! in-memory store implementing the repository traits.
