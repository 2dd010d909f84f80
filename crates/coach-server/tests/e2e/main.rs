//! End-to-end tests: a real listener on 127.0.0.1:0, a stub provider, reqwest as the client.

mod analyze;
mod common;
mod models;
