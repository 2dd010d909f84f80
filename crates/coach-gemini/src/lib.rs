//! Gemini integration for Prompt Coach
//!
//! This crate provides the Gemini implementation of the LLMProvider trait.

mod client;
mod config;


pub use client::GeminiClient;
pub use config::{GeminiConfig, DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

// Re-export core types for convenience
pub use coach_core::{Credential, Error, GenerationRequest, GenerationResult, LLMProvider, Result};
