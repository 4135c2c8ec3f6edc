//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate collection mutations and persistence into use-case APIs.
//! - Keep front-ends decoupled from storage details.

pub mod todo_service;
