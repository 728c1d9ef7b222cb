//! Poemify - AI-powered photo to poem generation CLI
//!
//! This crate provides the core functionality for turning a photo into a
//! poem using Google Gemini AI, with optional clipboard copy and plain-text
//! export.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, and errors
//! - **Application**: The poem workflow and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (filesystem, Gemini, clipboard, etc.)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
