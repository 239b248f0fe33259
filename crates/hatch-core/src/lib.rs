//! Hatch Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Hatch
//! Mix project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            hatch-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (GenerateService, Materializer)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, Renderer, Lookup, Probe)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     hatch-adapters (Infrastructure)     │
//! │ (LocalFilesystem, SimpleRenderer, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectSpec, RenderContext, FilePlan) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hatch_core::{
//!     application::{FixedAnswer, GenerateService},
//!     domain::NewOptions,
//! };
//!
//! let service = GenerateService::new(renderer, filesystem, namespace, umbrella);
//! let result = service
//!     .generate(NewOptions::new("hello_world").sup(true), &FixedAnswer(true))
//!     .unwrap();
//! println!("{}", result.summary());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FixedAnswer, GenerateService, GenerationResult, Materializer,
        ports::{Filesystem, NamespaceLookup, OverwritePrompt, TemplateRenderer, UmbrellaProbe},
    };
    pub use crate::domain::{
        FilePlan, NewOptions, ProjectShape, ProjectSpec, RelativePath, RenderContext, TemplateId,
        ToolVersion,
    };
    pub use crate::error::{HatchError, HatchResult};
}
