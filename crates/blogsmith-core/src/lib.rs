//! # Blogsmith Core
//!
//! The domain layer of the blog generation service.
//! This crate holds the request model, the collaborator ports, prompt
//! construction, text post-processing and the request pipeline. It has no
//! infrastructure dependencies: adapters live in `blogsmith-infra`.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{BlogService, Reply};
