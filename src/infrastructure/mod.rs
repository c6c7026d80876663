// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Filesystem and network plumbing that supports the services but is not
// part of the domain.

pub mod image_store;

pub use image_store::ImageStore;
