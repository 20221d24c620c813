//! Artifacts module.
//!
//! The create-artifact form fields, the submitted payload, the created
//! artifact record, and the `ArtifactSubmission` collaborator that accepts
//! new artifacts.

pub mod artifact;
pub mod form;
pub mod submission;

pub use artifact::{Artifact, NewArtifact};
pub use form::ArtifactForm;
pub use submission::{ArtifactSubmission, InMemoryArtifactStore, SubmissionError};
