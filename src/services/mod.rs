pub mod batch;
pub mod manifest;
pub mod naming;
pub mod writer;

pub use batch::{BatchReport, BatchRunner, FileOutcome};
pub use manifest::{write_manifest, ManifestEntry, ManifestFormat};
pub use writer::{write_artifact, write_atomic};
