//! Reference Module - immutable artifacts loaded at startup

pub mod dataset;
pub mod population;
pub mod store;

pub use dataset::DatasetOptions;
pub use population::ReferencePopulation;
pub use store::{ReferenceStore, StoreMetadata};
