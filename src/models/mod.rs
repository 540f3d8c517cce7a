pub mod algorithm;
pub mod catalog;
pub mod loaders;

pub use algorithm::{AlgorithmKind, AlgorithmRecord, FrontColour, View};
pub use catalog::{AlgorithmSet, Catalog};
pub use loaders::{load_catalog_file, parse_catalog};
