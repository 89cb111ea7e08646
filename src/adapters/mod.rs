// Adapters layer: concrete catalog sources, the recognizer stand-in and notifiers.

pub mod catalog;
pub mod notifier;
pub mod recognizer;

pub use catalog::{build_catalog_source, load_catalog, FileCatalog, HttpCatalog, SampleCatalog};
pub use notifier::{ConsoleNotifier, TracingNotifier};
pub use recognizer::SimulatedRecognizer;
