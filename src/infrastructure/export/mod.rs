//! Poem export infrastructure module

mod fs_exporter;

pub use fs_exporter::{FsPoemExporter, POEM_FILENAME};
