//! Photo input infrastructure module

mod fs_source;

pub use fs_source::FsPhotoSource;
