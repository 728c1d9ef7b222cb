//! Photo domain module

mod photo_data;

pub use photo_data::{ImageMimeType, PhotoData};
