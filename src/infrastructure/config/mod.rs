//! Configuration infrastructure module

mod xdg;

pub use xdg::XdgConfigStore;
