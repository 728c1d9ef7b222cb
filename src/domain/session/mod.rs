//! Session domain module

mod poem_session;

pub use poem_session::PoemSession;
