//! Page Components

mod book;
mod home;

pub use book::Book;
pub use home::Home;
