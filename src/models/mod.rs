//! Data models for Libreria

pub mod book;
pub mod category;
pub mod user;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use category::{BookCategory, Category};
pub use user::{Role, User, UserClaims};
