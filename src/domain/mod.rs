// Domain types and value objects
mod role;
mod route;

// Re-export commonly used types to the world
pub use role::Role;
pub use route::{ClientPage, MentorPage, Route};
