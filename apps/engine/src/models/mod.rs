pub mod content;
pub mod response;
pub mod session;
