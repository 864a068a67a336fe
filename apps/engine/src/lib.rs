//! Sakhi: the scripted dialogue engine behind the ASHA community
//! assistant.
//!
//! The engine maps free-text user input plus accumulated session state to
//! a structured [`BotResponse`]: the next bot utterance, an optional
//! context transition, and any user-data capture. Intent resolution is
//! keyword-based over a small immutable dataset of jobs, events, mentors,
//! and FAQs; there is no learning model and no persistence.
//!
//! ```
//! use sakhi_engine::engine::Engine;
//! use sakhi_engine::models::session::SessionState;
//! use sakhi_engine::repository::ContentRepository;
//!
//! let engine = Engine::new(ContentRepository::default());
//! let mut session = SessionState::new();
//! let response = engine.handle_turn("hi", &session);
//! session.absorb(&response);
//! assert!(response.text.starts_with("Hey there!"));
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod repository;

pub use engine::{Engine, EngineConfig};
pub use errors::AppError;
pub use models::response::BotResponse;
pub use models::session::SessionState;
pub use repository::ContentRepository;
