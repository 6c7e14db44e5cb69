pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod encoder;
pub mod error;
pub mod gemini;
pub mod interactive;
pub mod orchestrator;
pub mod scanner;
pub mod session;
