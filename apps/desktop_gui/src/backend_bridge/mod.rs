//! Backend worker: owns the contact form controller on a tokio runtime.

pub mod commands;
pub mod runtime;
pub mod surface;
