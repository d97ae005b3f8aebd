//! Local stand-ins for the external services used by the backend.

pub mod sheets;
