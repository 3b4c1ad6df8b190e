pub mod draft;
pub mod local;
pub mod rank;
pub mod scoring;
pub mod submit;
pub mod types;
