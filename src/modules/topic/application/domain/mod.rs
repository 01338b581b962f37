pub mod entities;
pub mod progress;
pub mod validation;
