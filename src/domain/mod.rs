// Raw request input and defensive numeric parsing
pub mod forms;

// Startup profile value objects
pub mod profile;

// Success score labelling
pub mod labels;

// Feature encoding for the trained models
pub mod ml;

// Domain-specific error types
pub mod errors;
