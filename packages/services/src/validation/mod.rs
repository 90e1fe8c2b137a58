pub mod field_validators;
pub mod pipeline;
pub mod result;
pub mod rule;

// Re-export common types
pub use field_validators::FieldValidator;
pub use pipeline::ValidationPipeline;
pub use result::ValidationResult;
pub use rule::Rule;
