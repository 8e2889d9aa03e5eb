// src/models.rs
pub mod extraction_request;
pub mod filter_config;
pub mod output_format;
pub mod source_kind;
pub mod word_count_report;

pub use extraction_request::ExtractionRequest;
pub use filter_config::FilterConfig;
pub use output_format::OutputFormat;
pub use source_kind::SourceKind;
pub use word_count_report::WordCountReport;
