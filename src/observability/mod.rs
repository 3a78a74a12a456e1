//! OpenTelemetry tracing to a local file.
//!
//! ```text
//! tracing spans ──► tracing-opentelemetry ──► TracerProvider
//!                                                   │ simple processor
//!                                                   ▼
//!                           FileSpanExporter ──► OTLP/JSON ──► RotatingFile
//! ```

mod exporter;
mod file_writer;
mod init;
mod otlp_json;

pub use init::init_tracing;
