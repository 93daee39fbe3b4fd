// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod gemini_generator;
pub mod http_response;
pub mod ndjson_stream;
