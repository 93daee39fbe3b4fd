// Application layer - Use cases and the text-generation port
pub mod alert_store;
pub mod chat_assistant;
pub mod diagnostic_panel;
pub mod fleet_service;
pub mod report_client;
pub mod telemetry_provider;
pub mod text_generation;

#[cfg(test)]
pub mod fakes;
