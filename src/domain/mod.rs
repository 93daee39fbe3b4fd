// Domain layer - Plain data types shared by every other layer
pub mod alert;
pub mod chat;
pub mod diagnostic;
pub mod fleet;
pub mod partner;
pub mod telemetry;
