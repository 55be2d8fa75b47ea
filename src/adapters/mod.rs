// Adapters layer: concrete implementations of the domain ports.

pub mod memory_dom;
pub mod webhook;

pub use memory_dom::{Element, MemoryDom};
pub use webhook::WebhookClient;
