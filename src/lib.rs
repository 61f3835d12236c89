//! Pass-through URL proxy: one endpoint that fetches a client-supplied URL
//! and relays the upstream response, with optional API-key and Referer
//! injection on the outbound call.

pub mod http_client;
pub mod key_policy;
pub mod proxy_error;
pub mod proxy_handler;
pub mod settings;
pub mod std_logger;
