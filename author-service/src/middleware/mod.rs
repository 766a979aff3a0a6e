//! Request-scoped extractors and tower layers

pub mod list_options;
pub mod request_tracking;

pub use list_options::{ListOptions, QueryParams};
pub use request_tracking::{
    correlation_id_layer, request_id_layer, request_id_propagation_layer, sensitive_headers_layer,
};
