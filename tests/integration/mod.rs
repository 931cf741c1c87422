//! Integration tests against a mock backend

pub mod api_client_test;
pub mod catalog_flow_test;
pub mod pokemon_api_test;
pub mod session_test;
