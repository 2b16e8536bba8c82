//! GraphQL transport for the browser

pub(crate) mod client;

pub use client::{get_endpoint, set_endpoint, GraphQLClient};
