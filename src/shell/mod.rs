// Composition root for the storefront.
//
// Responsibilities:
// - Read config from environment.
// - Wire outbound ports into the cart, payments, notifications and orders use cases.
// - Spawn background workers (cart relay, notification consumer, push and poll channels).
// - Expose the HTTP router and the GraphQL schema.

pub mod compose;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
