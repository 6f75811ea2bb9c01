// Composition root for the event_registrations service.
//
// Responsibilities
// - Read config from environment.
// - Pick the store backend and wire it into the use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
