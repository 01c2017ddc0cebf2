// Composition root for the employees service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the store and wire it into the router state.
// - Expose the HTTP router to the binary and to integration tests.

pub mod config;
pub mod http;
pub mod state;
