// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup wiring
// - infrastructure: Postgres repositories, identity-token verifiers, clock
// - presentation: HTTP handlers and routing
// - application: ports, use cases, validation and error policy
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
