/// Directory domain: models, ordering policy and the view pipeline.
///
/// Everything here is synchronous and free of I/O.
pub mod domain;
pub mod policies;
pub mod services;
