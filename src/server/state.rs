use crate::resolver::Resolver;

/// Shared handler state. The resolver is read-only, so no lock is needed.
pub struct AppState {
    pub resolver: Resolver,
}
