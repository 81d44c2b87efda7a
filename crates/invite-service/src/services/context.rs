//! Service context - dependency container for services
//!
//! Holds the invitation store, the token signer, and the configured lookup
//! strategy. Built once at startup and shared read-only between requests.

use std::sync::Arc;

use invite_common::auth::JwtService;
use invite_core::traits::InvitationStore;
use invite_core::LookupStrategy;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<dyn InvitationStore>,
    jwt_service: Arc<JwtService>,
    lookup: LookupStrategy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        store: Arc<dyn InvitationStore>,
        jwt_service: Arc<JwtService>,
        lookup: LookupStrategy,
    ) -> Self {
        Self {
            store,
            jwt_service,
            lookup,
        }
    }

    /// Get the invitation store
    pub fn store(&self) -> &dyn InvitationStore {
        self.store.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the lookup strategy
    pub fn lookup(&self) -> LookupStrategy {
        self.lookup
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &"dyn InvitationStore")
            .field("jwt_service", &self.jwt_service)
            .field("lookup", &self.lookup)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    store: Option<Arc<dyn InvitationStore>>,
    jwt_service: Option<Arc<JwtService>>,
    lookup: LookupStrategy,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: Arc<dyn InvitationStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn lookup(mut self, lookup: LookupStrategy) -> Self {
        self.lookup = lookup;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.store
                .ok_or_else(|| ServiceError::internal("store is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::internal("jwt_service is required"))?,
            self.lookup,
        ))
    }
}
