//! Dependency Scopes
//!
//! Thin wrappers around the `dill` IoC container.
//!
//! ```text
//! ServiceScope (mutable)                FixtureScope (read-only)
//! ──────────────────────                ────────────────────────
//! add_value(..) replaces by type  →     [local Catalog, root Catalog]
//!            ↓ build()                              ↓ resolve::<T>()
//!       Catalog (sealed)                local first, then the root
//! ```
//!
//! The root scope is populated while an engine is being built: the system
//! configures it, the converter is injected into it and the system registers
//! its services into it. It is then sealed into a [`Catalog`]. Every nested
//! scope seals its own local catalog and looks there before falling back to
//! the root, so a local binding overrides the root one and registrations made
//! on a nested scope never reach the root.

use dill::{Catalog, CatalogBuilder};
use std::any::{TypeId, type_name};
use std::fmt;
use std::sync::Arc;
use tale_domain::error::{Error, Result};
use tale_domain::ports::ObjectConverter;

type Binding = Box<dyn FnOnce(&mut CatalogBuilder) + Send>;

struct Registration {
    type_id: TypeId,
    type_name: &'static str,
    bind: Binding,
}

/// A dependency scope that accepts registrations
///
/// At most one binding exists per type; registering a type again replaces
/// the earlier value.
pub struct ServiceScope {
    registrations: Vec<Registration>,
}

impl ServiceScope {
    /// Create an empty scope
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
        }
    }

    /// Register a value, resolvable by its concrete type
    pub fn add_value<T>(&mut self, value: T) -> &mut Self
    where
        T: Send + Sync + 'static,
    {
        let registration = Registration {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            bind: Box::new(move |builder: &mut CatalogBuilder| {
                builder.add_value(value);
            }),
        };
        match self
            .registrations
            .iter()
            .position(|existing| existing.type_id == registration.type_id)
        {
            Some(position) => self.registrations[position] = registration,
            None => self.registrations.push(registration),
        }
        self
    }

    /// Register a shared value, resolvable with [`FixtureScope::resolve_shared`]
    ///
    /// Use this for trait objects, e.g. `Arc<dyn ObjectConverter>`.
    pub fn add_shared<T>(&mut self, value: Arc<T>) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.add_value(value)
    }

    /// Type names registered on this scope, in registration order
    pub fn registered(&self) -> Vec<&'static str> {
        self.registrations
            .iter()
            .map(|registration| registration.type_name)
            .collect()
    }

    /// Whether a value of type `T` is registered on this scope
    pub fn is_registered<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.registrations
            .iter()
            .any(|registration| registration.type_id == type_id)
    }

    /// Seal the scope into an immutable catalog
    pub fn build(self) -> Catalog {
        let mut builder = CatalogBuilder::new();
        for registration in self.registrations {
            (registration.bind)(&mut builder);
        }
        builder.build()
    }
}

impl Default for ServiceScope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceScope")
            .field("registered", &self.registered())
            .finish()
    }
}

/// A read-only scope used to construct fixtures
#[derive(Clone)]
pub struct FixtureScope {
    // Innermost first
    layers: Vec<Arc<Catalog>>,
}

impl FixtureScope {
    /// Wrap a single sealed catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            layers: vec![Arc::new(catalog)],
        }
    }

    /// A scope that resolves from `local` and falls back to `root`
    pub fn nested(local: Catalog, root: Arc<Catalog>) -> Self {
        Self {
            layers: vec![Arc::new(local), root],
        }
    }

    /// Resolve a value registered with [`ServiceScope::add_value`]
    ///
    /// The innermost catalog binding `T` wins.
    pub fn resolve<T>(&self) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let mut last_error = None;
        for layer in &self.layers {
            match layer.get_one::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => last_error = Some(e.to_string()),
            }
        }
        Err(Error::unresolved(
            type_name::<T>(),
            last_error.unwrap_or_else(|| "scope has no catalogs".to_string()),
        ))
    }

    /// Resolve a value registered with [`ServiceScope::add_shared`]
    pub fn resolve_shared<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve::<Arc<T>>().map(|shared| (*shared).clone())
    }

    /// Resolve the conversion rules injected by the engine builder
    pub fn converter(&self) -> Result<Arc<dyn ObjectConverter>> {
        self.resolve_shared::<dyn ObjectConverter>()
    }

    /// Number of catalogs consulted by lookups
    pub fn depth(&self) -> usize {
        self.layers.len()
    }
}

impl fmt::Debug for FixtureScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureScope")
            .field("depth", &self.layers.len())
            .finish()
    }
}
