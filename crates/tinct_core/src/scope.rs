//! Scoped provider container
//!
//! A [`Scope`] is an explicit, immutable chain of provided values. Parents
//! hand a scope (or a child of it) to the components they build; components
//! look values up by type. Nothing is global: a component that was never
//! given a scope containing a value cannot reach one.
//!
//! ```
//! use tinct_core::Scope;
//!
//! struct Locale(&'static str);
//!
//! let root = Scope::root();
//! assert!(root.lookup::<Locale>().is_none());
//!
//! let app = root.provide(Locale("en"));
//! assert_eq!(app.lookup::<Locale>().unwrap().0, "en");
//!
//! // Inner providers shadow outer ones
//! let nested = app.provide(Locale("ko"));
//! assert_eq!(nested.lookup::<Locale>().unwrap().0, "ko");
//! ```

use rustc_hash::FxHashMap;
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::rc::Rc;

struct ScopeNode {
    values: FxHashMap<TypeId, Rc<dyn Any>>,
    /// Type names, for Debug output
    names: Vec<&'static str>,
    parent: Option<Rc<ScopeNode>>,
}

/// Immutable chain of provided values, cheap to clone
#[derive(Clone)]
pub struct Scope {
    node: Rc<ScopeNode>,
}

impl Scope {
    /// An empty scope with no providers
    pub fn root() -> Self {
        Self {
            node: Rc::new(ScopeNode {
                values: FxHashMap::default(),
                names: Vec::new(),
                parent: None,
            }),
        }
    }

    /// Create a child scope that provides `value` in addition to everything
    /// this scope provides
    pub fn provide<T: 'static>(&self, value: T) -> Scope {
        self.provide_rc(Rc::new(value))
    }

    /// Like [`Scope::provide`] for a value that is already shared
    pub fn provide_rc<T: 'static>(&self, value: Rc<T>) -> Scope {
        let mut values: FxHashMap<TypeId, Rc<dyn Any>> = FxHashMap::default();
        values.insert(TypeId::of::<T>(), value);
        tracing::trace!(provided = type_name::<T>(), "scope: child created");

        Scope {
            node: Rc::new(ScopeNode {
                values,
                names: vec![type_name::<T>()],
                parent: Some(Rc::clone(&self.node)),
            }),
        }
    }

    /// Find the nearest provided value of type `T`
    pub fn lookup<T: 'static>(&self) -> Option<Rc<T>> {
        let key = TypeId::of::<T>();
        let mut node = Some(&self.node);
        while let Some(current) = node {
            if let Some(value) = current.values.get(&key) {
                return Rc::clone(value).downcast::<T>().ok();
            }
            node = current.parent.as_ref();
        }
        None
    }

    /// Whether a value of type `T` is provided anywhere up the chain
    pub fn contains<T: 'static>(&self) -> bool {
        self.lookup::<T>().is_some()
    }

    /// Number of scopes between this one and the root
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.node.parent.as_ref();
        while let Some(current) = node {
            depth += 1;
            node = current.parent.as_ref();
        }
        depth
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut provided = Vec::new();
        let mut node = Some(&self.node);
        while let Some(current) = node {
            provided.extend(current.names.iter().copied());
            node = current.parent.as_ref();
        }
        f.debug_struct("Scope").field("provided", &provided).finish()
    }
}
