use alloc::sync::Arc;
use core::{any::type_name, fmt, marker::PhantomData};

use crate::{any::Value, container::Container};

const BUILTIN_TYPE_NAMES: &[&str] = &[
    "()",
    "bool",
    "char",
    "str",
    "alloc::string::String",
    "i8",
    "i16",
    "i32",
    "i64",
    "i128",
    "isize",
    "u8",
    "u16",
    "u32",
    "u64",
    "u128",
    "usize",
    "f32",
    "f64",
];

/// Builtin types can't be resolved as services, so they are looked up by parameter name.
/// References of any kind count as builtin.
#[inline]
#[must_use]
pub(crate) fn is_builtin(type_name: &str) -> bool {
    BUILTIN_TYPE_NAMES.contains(&type_name) || type_name.starts_with('&')
}

/// Descriptor of one constructor parameter
#[derive(Clone)]
pub struct Parameter {
    pub(crate) position: usize,
    pub(crate) name: &'static str,
    pub(crate) declared_type: Option<&'static str>,
    pub(crate) builtin: bool,
    pub(crate) default: Option<Value>,
}

impl Parameter {
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// `None` for untyped parameters
    #[inline]
    #[must_use]
    pub const fn declared_type(&self) -> Option<&'static str> {
        self.declared_type
    }

    #[inline]
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        self.builtin
    }

    #[inline]
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Declared type if the parameter is resolvable as a service
    #[inline]
    #[must_use]
    pub(crate) fn service_type(&self) -> Option<&'static str> {
        match self.declared_type {
            Some(declared_type) if !self.builtin => Some(declared_type),
            _ => None,
        }
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("position", &self.position)
            .field("name", &self.name)
            .field("declared_type", &self.declared_type)
            .field("builtin", &self.builtin)
            .field("has_default", &self.default.is_some())
            .finish()
    }
}

/// Typed builder of a [`Parameter`].
///
/// `T` is the declared type, so a default value can only be of that type.
pub struct Param<T: ?Sized> {
    inner: Parameter,
    _marker: PhantomData<fn() -> Arc<T>>,
}

impl<T: ?Sized + 'static> Param<T> {
    #[inline]
    #[must_use]
    fn with_type(name: &'static str, declared_type: &'static str, builtin: bool) -> Self {
        Self {
            inner: Parameter {
                position: 0,
                name,
                declared_type: Some(declared_type),
                builtin,
                default: None,
            },
            _marker: PhantomData,
        }
    }

    /// Parameter resolved by its declared type.
    /// Primitive types are detected and resolved by name instead.
    #[inline]
    #[must_use]
    pub fn dependency(name: &'static str) -> Self {
        let declared_type = type_name::<T>();
        Self::with_type(name, declared_type, is_builtin(declared_type))
    }

    /// Parameter resolved by its name, whatever its declared type is
    #[inline]
    #[must_use]
    pub fn scalar(name: &'static str) -> Self {
        Self::with_type(name, type_name::<T>(), true)
    }
}

impl<T: Send + Sync + 'static> Param<T> {
    /// Value bound when no other rule resolves the parameter
    #[inline]
    #[must_use]
    pub fn with_default(mut self, value: T) -> Self {
        self.inner.default = Some(Arc::new(value));
        self
    }
}

impl Param<dyn Container> {
    /// Parameter bound to the container the factory was called with
    #[inline]
    #[must_use]
    pub fn container(name: &'static str) -> Self {
        Self::dependency(name)
    }
}

/// Declared type of parameters without one
#[derive(Debug)]
pub enum Untyped {}

impl Param<Untyped> {
    /// Parameter without declared type, resolved by its name
    #[inline]
    #[must_use]
    pub fn untyped(name: &'static str) -> Self {
        Self {
            inner: Parameter {
                position: 0,
                name,
                declared_type: None,
                builtin: true,
                default: None,
            },
            _marker: PhantomData,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_default_value<V: Send + Sync + 'static>(mut self, value: V) -> Self {
        self.inner.default = Some(Arc::new(value));
        self
    }
}

impl<T: ?Sized> Param<T> {
    #[inline]
    #[must_use]
    pub(crate) fn into_parameter(self, position: usize) -> Parameter {
        Parameter { position, ..self.inner }
    }
}
