use alloc::boxed::Box;
use core::fmt;

use crate::{
    any::{Instance, TypeInfo},
    arguments::Arguments,
    constructor::{BoxCloneConstructor, Construct as _},
    errors::InstantiateErrorKind,
    parameter::Parameter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// Inspected constructor signature of one type.
/// Immutable once built and shared between threads.
pub struct TypeDescriptor {
    pub(crate) info: TypeInfo,
    pub(crate) key: &'static str,
    /// `None` if the type doesn't declare a constructor
    pub(crate) visibility: Option<Visibility>,
    pub(crate) params: Box<[Parameter]>,
    pub(crate) constructor: Option<BoxCloneConstructor>,
}

impl TypeDescriptor {
    /// Canonical name of the type
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.info.name
    }

    /// Identifier the descriptor was inspected under.
    /// Same as [`Self::name`] unless the type was requested by an alias.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    #[inline]
    #[must_use]
    pub const fn has_constructor(&self) -> bool {
        self.visibility.is_some()
    }

    /// Types without declared constructor are public
    #[inline]
    #[must_use]
    pub fn is_public(&self) -> bool {
        !matches!(self.visibility, Some(Visibility::Private))
    }

    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    /// Calls the constructor with already resolved arguments.
    /// Visibility is checked by the caller.
    pub(crate) fn construct(&self, arguments: Arguments) -> Result<Instance, InstantiateErrorKind> {
        match &self.constructor {
            Some(constructor) => constructor.clone().construct(arguments),
            None => Err(anyhow::anyhow!("type `{}` has no callable constructor", self.info.name).into()),
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.info.name)
            .field("key", &self.key)
            .field("visibility", &self.visibility)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
