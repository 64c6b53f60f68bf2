use alloc::{boxed::Box, vec::Vec};
use core::marker::PhantomData;

use crate::{
    any::TypeInfo,
    arguments::Arguments,
    constructor::{boxed_constructor, BoxCloneConstructor},
    descriptor::{TypeDescriptor, Visibility},
    errors::InstantiateErrorKind,
    parameter::Param,
    Parameter,
};

/// Type whose constructor signature can be inspected by the factory.
///
/// This is the compile-time replacement of runtime reflection:
/// the implementation declares the constructor parameters and how to build `Self` from resolved [`Arguments`].
///
/// # Examples
/// ```rust
/// use autowiring::{Inspectable, Param, Signature};
/// use std::sync::Arc;
///
/// #[derive(Default)]
/// struct Bar;
///
/// impl Inspectable for Bar {
///     fn signature() -> Signature<Self> {
///         Signature::implicit()
///     }
/// }
///
/// struct Foo {
///     bar: Arc<Bar>,
///     retries: u8,
/// }
///
/// impl Inspectable for Foo {
///     fn signature() -> Signature<Self> {
///         Signature::public(|args| {
///             Ok::<_, autowiring::InstantiateErrorKind>(Foo {
///                 bar: args.take()?,
///                 retries: args.take_cloned()?,
///             })
///         })
///         .param(Param::<Bar>::dependency("bar"))
///         .param(Param::<u8>::dependency("retries").with_default(3))
///     }
/// }
/// ```
pub trait Inspectable: Send + Sync + Sized + 'static {
    fn signature() -> Signature<Self>;
}

/// Constructor signature of `T`
pub struct Signature<T> {
    visibility: Option<Visibility>,
    params: Vec<Parameter>,
    constructor: Option<BoxCloneConstructor>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync + 'static> Signature<T> {
    /// Type without declared constructor, built with [`Default`]
    #[inline]
    #[must_use]
    pub fn implicit() -> Self
    where
        T: Default,
    {
        Self {
            visibility: None,
            params: Vec::new(),
            constructor: Some(boxed_constructor(|_: &mut Arguments| Ok::<_, InstantiateErrorKind>(T::default()))),
            _marker: PhantomData,
        }
    }

    /// Public constructor. Parameters are declared with [`Self::param`] in the order `f` takes them.
    #[inline]
    #[must_use]
    pub fn public<F, Err>(f: F) -> Self
    where
        F: FnMut(&mut Arguments) -> Result<T, Err> + Clone + Send + Sync + 'static,
        Err: Into<InstantiateErrorKind> + 'static,
    {
        Self {
            visibility: Some(Visibility::Public),
            params: Vec::new(),
            constructor: Some(boxed_constructor(f)),
            _marker: PhantomData,
        }
    }

    /// Constructor that can't be called from outside, for types built only by their own factory methods
    #[inline]
    #[must_use]
    pub fn private() -> Self {
        Self {
            visibility: Some(Visibility::Private),
            params: Vec::new(),
            constructor: None,
            _marker: PhantomData,
        }
    }

    /// Declares the next constructor parameter
    ///
    /// # Panics
    /// Panics if the signature is [`Self::implicit`], which has no declared constructor to take parameters
    #[inline]
    #[must_use]
    pub fn param<P: ?Sized>(mut self, param: Param<P>) -> Self {
        assert!(self.visibility.is_some(), "implicit constructor can't declare parameters");

        let position = self.params.len();
        self.params.push(param.into_parameter(position));
        self
    }

    #[must_use]
    pub(crate) fn into_descriptor(self) -> TypeDescriptor {
        let info = TypeInfo::of::<T>();
        TypeDescriptor {
            info,
            key: info.name,
            visibility: self.visibility,
            params: Box::from(self.params),
            constructor: self.constructor,
        }
    }
}

#[must_use]
pub(crate) fn describe<T: Inspectable>() -> TypeDescriptor {
    T::signature().into_descriptor()
}
