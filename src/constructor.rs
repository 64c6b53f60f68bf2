use alloc::boxed::Box;

use crate::{any::Instance, arguments::Arguments, errors::InstantiateErrorKind};

pub(crate) trait Construct {
    fn construct(&mut self, arguments: Arguments) -> Result<Instance, InstantiateErrorKind>;
}

pub(crate) trait CloneConstruct: Construct {
    #[must_use]
    fn clone_box(&self) -> Box<dyn CloneConstruct + Send + Sync>;
}

impl<T> CloneConstruct for T
where
    T: Construct + Clone + Send + Sync + 'static,
{
    #[inline]
    fn clone_box(&self) -> Box<dyn CloneConstruct + Send + Sync> {
        Box::new(self.clone())
    }
}

pub(crate) struct BoxCloneConstructor(pub(crate) Box<dyn CloneConstruct + Send + Sync>);

impl Clone for BoxCloneConstructor {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone_box())
    }
}

impl Construct for BoxCloneConstructor {
    #[inline]
    fn construct(&mut self, arguments: Arguments) -> Result<Instance, InstantiateErrorKind> {
        self.0.construct(arguments)
    }
}

#[derive(Clone)]
pub(crate) struct ConstructorFn<F> {
    f: F,
}

impl<F, T, Err> Construct for ConstructorFn<F>
where
    F: FnMut(&mut Arguments) -> Result<T, Err>,
    T: Send + Sync + 'static,
    Err: Into<InstantiateErrorKind>,
{
    #[inline]
    fn construct(&mut self, mut arguments: Arguments) -> Result<Instance, InstantiateErrorKind> {
        match (self.f)(&mut arguments) {
            Ok(instance) => Ok(Box::new(instance)),
            Err(err) => Err(err.into()),
        }
    }
}

#[inline]
#[must_use]
pub(crate) fn boxed_constructor<F, T, Err>(f: F) -> BoxCloneConstructor
where
    F: FnMut(&mut Arguments) -> Result<T, Err> + Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
    Err: Into<InstantiateErrorKind> + 'static,
{
    BoxCloneConstructor(Box::new(ConstructorFn { f }))
}
