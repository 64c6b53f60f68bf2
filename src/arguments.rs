use alloc::{sync::Arc, vec::IntoIter, vec::Vec};
use core::any::type_name;

use crate::{any::Value, container::Container, errors::InstantiateErrorKind};

/// Resolved constructor arguments in declaration order.
///
/// Constructor closures consume them positionally, one `take*` call per declared parameter.
pub struct Arguments {
    values: IntoIter<Value>,
    position: usize,
}

impl Arguments {
    #[inline]
    #[must_use]
    pub(crate) fn new(values: Vec<Value>) -> Self {
        Self {
            values: values.into_iter(),
            position: 0,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.len() == 0
    }

    /// Takes the next argument as a raw [`Value`]
    ///
    /// # Errors
    /// Returns [`InstantiateErrorKind::MissingArgument`] if all arguments were taken
    pub fn take_value(&mut self) -> Result<Value, InstantiateErrorKind> {
        let position = self.position;
        let value = self.values.next().ok_or(InstantiateErrorKind::MissingArgument { position })?;
        self.position += 1;
        Ok(value)
    }

    /// Takes the next argument stored as `Arc<T>`
    ///
    /// # Errors
    /// - Returns [`InstantiateErrorKind::MissingArgument`] if all arguments were taken
    /// - Returns [`InstantiateErrorKind::IncorrectType`] if the argument isn't a `T`
    pub fn take<T: Send + Sync + 'static>(&mut self) -> Result<Arc<T>, InstantiateErrorKind> {
        let position = self.position;
        self.take_value()?.downcast::<T>().map_err(|_| InstantiateErrorKind::IncorrectType {
            position,
            expected: type_name::<T>(),
        })
    }

    /// Takes the next argument and clones it out of its [`Arc`]
    ///
    /// # Errors
    /// Same as [`Self::take`]
    pub fn take_cloned<T: Clone + Send + Sync + 'static>(&mut self) -> Result<T, InstantiateErrorKind> {
        self.take::<T>().map(|value| (*value).clone())
    }

    /// Takes the next argument stored as `Arc<Arc<T>>`, the convention for unsized services
    ///
    /// # Errors
    /// Same as [`Self::take`]
    pub fn take_shared<T: ?Sized + Send + Sync + 'static>(&mut self) -> Result<Arc<T>, InstantiateErrorKind> {
        let position = self.position;
        self.take_value()?
            .downcast::<Arc<T>>()
            .map(|value| (*value).clone())
            .map_err(|_| InstantiateErrorKind::IncorrectType {
                position,
                expected: type_name::<Arc<T>>(),
            })
    }

    /// Takes the next argument as the container the factory was called with
    ///
    /// # Errors
    /// Same as [`Self::take`]
    #[inline]
    pub fn container(&mut self) -> Result<Arc<dyn Container>, InstantiateErrorKind> {
        self.take_shared::<dyn Container>()
    }
}

#[cfg(test)]
mod tests {
    use super::Arguments;
    use crate::{any::Value, errors::InstantiateErrorKind, Container, Services};

    use alloc::{sync::Arc, vec};

    #[derive(Clone, Debug, PartialEq)]
    struct Bar(u8);

    #[test]
    fn test_take_in_order() {
        let bar = Arc::new(Bar(1));
        let container: Arc<dyn Container> = Arc::new(Services::new());
        let mut args = Arguments::new(vec![
            bar.clone() as Value,
            Arc::new(container.clone()) as Value,
            Arc::new(Bar(2)) as Value,
        ]);
        assert_eq!(args.len(), 3);

        assert!(Arc::ptr_eq(&args.take::<Bar>().unwrap(), &bar));
        assert_eq!(
            Arc::as_ptr(&args.container().unwrap()).cast::<()>(),
            Arc::as_ptr(&container).cast::<()>()
        );
        assert_eq!(args.take_cloned::<Bar>().unwrap(), Bar(2));
        assert!(args.is_empty());
    }

    #[test]
    fn test_take_errors() {
        let mut args = Arguments::new(vec![Arc::new(1u8) as Value]);

        assert!(matches!(
            args.take::<Bar>(),
            Err(InstantiateErrorKind::IncorrectType { position: 0, .. })
        ));
        assert!(matches!(args.take::<u8>(), Err(InstantiateErrorKind::MissingArgument { position: 1 })));
        assert!(Arguments::empty().take_value().is_err());
    }
}
