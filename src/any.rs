use alloc::{boxed::Box, sync::Arc};
use core::any::{type_name, Any, TypeId};

/// Shared value handed out by a [`crate::Container`] and passed to constructors
pub type Value = Arc<dyn Any + Send + Sync>;

/// Freshly constructed object returned by [`crate::AutowiringFactory::create`]
pub type Instance = Box<dyn Any + Send + Sync>;

#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    #[inline]
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        short_name(self.name)
    }
}

/// Strips the module path, keeping generic arguments intact.
#[inline]
#[must_use]
pub(crate) fn short_name(name: &'static str) -> &'static str {
    let head = name.split_once('<').map_or(name, |(head, _)| head);
    match head.rfind("::") {
        Some(idx) => &name[idx + 2..],
        None => name,
    }
}
