use std::{
    cell::{Ref, RefCell, RefMut},
    rc::Rc,
};

/// A single-threaded, reference-counted resource with interior mutability.
///
/// `StResource` lets several owners observe one value of type `T` while any of
/// them may replace its contents. The engine uses it for chunk geometry: the
/// chunk keeps one clone, the presentation layer keeps another, and a rebuild
/// swaps the buffers in place so the presentation side never has to re-attach.
///
/// # Examples
///
/// ```
/// use voxel_world::core::StResource;
///
/// let resource = StResource::new(vec![1, 2, 3]);
/// let observer = resource.clone();
///
/// resource.replace(vec![4]);
/// assert_eq!(*observer.get(), vec![4]);
/// assert!(resource.ptr_eq(&observer));
/// ```
///
/// # Panics
/// - `get_mut` panics if a `get` guard is alive on the same value
/// - `get` panics if a `get_mut` guard is alive on the same value
/// - `replace` panics if any guard is alive; `try_replace` does not
///
/// Not thread-safe; the engine core is single-threaded.
#[derive(Debug)]
pub struct StResource<T> {
    resource: Rc<RefCell<T>>,
}

impl<T> StResource<T> {
    /// Creates a new `StResource` containing the given value.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Rc::new(RefCell::new(resource)),
        }
    }

    /// Returns a read-only guard over the contained value.
    pub fn get(&self) -> Ref<'_, T> {
        self.resource.borrow()
    }

    /// Returns a mutable guard over the contained value.
    pub fn get_mut(&self) -> RefMut<'_, T> {
        self.resource.borrow_mut()
    }

    /// Swaps in a new value, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        self.resource.replace(value)
    }

    /// Swaps in a new value unless a guard on it is alive.
    ///
    /// Hands `value` back as the error when the value is currently borrowed.
    pub fn try_replace(&self, value: T) -> Result<T, T> {
        match self.resource.try_borrow_mut() {
            Ok(mut current) => Ok(std::mem::replace(&mut *current, value)),
            Err(_) => Err(value),
        }
    }

    /// Whether both handles point at the same underlying value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.resource, &other.resource)
    }
}

impl<T> Clone for StResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}
