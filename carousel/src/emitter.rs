use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

/// An ordered listener registry.
///
/// Listeners are invoked synchronously in registration order. There is no removal; a registry
/// lives as long as the panel or effect engine that owns it.
pub struct Listeners<F: ?Sized> {
    list: Vec<Arc<F>>,
}

impl<F: ?Sized> Listeners<F> {
    pub fn new() -> Self {
        Self { list: Vec::new() }
    }

    pub fn push(&mut self, listener: Arc<F>) {
        self.list.push(listener);
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.list.iter().map(|l| &**l)
    }
}

impl<F: ?Sized> Default for Listeners<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ?Sized> Clone for Listeners<F> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<F: ?Sized> fmt::Debug for Listeners<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.list.len())
            .finish()
    }
}

/// Fired once per item at layout time.
pub type ItemInitListener = dyn Fn(&crate::Item) + Send + Sync;

/// Fired every time an item becomes the snap target.
pub type ItemCenterListener = dyn Fn(usize) + Send + Sync;

/// Fired per custom effect descriptor, per item, per effect pass: `(item_index, value)`.
pub type CustomEffectListener = dyn Fn(usize, f32) + Send + Sync;

/// Fired for each configuration warning.
pub type WarningListener = dyn Fn(&crate::ConfigWarning) + Send + Sync;
