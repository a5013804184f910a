use std::sync::{Mutex, OnceLock};

/// A value produced on demand. Generated components hold their providers
/// behind suppliers so provider construction never depends on field
/// initialization order.
pub trait Supplier<T>: Send + Sync {
    fn get(&self) -> &T;
}

/// A supplier around an already constructed value.
pub struct FixedValue<T>(T);

impl<T> FixedValue<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }
}

impl<T> Supplier<T> for FixedValue<T>
where
    T: Send + Sync,
{
    fn get(&self) -> &T {
        &self.0
    }
}

/// A thread-safe single-assignment cell: the init closure runs at most
/// once, on first use, and every subsequent call observes the same value.
///
/// If the init closure panics, the cell stays uninitialized and every
/// later [`LazyValue::get`] panics reporting the failed initializer.
///
/// # Examples
///
/// ```rust
/// use filament::LazyValue;
///
/// let lazy = LazyValue::new(|| 40 + 2);
/// assert_eq!(*lazy.get(), 42);
/// assert_eq!(*lazy.get(), 42);
/// ```
pub struct LazyValue<T> {
    cell: OnceLock<T>,
    init: Mutex<Option<Box<dyn FnOnce() -> T + Send>>>,
}

impl<T> LazyValue<T> {
    pub fn new(init: impl FnOnce() -> T + Send + 'static) -> Self {
        Self {
            cell: OnceLock::new(),
            init: Mutex::new(Some(Box::new(init))),
        }
    }

    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| {
            let init = self
                .init
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .take()
                .expect("Lazy value initializer panicked on a previous call");
            init()
        })
    }

    /// True iff the init closure has already run.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Supplier<T> for LazyValue<T>
where
    T: Send + Sync,
{
    fn get(&self) -> &T {
        LazyValue::get(self)
    }
}
