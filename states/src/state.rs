use std::any::Any;

/// A value stored in the [`StateCtx`](crate::StateCtx) registry, keyed by its type.
///
/// States are plain data. Implementations forward `as_any`/`as_any_mut` to
/// `self` and implement `assign_box` with [`state_assign_impl`]:
///
/// ```ignore
/// impl State for PostsViewState {
///     fn as_any(&self) -> &dyn Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn Any { self }
///     fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
///         state_assign_impl(self, new_self);
///     }
/// }
/// ```
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace this state with a boxed new value of the same concrete type.
    ///
    /// Used by [`StateCtx::sync_updates`](crate::StateCtx::sync_updates) to
    /// apply values sent through an [`Updater`](crate::Updater).
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` implementation.
///
/// A type mismatch is a wiring bug; it is logged and the old value kept rather
/// than tearing down the UI thread.
pub fn state_assign_impl<T: State + 'static>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *this = *new_self,
        Err(_) => log::error!(
            "assign_box: value is not a {}, keeping previous state",
            std::any::type_name::<T>()
        ),
    }
}
