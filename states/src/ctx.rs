use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use flume::{Receiver, Sender};

use crate::task::TaskRegistry;
use crate::{Error, State, TaskId};

/// A state value travelling back from an async task to the registry.
struct Envelope {
    task: TaskId,
    state_id: TypeId,
    value: Box<dyn Any + Send>,
}

/// Send-half handed to async work so it can commit state once finished.
///
/// Cheap to clone; every value sent is stamped with the [`TaskId`] the updater
/// was created under, and [`StateCtx::sync_updates`] drops values whose task
/// generation has been superseded.
#[derive(Clone)]
pub struct Updater {
    task: TaskId,
    send: Sender<Envelope>,
}

impl Updater {
    /// Queue `value` to replace the registered state of type `T`.
    ///
    /// Applied on the UI thread by the next [`StateCtx::sync_updates`] call;
    /// a send after the context is gone is silently dropped.
    pub fn set<T: State + Send>(&self, value: T) {
        let envelope = Envelope {
            task: self.task,
            state_id: TypeId::of::<T>(),
            value: Box::new(value),
        };
        if self.send.send(envelope).is_err() {
            log::debug!("Updater::set: state context dropped, discarding update");
        }
    }

    /// The task this updater reports for.
    pub fn task(&self) -> TaskId {
        self.task
    }
}

/// Type-keyed registry owning every UI state value.
pub struct StateCtx {
    storage: BTreeMap<TypeId, Box<dyn State>>,
    tasks: TaskRegistry,
    send: Sender<Envelope>,
    recv: Receiver<Envelope>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            storage: BTreeMap::new(),
            tasks: TaskRegistry::default(),
            send,
            recv,
        }
    }

    /// Register `state`, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(TypeId::of::<T>(), type_name::<T>()))
    }

    /// Shared reference to the registered state of type `T`.
    ///
    /// # Panics
    /// Panics if `T` was never added; registration happens once at app setup,
    /// so a miss is a wiring bug.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Mutable reference to the registered state of type `T`.
    ///
    /// # Panics
    /// Panics if `T` was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| {
                panic!("{}", Error::state_not_found(TypeId::of::<T>(), type_name::<T>()))
            })
    }

    /// Mutate the registered state of type `T` in place.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Start an async task that will update state of type `T`.
    ///
    /// Bumps `T`'s task generation, so any still-running task previously
    /// started for `T` has its eventual result discarded.
    pub fn begin_task<T: State>(&mut self) -> Updater {
        let task = self.tasks.begin(TypeId::of::<T>());
        Updater {
            task,
            send: self.send.clone(),
        }
    }

    /// Apply every queued [`Updater`] value whose task is still current.
    ///
    /// Call once per frame before rendering.
    pub fn sync_updates(&mut self) {
        while let Ok(envelope) = self.recv.try_recv() {
            if !self.tasks.is_current(envelope.task) {
                log::debug!(
                    "sync_updates: discarding stale update (generation {})",
                    envelope.task.generation()
                );
                continue;
            }
            match self.storage.get_mut(&envelope.state_id) {
                Some(state) => state.assign_box(envelope.value),
                None => log::error!("sync_updates: update targets an unregistered state"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_assign_impl;

    #[derive(Debug, Default, PartialEq)]
    struct Label {
        text: String,
    }

    impl State for Label {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            state_assign_impl(self, new_self);
        }
    }

    fn label_ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Label::default());
        ctx
    }

    #[test]
    fn add_and_read_state() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Label {
            text: "hello".into(),
        });
        assert_eq!(ctx.state::<Label>().text, "hello");
    }

    #[test]
    fn try_state_reports_missing_type() {
        let ctx = StateCtx::new();
        let err = ctx.try_state::<Label>().unwrap_err();
        assert!(err.to_string().contains("State not found"));
    }

    #[test]
    fn update_mutates_in_place() {
        let mut ctx = label_ctx();
        ctx.update::<Label>(|label| label.text.push_str("abc"));
        assert_eq!(ctx.state::<Label>().text, "abc");
    }

    #[test]
    fn sync_applies_current_task_update() {
        let mut ctx = label_ctx();

        let updater = ctx.begin_task::<Label>();
        updater.set(Label {
            text: "fetched".into(),
        });

        ctx.sync_updates();
        assert_eq!(ctx.state::<Label>().text, "fetched");
    }

    #[test]
    fn sync_discards_superseded_task_update() {
        let mut ctx = label_ctx();

        let stale = ctx.begin_task::<Label>();
        let current = ctx.begin_task::<Label>();

        stale.set(Label {
            text: "stale".into(),
        });
        current.set(Label {
            text: "current".into(),
        });

        ctx.sync_updates();
        assert_eq!(ctx.state::<Label>().text, "current");

        // A late send from the stale task is dropped too.
        stale.set(Label {
            text: "late stale".into(),
        });
        ctx.sync_updates();
        assert_eq!(ctx.state::<Label>().text, "current");
    }

    #[test]
    fn updates_survive_until_synced() {
        let mut ctx = label_ctx();

        let updater = ctx.begin_task::<Label>();
        updater.set(Label { text: "one".into() });

        // Not yet applied.
        assert_eq!(ctx.state::<Label>().text, "");

        ctx.sync_updates();
        assert_eq!(ctx.state::<Label>().text, "one");
    }
}
