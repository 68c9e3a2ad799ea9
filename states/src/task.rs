//! Task identity for async dispatches.
//!
//! A [`TaskId`] combines the `TypeId` of the state the task will update with a
//! generation counter. Each dispatch for a given state type bumps that type's
//! generation, so a completion from an earlier dispatch can be recognised as
//! stale and discarded instead of overwriting newer state.

use std::any::TypeId;
use std::collections::BTreeMap;

/// Unique identifier for a dispatched async task.
///
/// Higher generation values indicate more recently dispatched tasks of the
/// same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub(crate) fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    /// The `TypeId` of the state this task updates.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The generation counter of this task.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Per-type generation counters for the tasks dispatched through a
/// [`StateCtx`](crate::StateCtx).
#[derive(Debug, Default)]
pub(crate) struct TaskRegistry {
    generations: BTreeMap<TypeId, u64>,
}

impl TaskRegistry {
    /// Start a new task for `type_id`, invalidating any in-flight task of the
    /// same type.
    pub(crate) fn begin(&mut self, type_id: TypeId) -> TaskId {
        let generation = self.generations.entry(type_id).or_insert(0);
        *generation += 1;
        TaskId::new(type_id, *generation)
    }

    /// True if `task` is still the latest dispatch for its type.
    pub(crate) fn is_current(&self, task: TaskId) -> bool {
        self.generations.get(&task.type_id()) == Some(&task.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_bumps_generation_per_type() {
        let mut registry = TaskRegistry::default();

        let first = registry.begin(TypeId::of::<String>());
        let second = registry.begin(TypeId::of::<String>());
        let other = registry.begin(TypeId::of::<i32>());

        assert_eq!(first.type_id(), second.type_id());
        assert_eq!(first.generation(), 1);
        assert_eq!(second.generation(), 2);
        assert_eq!(other.generation(), 1);
    }

    #[test]
    fn only_latest_task_is_current() {
        let mut registry = TaskRegistry::default();

        let first = registry.begin(TypeId::of::<String>());
        assert!(registry.is_current(first));

        let second = registry.begin(TypeId::of::<String>());
        assert!(!registry.is_current(first));
        assert!(registry.is_current(second));
    }

    #[test]
    fn unknown_type_is_never_current() {
        let registry = TaskRegistry::default();
        let task = TaskId::new(TypeId::of::<String>(), 1);
        assert!(!registry.is_current(task));
    }
}
