use crate::obstacles::{BoxedObstacle, Obstacle};
use num_traits::Float;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Stable handle to an obstacle held by the registry.
///
/// The registry owns the obstacles it stores; callers keep ids and address
/// obstacles through them, so removing an obstacle can never leave a
/// dangling reference behind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ObstacleId(u64);

struct Registered<F: Float> {
    id: ObstacleId,
    obstacle: BoxedObstacle<F>,
}

struct Slots<F: Float> {
    fixed: Vec<Registered<F>>,
    dynamic: Vec<Registered<F>>,
}

/// The two obstacle collections consulted by the planner: fixed obstacles
/// (arena furniture, registered at setup) and dynamic obstacles (moving
/// objects, mutated concurrently by a perception thread).
///
/// A single lock guards both collections. Mutations hold it for the duration
/// of the mutation; planning queries hold it for their whole read phase
/// through [`ObstacleRegistry::read`], so a concurrent mutation can never
/// interleave inside one query.
pub struct ObstacleRegistry<F: Float> {
    slots: Mutex<Slots<F>>,
    next_id: AtomicU64,
}

impl<F: Float> ObstacleRegistry<F> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(Slots {
                fixed: Vec::new(),
                dynamic: Vec::new(),
            }),
            next_id: AtomicU64::new(0),
        }
    }

    fn allocate_id(&self) -> ObstacleId {
        ObstacleId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn lock(&self) -> MutexGuard<'_, Slots<F>> {
        self.slots.lock().expect("obstacle registry lock poisoned")
    }

    /// Registers a fixed obstacle and returns its handle.
    pub fn add_fixed(&self, obstacle: BoxedObstacle<F>) -> ObstacleId {
        let id = self.allocate_id();
        self.lock().fixed.push(Registered { id, obstacle });
        id
    }

    /// Removes a fixed obstacle, returning it if the id was registered.
    pub fn remove_fixed(&self, id: ObstacleId) -> Option<BoxedObstacle<F>> {
        let mut slots = self.lock();
        let index = slots.fixed.iter().position(|r| r.id == id)?;
        Some(slots.fixed.remove(index).obstacle)
    }

    pub fn clear_fixed(&self) {
        self.lock().fixed.clear();
    }

    /// Registers a dynamic obstacle and returns its handle.
    pub fn add_dynamic(&self, obstacle: BoxedObstacle<F>) -> ObstacleId {
        let id = self.allocate_id();
        self.lock().dynamic.push(Registered { id, obstacle });
        id
    }

    /// Removes a dynamic obstacle, returning it if the id was registered.
    pub fn remove_dynamic(&self, id: ObstacleId) -> Option<BoxedObstacle<F>> {
        let mut slots = self.lock();
        let index = slots.dynamic.iter().position(|r| r.id == id)?;
        Some(slots.dynamic.remove(index).obstacle)
    }

    pub fn clear_dynamic(&self) {
        self.lock().dynamic.clear();
    }

    /// Flips the enabled flag of the obstacle with the given id, in either
    /// collection. Returns false if the id is not registered.
    pub fn set_enabled(&self, id: ObstacleId, enabled: bool) -> bool {
        let mut slots = self.lock();
        let slots = &mut *slots;
        let registered = slots
            .fixed
            .iter_mut()
            .chain(slots.dynamic.iter_mut())
            .find(|r| r.id == id);
        match registered {
            Some(r) => {
                r.obstacle.enable(enabled);
                true
            }
            None => false,
        }
    }

    /// Mutates a dynamic obstacle in place under the lock; the perception
    /// thread's hook for moving an obstacle (e.g. `set_center`). Returns
    /// None if the id is not registered.
    pub fn update_dynamic<R>(
        &self,
        id: ObstacleId,
        f: impl FnOnce(&mut dyn Obstacle<F>) -> R,
    ) -> Option<R> {
        let mut slots = self.lock();
        let registered = slots.dynamic.iter_mut().find(|r| r.id == id)?;
        let obstacle: &mut dyn Obstacle<F> = registered.obstacle.as_mut();
        Some(f(obstacle))
    }

    pub fn len_fixed(&self) -> usize {
        self.lock().fixed.len()
    }

    pub fn len_dynamic(&self) -> usize {
        self.lock().dynamic.len()
    }

    /// Takes the registry lock for the caller's entire read phase. The
    /// planner holds the returned guard across pose validation, graph
    /// building or a recompute check, so it always sees one consistent
    /// obstacle snapshot.
    pub fn read(&self) -> RegistryReadGuard<'_, F> {
        RegistryReadGuard { slots: self.lock() }
    }
}

impl<F: Float> Default for ObstacleRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Locked view over both obstacle collections.
pub struct RegistryReadGuard<'a, F: Float> {
    slots: MutexGuard<'a, Slots<F>>,
}

impl<F: Float> RegistryReadGuard<'_, F> {
    pub fn fixed(&self) -> impl Iterator<Item = &dyn Obstacle<F>> {
        self.slots
            .fixed
            .iter()
            .map(|r| -> &dyn Obstacle<F> { r.obstacle.as_ref() })
    }

    pub fn dynamic(&self) -> impl Iterator<Item = &dyn Obstacle<F>> {
        self.slots
            .dynamic
            .iter()
            .map(|r| -> &dyn Obstacle<F> { r.obstacle.as_ref() })
    }

    /// Fixed obstacles followed by dynamic obstacles.
    pub fn all(&self) -> impl Iterator<Item = &dyn Obstacle<F>> {
        self.fixed().chain(self.dynamic())
    }
}
