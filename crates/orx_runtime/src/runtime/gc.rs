use orx_core::ObjectId;

use super::Runtime;
use crate::core::GcStats;

impl Runtime {
    /// Collects every object that is not `nil`, a class object, an argument
    /// of a running native method, or in `extra_roots`.
    pub fn collect(&mut self, extra_roots: &[ObjectId]) -> GcStats {
        let mut roots: Vec<ObjectId> = extra_roots.to_vec();
        roots.extend_from_slice(&self.gc_temp_roots);
        roots.extend(self.registry.read().iter().map(|r| r.object()));

        let marked = self.heap.mark_all(&roots);
        let swept = self.heap.sweep();
        tracing::debug!(
            marked,
            swept,
            live = self.heap.live_count(),
            bytes = self.heap.memory_bytes(),
            "gc"
        );
        GcStats { marked, swept }
    }

    /// Collects only when enough objects were allocated since the last
    /// collection.
    pub fn maybe_gc(&mut self, extra_roots: &[ObjectId]) -> Option<GcStats> {
        if self.heap.should_gc() {
            Some(self.collect(extra_roots))
        } else {
            None
        }
    }
}
