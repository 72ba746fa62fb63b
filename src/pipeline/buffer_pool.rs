use tracing::trace;

use crate::common::{Error, Result};
use crate::plane::Plane;

/// Number of scratch planes. Two is exactly what the stage chain needs at
/// its widest point (ping-pong between filter passes).
pub const POOL_SLOTS: usize = 2;

/// Lease on one pool slot.
///
/// Deliberately neither `Clone` nor `Copy`: releasing consumes the handle,
/// so a double release cannot compile.
#[derive(Debug)]
pub struct PoolHandle {
    slot: usize,
}

impl PoolHandle {
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// Fixed pool of intermediate planes, allocated once at startup.
///
/// Every frame borrows planes from here instead of allocating, so steady
/// state processing performs no heap allocation at all. `allocation_count`
/// and `storage_bytes` exist so tests can prove that.
#[derive(Debug)]
pub struct BufferPool {
    planes: [Plane; POOL_SLOTS],
    in_use: [bool; POOL_SLOTS],
    allocations: usize,
}

fn alloc_plane(width: u32, height: u32) -> Result<Plane> {
    let len = width as usize * height as usize;
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|e| {
        Error::Initialization(format!(
            "cannot allocate {}x{} scratch plane: {e}",
            width, height
        ))
    })?;
    data.resize(len, 0.0);
    Plane::from_data(width, height, data)
}

impl BufferPool {
    pub fn new(width: u32, height: u32) -> Result<BufferPool> {
        let pool = BufferPool {
            planes: [alloc_plane(width, height)?, alloc_plane(width, height)?],
            in_use: [false; POOL_SLOTS],
            allocations: POOL_SLOTS,
        };
        trace!(width, height, slots = POOL_SLOTS, "buffer pool ready");
        Ok(pool)
    }

    /// Leases a free plane. Fails with [`Error::PoolExhausted`] when every
    /// slot is out; that means a caller is holding more planes than the
    /// stage chain ever needs at once.
    pub fn acquire(&mut self) -> Result<PoolHandle> {
        for (slot, used) in self.in_use.iter_mut().enumerate() {
            if !*used {
                *used = true;
                return Ok(PoolHandle { slot });
            }
        }
        Err(Error::PoolExhausted)
    }

    /// Returns a leased plane. Consuming the handle is what makes the slot
    /// reusable.
    pub fn release(&mut self, handle: PoolHandle) {
        self.in_use[handle.slot] = false;
    }

    pub fn plane(&self, handle: &PoolHandle) -> &Plane {
        &self.planes[handle.slot]
    }

    pub fn plane_mut(&mut self, handle: &PoolHandle) -> &mut Plane {
        &mut self.planes[handle.slot]
    }

    /// Borrows two distinct leased planes at once, one read-only and one
    /// writable. Panics if both handles name the same slot, which the
    /// move-only handles make impossible through the public API.
    pub fn src_dst(&mut self, src: &PoolHandle, dst: &PoolHandle) -> (&Plane, &mut Plane) {
        let [first, second] = &mut self.planes;
        match (src.slot, dst.slot) {
            (0, 1) => (first, second),
            (1, 0) => (second, first),
            (a, b) => panic!("src_dst needs distinct slots, got {a} and {b}"),
        }
    }

    /// Total planes allocated since construction. Stays at [`POOL_SLOTS`]
    /// for the lifetime of the pool.
    pub fn allocation_count(&self) -> usize {
        self.allocations
    }

    /// Bytes held across all slots, spare capacity included.
    pub fn storage_bytes(&self) -> usize {
        self.planes.iter().map(|p| p.storage_bytes()).sum()
    }

    /// Clears every lease. Called after a failed frame whose handles were
    /// dropped mid-chain.
    pub(crate) fn recover(&mut self) {
        self.in_use = [false; POOL_SLOTS];
    }
}
