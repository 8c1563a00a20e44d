//! Best-effort reclamation of transient memory between trials.
//!
//! Trial buffers are dropped before this runs. On glibc the freed pages
//! stay mapped in the heap until trimmed; the trim runs synchronously and
//! finishes before the next trial starts its timer.

#[cfg(all(target_os = "linux", target_env = "gnu"))]
mod platform {
    pub fn reclaim() -> bool {
        // malloc_trim returns 1 when memory was released back to the OS.
        unsafe { libc::malloc_trim(0) == 1 }
    }
}

#[cfg(not(all(target_os = "linux", target_env = "gnu")))]
mod platform {
    pub fn reclaim() -> bool {
        // Dropping the buffers is all we can do here.
        false
    }
}

/// Hand freed heap memory back to the OS where the platform allows it.
///
/// Returns `true` if any memory was released.
pub fn reclaim() -> bool {
    platform::reclaim()
}
