//! Stack growth for the recursive type walk.
//!
//! Type descriptors come from outside the process and nest arbitrarily
//! (`[][][]...*map[string][]T`), so each synthesizer step runs with at
//! least `RED_ZONE` bytes of stack, growing by `STACK_PER_RECURSION`.

const RED_ZONE: usize = 100 * 1024;

const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
