//! Host stack growth for nested method calls.
//!
//! Every `?` and constructor call recurses on the native stack. Without a
//! configured depth limit, a deeply recursive Glass program would overflow
//! it, so each call runs through [`ensure_sufficient_stack`].

/// Run `f`, first moving to a freshly allocated stack segment if less than
/// the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    const RED_ZONE: usize = 128 * 1024;
    const SEGMENT: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
