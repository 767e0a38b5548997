//! Operating system entropy access.
//!
//! Platform-specific implementations are selected at compile time; each
//! submodule exposes the same `sys_random` function, so the rest of the
//! crate stays fully portable.
//!
//! Failures at this layer are platform defects, not recoverable
//! conditions, and every implementation panics on them.

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
