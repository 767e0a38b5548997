//! Linux entropy access via the `getrandom` system call.

use libc::{c_void, getrandom};

/// Fills a buffer with cryptographically secure random bytes from the
/// kernel entropy pool.
///
/// `getrandom` may return fewer bytes than requested (signal interruption,
/// large buffers), so the call is repeated until the buffer is full.
///
/// # Panics
///
/// Panics if `getrandom` reports an error; a kernel that cannot deliver
/// entropy is unrecoverable for this crate's purposes.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            panic!("getrandom() failed");
        }

        filled += ret as usize;
    }
}
