//! Linux entropy backend (`getrandom(2)`).

use libc::{c_void, getrandom};

/// Fills `buf` from the kernel entropy pool.
///
/// `getrandom` may return fewer bytes than requested or be interrupted by a
/// signal; both cases are retried until the buffer is full.
///
/// # Panics
/// Panics on any other failure. A witness generator without entropy cannot
/// produce meaningful bases.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let rest = &mut buf[filled..];
        let ret = unsafe { getrandom(rest.as_mut_ptr() as *mut c_void, rest.len(), 0) };

        if ret < 0 {
            let err = std::io::Error::last_os_error();
            if err.kind() == std::io::ErrorKind::Interrupted {
                continue;
            }

            panic!("getrandom() failed: {err}");
        }

        filled += ret as usize;
    }
}
