//! Process hardening and exit handling.

use crate::cli::prompts;
use crate::error::AegurError;

/// Keep the password out of core dumps and away from ptrace by other users.
/// Call this first in `main()`.
pub fn harden() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    #[cfg(unix)]
    unsafe {
        let none = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        if libc::setrlimit(libc::RLIMIT_CORE, &none) != 0 {
            tracing::debug!("could not disable core dumps");
        }
    }
}

/// Report `err` and exit with its status. Never retries.
pub fn fail(err: &AegurError) -> ! {
    tracing::debug!(?err, "exiting with error");
    prompts::error(&err.to_string());
    std::process::exit(err.exit_code())
}
