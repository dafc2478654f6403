//! The fatal assertion path must terminate the process and never return
//! control. Verified in a forked child so the test binary survives.

use frankenglib_abi::g_assert;

#[test]
fn failed_assert_terminates_the_process() {
    unsafe {
        let pid = libc::fork();
        assert!(pid >= 0, "fork failed");

        if pid == 0 {
            // Child. Quiet stderr so the abort diagnostic does not bleed
            // into the test output.
            let devnull = libc::open(c"/dev/null".as_ptr(), libc::O_WRONLY);
            if devnull >= 0 {
                libc::dup2(devnull, libc::STDERR_FILENO);
            }
            g_assert!(1 + 1 == 3);
            // Must be unreachable: a clean exit here fails the parent.
            libc::_exit(0);
        }

        let mut status: libc::c_int = 0;
        let waited = libc::waitpid(pid, &mut status, 0);
        assert_eq!(waited, pid);
        assert!(
            libc::WIFSIGNALED(status),
            "child exited normally, fatal path returned control (status={status})"
        );
        assert_eq!(libc::WTERMSIG(status), libc::SIGABRT);
    }
}

#[test]
fn passing_assert_returns_control() {
    g_assert!(2 + 2 == 4);
}
