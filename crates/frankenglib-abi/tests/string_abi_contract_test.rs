//! Contract tests for the two custom operations, driven through the
//! extern "C" surface exactly as the consuming component calls them.

use std::ffi::{CStr, CString, c_char};
use std::ptr;

use frankenglib_abi::string_abi::{g_strdup, g_strstr_len, g_strv_length};
use frankenglib_abi::types::gchar;

fn offset_in(haystack: *const gchar, result: *mut gchar) -> Option<usize> {
    if result.is_null() {
        None
    } else {
        Some(result as usize - haystack as usize)
    }
}

#[test]
fn unbounded_search_finds_suffix() {
    let haystack = CString::new("hello world").unwrap();
    let needle = CString::new("world").unwrap();
    let hit = unsafe { g_strstr_len(haystack.as_ptr(), -1, needle.as_ptr()) };
    assert_eq!(offset_in(haystack.as_ptr(), hit), Some(6));
}

#[test]
fn unbounded_search_matches_native_strstr() {
    let cases = [
        ("hello world", "world"),
        ("hello world", "hello"),
        ("hello world", "xyz"),
        ("hello world", ""),
        ("aaaa", "aa"),
    ];
    for (h, n) in cases {
        let haystack = CString::new(h).unwrap();
        let needle = CString::new(n).unwrap();
        let ours = unsafe { g_strstr_len(haystack.as_ptr(), -1, needle.as_ptr()) };
        let native = unsafe { libc::strstr(haystack.as_ptr(), needle.as_ptr()) };
        assert_eq!(ours, native, "haystack={h:?} needle={n:?}");
    }
}

#[test]
fn bound_excludes_late_match() {
    let haystack = CString::new("hello world").unwrap();
    let needle = CString::new("world").unwrap();
    let hit = unsafe { g_strstr_len(haystack.as_ptr(), 5, needle.as_ptr()) };
    assert!(hit.is_null());
}

#[test]
fn bound_just_reaching_match_succeeds() {
    let haystack = CString::new("hello world").unwrap();
    let needle = CString::new("world").unwrap();
    let hit = unsafe { g_strstr_len(haystack.as_ptr(), 11, needle.as_ptr()) };
    assert_eq!(offset_in(haystack.as_ptr(), hit), Some(6));
}

#[test]
fn empty_needle_matches_at_start() {
    let haystack = CString::new("hello world").unwrap();
    let needle = CString::new("").unwrap();
    let hit = unsafe { g_strstr_len(haystack.as_ptr(), 11, needle.as_ptr()) };
    assert_eq!(offset_in(haystack.as_ptr(), hit), Some(0));
}

#[test]
fn embedded_nul_halts_bounded_scan() {
    // Window of 5 bytes spans the NUL at offset 2; "cd" sits past it.
    let haystack: &[u8] = b"ab\0cd\0";
    let needle = CString::new("cd").unwrap();
    let hit = unsafe {
        g_strstr_len(
            haystack.as_ptr().cast::<c_char>(),
            5,
            needle.as_ptr(),
        )
    };
    assert!(hit.is_null());
}

#[test]
fn match_before_embedded_nul_is_found() {
    let haystack: &[u8] = b"ab\0cd\0";
    let needle = CString::new("ab").unwrap();
    let hit = unsafe {
        g_strstr_len(
            haystack.as_ptr().cast::<c_char>(),
            5,
            needle.as_ptr(),
        )
    };
    assert_eq!(offset_in(haystack.as_ptr().cast(), hit), Some(0));
}

#[test]
fn bound_shorter_than_needle_fails_fast() {
    let haystack = CString::new("world").unwrap();
    let needle = CString::new("world!").unwrap();
    let hit = unsafe { g_strstr_len(haystack.as_ptr(), 5, needle.as_ptr()) };
    assert!(hit.is_null());
}

#[test]
fn repeated_calls_agree() {
    let haystack = CString::new("needle in a haystack").unwrap();
    let needle = CString::new("hay").unwrap();
    let first = unsafe { g_strstr_len(haystack.as_ptr(), 20, needle.as_ptr()) };
    let second = unsafe { g_strstr_len(haystack.as_ptr(), 20, needle.as_ptr()) };
    assert_eq!(first, second);
    assert_eq!(offset_in(haystack.as_ptr(), first), Some(12));
}

#[test]
fn strv_length_counts_to_sentinel() {
    let one = CString::new("eth0").unwrap();
    let two = CString::new("eth1").unwrap();
    let three = CString::new("lo").unwrap();
    let mut array = [
        one.as_ptr().cast_mut(),
        two.as_ptr().cast_mut(),
        three.as_ptr().cast_mut(),
        ptr::null_mut(),
    ];
    assert_eq!(unsafe { g_strv_length(array.as_mut_ptr()) }, 3);
}

#[test]
fn strv_length_of_empty_vector_is_zero() {
    let mut array: [*mut gchar; 1] = [ptr::null_mut()];
    assert_eq!(unsafe { g_strv_length(array.as_mut_ptr()) }, 0);
}

#[test]
fn strdup_copies_and_detaches() {
    let original = CString::new("10.0.2.15").unwrap();
    let copy = unsafe { g_strdup(original.as_ptr()) };
    assert!(!copy.is_null());
    assert_ne!(copy.cast_const(), original.as_ptr());
    let copied = unsafe { CStr::from_ptr(copy) };
    assert_eq!(copied.to_bytes(), b"10.0.2.15");
    unsafe { frankenglib_abi::malloc_abi::g_free(copy.cast()) };
}
