/// Joins a child segment onto a relative remote path, never producing a leading `/`.
pub(crate) fn join_remote_path(current: &str, name: &str) -> String {
    let joined = if current.is_empty() {
        name.to_string()
    } else {
        format!("{current}/{name}")
    };
    joined.trim_matches('/').to_string()
}

/// Clamps `current + delta` into `0..len`; 0 when `len` is zero.
pub(crate) fn clamp_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}
