use gpui::SharedString;

/// Id derived from the caller's source location, stable across renders.
#[track_caller]
pub fn stable_auto_id(prefix: &str) -> SharedString {
    let location = std::panic::Location::caller();
    let seed = format!(
        "{prefix}:{}:{}:{}",
        location.file(),
        location.line(),
        location.column()
    );
    format!("{prefix}-{:016x}", fnv1a64(seed.as_bytes())).into()
}

pub fn field_slot_id(key: &str, slot: &str) -> SharedString {
    format!("{key}::{slot}").into()
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001b3;

    bytes.iter().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(PRIME)
    })
}
