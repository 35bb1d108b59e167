use soroban_sdk::String;

/// Most bytes a single UTF-8 encoded character can take.
pub const MAX_UTF8_CHAR_BYTES: usize = 4;

/// Counts the characters of `value`.
///
/// `MAX_BYTES` bounds the copy buffer; callers pass `limit * MAX_UTF8_CHAR_BYTES` so any
/// string of at most `limit` characters fits. Returns `None` when the value is longer
/// than the buffer, and so over the limit, or is not valid UTF-8.
pub fn char_count<const MAX_BYTES: usize>(value: &String) -> Option<u32> {
    let len = value.len() as usize;
    if len > MAX_BYTES {
        return None;
    }

    let mut buf = [0u8; MAX_BYTES];
    let bytes = &mut buf[..len];
    value.copy_into_slice(bytes);

    let text = core::str::from_utf8(bytes).ok()?;
    Some(text.chars().count() as u32)
}

