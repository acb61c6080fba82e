//! # Register Tag Scanner
//!
//! Linear forward search over a telegram for a big-endian register tag
//! (DIF/VIF byte sequence). Telegrams are tens of bytes, so a per-field
//! rescan from the fixed data offset is cheap enough; the first occurrence
//! wins and nothing is validated against full DIF length semantics, which
//! means a data byte run that happens to equal a tag can false-positive.

use log::trace;

/// Offset of the first application-data byte in the telegrams the drivers
/// see; the DLL header and TPL short header sit in front of it.
pub const DATA_START: usize = 11;

/// Searches `telegram` from `start` for `tag_width` bytes that, read
/// big-endian, equal `tag`. Returns the tag position of the first match.
///
/// The loop bound keeps every candidate read inside the telegram; a scan
/// window that would run past the end simply yields no match.
pub fn find_tag(telegram: &[u8], start: usize, tag: u64, tag_width: usize) -> Option<usize> {
    if tag_width == 0 || tag_width > 8 {
        return None;
    }
    if telegram.len() < start.checked_add(tag_width)? {
        return None;
    }

    for pos in start..=telegram.len() - tag_width {
        let mut candidate = 0u64;
        for &byte in &telegram[pos..pos + tag_width] {
            candidate = (candidate << 8) | byte as u64;
        }
        if candidate == tag {
            trace!("tag {tag:0width$X} matched at offset {pos}", width = tag_width * 2);
            return Some(pos);
        }
    }

    None
}

/// Like [`find_tag`], but the byte immediately after the tag must equal
/// `selector` (tariff index, phase number). A match with the wrong selector
/// does not stop the scan; the search resumes past it so a later occurrence
/// carrying the right discriminant is still found.
pub fn find_tag_with_selector(
    telegram: &[u8],
    start: usize,
    tag: u64,
    tag_width: usize,
    selector: u8,
) -> Option<usize> {
    let mut from = start;
    while let Some(pos) = find_tag(telegram, from, tag, tag_width) {
        match telegram.get(pos + tag_width) {
            Some(&byte) if byte == selector => return Some(pos),
            Some(_) => from = pos + 1,
            None => return None,
        }
    }
    None
}
