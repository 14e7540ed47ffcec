/// The last `max_height` entries of `lines`, the part of a tail-following pane that fits on screen
pub fn visible_tail<T>(lines: &[T], max_height: usize) -> &[T] {
    let first_line = lines.len().saturating_sub(max_height);
    &lines[first_line..]
}

/// A horizontal gauge of `width` cells filled to `percentage` (clamped to 0..=100)
pub fn bar(percentage: f64, width: usize) -> String {
    let pct = if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    };
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let mut s = String::with_capacity(width * 3);
    s.extend(std::iter::repeat('█').take(filled));
    s.extend(std::iter::repeat('░').take(width - filled));
    s
}

/// `text` or `placeholder` when it is blank
pub fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.trim().is_empty() {
        placeholder
    } else {
        text
    }
}
