/// Splits `s` at the first occurrence of `delim`, keeping the delimiter
/// on the tail: `split_at_delim("a=b=c", "=")` is `("a", "=b=c")`. When
/// the delimiter does not occur the tail is empty. Unlike
/// `str::split_once`, the delimiter itself is preserved.
pub fn split_at_delim<'a>(s: &'a str, delim: &str) -> (&'a str, &'a str) {
    match s.find(delim) {
        Some(i) => s.split_at(i),
        None => (s, ""),
    }
}
