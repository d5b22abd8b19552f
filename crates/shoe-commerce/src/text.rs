//! Count labels.

/// Prefix `stem` with `count`, adding a plural `s` unless the count is one.
///
/// ```
/// use shoe_commerce::pluralize;
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 4), "4 Colors");
/// ```
pub fn pluralize(stem: &str, count: u32) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{} {}{}", count, stem, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_singular() {
        assert_eq!(pluralize("Color", 1), "1 Color");
    }

    #[test]
    fn test_pluralize_plural() {
        assert_eq!(pluralize("Color", 0), "0 Colors");
        assert_eq!(pluralize("Color", 2), "2 Colors");
        assert_eq!(pluralize("Color", 11), "11 Colors");
    }
}
