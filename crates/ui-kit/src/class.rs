/// Join class-name fragments with single spaces, skipping `None` and blanks.
///
/// ```
/// use ui_kit::class_names;
///
/// let disabled = true;
/// assert_eq!(
///     class_names([Some("list-item"), disabled.then_some("is-disabled"), None]),
///     "list-item is-disabled"
/// );
/// ```
pub fn class_names<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = String::new();
    for part in parts.into_iter().flatten() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_missing_and_blank_parts() {
        assert_eq!(
            class_names([Some("a"), None, Some(""), Some("  "), Some("b")]),
            "a b"
        );
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(class_names(std::iter::empty()), "");
    }

    #[test]
    fn trims_caller_fragments() {
        assert_eq!(class_names([Some(" card "), Some("wide")]), "card wide");
    }
}
