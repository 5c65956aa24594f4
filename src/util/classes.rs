//! CSS class-list assembly for input primitives.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

/// Join a base class string with caller-supplied extras, skipping blanks.
pub fn join_classes(base: &str, extra: &[String]) -> String {
    std::iter::once(base)
        .chain(extra.iter().map(String::as_str))
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
