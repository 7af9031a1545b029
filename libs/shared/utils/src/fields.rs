/// Treats `None` and blank strings the same way: both count as a missing field.
pub fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Returns every required value, or `None` if any of them is missing.
pub fn all_present<'a, const N: usize>(values: [&'a Option<String>; N]) -> Option<[&'a str; N]> {
    let mut out = [""; N];
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = present(value)?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_counts_as_missing() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some("  ".to_string())), None);
        assert_eq!(present(&Some(" pat-001 ".to_string())), Some("pat-001"));
    }

    #[test]
    fn all_present_requires_every_value() {
        let a = Some("a".to_string());
        let b = Some("b".to_string());
        let empty = Some(String::new());

        assert_eq!(all_present([&a, &b]), Some(["a", "b"]));
        assert_eq!(all_present([&a, &empty]), None);
        assert_eq!(all_present([&None, &b]), None);
    }
}
