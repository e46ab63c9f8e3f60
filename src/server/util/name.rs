/// Joins a first and optional last name for display.
///
/// # Returns
/// - `"{first} {last}"` when a non-empty last name is present
/// - the first name alone otherwise
pub fn full_name(first_name: &str, last_name: Option<&str>) -> String {
    match last_name {
        Some(last) if !last.is_empty() => format!("{} {}", first_name, last),
        _ => first_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_first_and_last_name() {
        assert_eq!(full_name("Asha", Some("Rao")), "Asha Rao");
    }

    #[test]
    fn falls_back_to_first_name() {
        assert_eq!(full_name("Asha", None), "Asha");
        assert_eq!(full_name("Asha", Some("")), "Asha");
    }
}
