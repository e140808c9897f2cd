//! String transformation utilities for formula class names

/// Converts a string to snake_case.
///
/// Handles camelCase, PascalCase, kebab-case and space-separated input.
///
/// # Examples
/// ```
/// use brewform::core::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("myTool"), "my_tool");
/// assert_eq!(to_snake_case("my-tool"), "my_tool");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_ascii_digit();
        } else if (ch == '-' || ch == '_' || ch == ' ' || ch == '.')
            && !result.is_empty()
            && !result.ends_with('_')
        {
            result.push('_');
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Converts a binary name into a Homebrew formula class name.
///
/// Homebrew derives the class from the formula file name by capitalizing each
/// word, so `tpaws` becomes `Tpaws` and `my-tool` becomes `MyTool`.
///
/// # Examples
/// ```
/// use brewform::core::utils::to_proper_case;
///
/// assert_eq!(to_proper_case("tpaws"), "Tpaws");
/// assert_eq!(to_proper_case("my-tool"), "MyTool");
/// ```
pub fn to_proper_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .filter(|s| !s.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}
