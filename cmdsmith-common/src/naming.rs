//! Identifier transforms for command names.
//!
//! Word splitting follows the usual JavaScript tooling rules: any
//! non-alphanumeric character separates words, and so do lower-to-upper case
//! changes (`fooBar`), the end of an acronym (`HTTPServer`) and letter/digit
//! changes (`v2`).

/// Split `input` into words.
pub fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_alphabetic() && c.is_numeric())
                || (prev.is_numeric() && c.is_alphabetic())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()));
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `project:build` -> `project-build`.
pub fn kebab_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// `project:build` -> `projectBuild`.
pub fn camel_case(input: &str) -> String {
    words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 {
                lower
            } else {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect()
}

/// Markdown heading anchor for a command: colons removed, then kebab-cased.
pub fn anchor(name: &str) -> String {
    kebab_case(&name.replace(':', ""))
}

/// Escape every single quote so the value can sit inside a `'...'` literal.
pub fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("project:build"), "project-build");
        assert_eq!(kebab_case("command:list"), "command-list");
        assert_eq!(kebab_case("fooBar:baz"), "foo-bar-baz");
        assert_eq!(kebab_case("HTTPServer:start"), "http-server-start");
        assert_eq!(kebab_case("db:migrate2"), "db-migrate-2");
        assert_eq!(kebab_case("  spaced  out "), "spaced-out");
        assert_eq!(kebab_case(""), "");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("project:build"), "projectBuild");
        assert_eq!(camel_case("command:create"), "commandCreate");
        assert_eq!(camel_case("my-ns:do_thing"), "myNsDoThing");
        assert_eq!(camel_case("API:call"), "apiCall");
    }

    #[test]
    fn test_anchor() {
        assert_eq!(anchor("command:list"), "commandlist");
        assert_eq!(anchor("project:buildAll"), "projectbuild-all");
    }

    #[test]
    fn test_escape_single_quotes() {
        assert_eq!(escape_single_quotes("it's"), "it\\'s");
        assert_eq!(escape_single_quotes("'a' 'b'"), "\\'a\\' \\'b\\'");
        assert_eq!(escape_single_quotes("plain"), "plain");
    }
}
