//! Turning human test names into Rust identifiers

use proc_macro2::Ident;
use syn::LitStr;

/// Lowercase ASCII words joined by `_`.
///
/// Anything that is not an ASCII letter or digit separates words, and a
/// lowercase-or-digit to uppercase step starts a new one. A leading digit
/// gets a `_` prefix.
pub fn to_snake_case(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut word = String::new();
    let mut after_lower = false;

    for c in name.chars() {
        if !c.is_ascii_alphanumeric() {
            if !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
            after_lower = false;
            continue;
        }
        if c.is_ascii_uppercase() && after_lower {
            words.push(std::mem::take(&mut word));
        }
        word.push(c.to_ascii_lowercase());
        after_lower = !c.is_ascii_uppercase();
    }
    if !word.is_empty() {
        words.push(word);
    }

    let mut snake = words.join("_");
    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        snake.insert(0, '_');
    }
    snake
}

/// Identifier for a `describe!` module or `test!` function.
///
/// Names that snake_case to a keyword get a trailing `_` (`type_`, `self_`).
pub fn ident_from_name(name: &LitStr) -> syn::Result<Ident> {
    let snake = to_snake_case(&name.value());
    if snake.is_empty() {
        return Err(syn::Error::new(
            name.span(),
            "name needs at least one ASCII letter or digit to build an identifier",
        ));
    }

    // Plain ASCII at this point, so only keywords are rejected
    let ident = match syn::parse_str::<Ident>(&snake) {
        Ok(_) => snake,
        Err(_) => format!("{snake}_"),
    };
    Ok(Ident::new(&ident, name.span()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;

    fn ident(name: &str) -> syn::Result<Ident> {
        ident_from_name(&LitStr::new(name, Span::call_site()))
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("CheckEquals"), "check_equals");
        assert_eq!(to_snake_case("reports the call line"), "reports_the_call_line");
        assert_eq!(to_snake_case("API endpoints"), "api_endpoints");
        assert_eq!(to_snake_case("fails - then continues"), "fails_then_continues");
        assert_eq!(to_snake_case("2 checks"), "_2_checks");
        assert_eq!(to_snake_case("v2Parser"), "v2_parser");
    }

    #[test]
    fn test_to_snake_case_drops_non_ascii() {
        assert_eq!(to_snake_case("½ done"), "done");
        assert_eq!(to_snake_case("café au lait"), "caf_au_lait");
        assert_eq!(to_snake_case("½"), "");
    }

    #[test]
    fn test_ident_from_plain_name() {
        assert_eq!(ident("reports the call line").unwrap(), "reports_the_call_line");
        assert_eq!(ident("½ done").unwrap(), "done");
    }

    #[test]
    fn test_ident_from_keyword_name() {
        assert_eq!(ident("Type").unwrap(), "type_");
        assert_eq!(ident("match").unwrap(), "match_");
        assert_eq!(ident("Self").unwrap(), "self_");
        assert_eq!(ident("crate").unwrap(), "crate_");
    }

    #[test]
    fn test_ident_rejects_names_without_ascii_word() {
        let err = ident("½ - ¾").unwrap_err();
        assert!(err.to_string().contains("at least one ASCII letter or digit"));
    }
}
