use super::*;

fn user(name: &str) -> User {
    User {
        id: "u1".to_owned(),
        name: name.to_owned(),
        email: "someone@example.com".to_owned(),
        color: "#4CAF50".to_owned(),
    }
}

#[test]
fn greeting_uses_display_name() {
    assert_eq!(greeting(Some(&user("Grace"))), "Welcome, Grace");
}

#[test]
fn greeting_without_user_is_generic() {
    assert_eq!(greeting(None), "Welcome");
}

#[test]
fn initial_uppercases_first_char() {
    assert_eq!(initial("grace"), "G");
    assert_eq!(initial("  émile"), "É");
}

#[test]
fn initial_of_blank_name_is_placeholder() {
    assert_eq!(initial("   "), "?");
}
