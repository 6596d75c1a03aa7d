/// Substitute a percent-encoded value for every `{uri}` in a link template
pub fn apply_template(template: &str, value: &str) -> String {
    template.replace("{uri}", &urlencoding::encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_template_encodes_value() {
        let url = apply_template(
            "https://remote.example/main/ostatussub?profile={uri}",
            "https://local.example/user/42",
        );
        assert_eq!(
            url,
            "https://remote.example/main/ostatussub?profile=https%3A%2F%2Flocal.example%2Fuser%2F42"
        );
    }

    #[test]
    fn test_apply_template_replaces_every_placeholder() {
        let url = apply_template("https://r.example/{uri}?again={uri}", "a b");
        assert_eq!(url, "https://r.example/a%20b?again=a%20b");
    }

    #[test]
    fn test_apply_template_without_placeholder() {
        let url = apply_template("https://r.example/subscribe", "https://l.example/user/1");
        assert_eq!(url, "https://r.example/subscribe");
    }
}
