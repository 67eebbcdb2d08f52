// Fixed color-name table: catalog colors come in Russian, synthesized
// display names use the English label. Unknown colors stay unresolved.

pub fn translate(raw: &str) -> Option<&'static str> {
    match raw.to_lowercase().as_str() {
        "серебристый" => Some("Silver"),
        "серый космос" => Some("Space Gray"),
        "черный" => Some("Black"),
        "белый" => Some("White"),
        "розовый" => Some("Pink"),
        "синий" => Some("Blue"),
        "зеленый" => Some("Green"),
        "красный" => Some("Red"),
        "фиолетовый" => Some("Purple"),
        "оранжевый" => Some("Orange"),
        "желтый" => Some("Yellow"),
        "золотой" => Some("Gold"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_color_is_translated() {
        assert_eq!(translate("черный"), Some("Black"));
        assert_eq!(translate("ЧЕРНЫЙ"), Some("Black"));
    }

    #[test]
    fn unknown_color_is_unresolved() {
        assert_eq!(translate("хаки"), None);
        assert_eq!(translate(""), None);
    }
}
