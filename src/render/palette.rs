use std::collections::HashMap;

use crate::lexer::tokens::TokenClass;

/// Display colour for every token class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<TokenClass, String>,
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = HashMap::new();
        colors.insert(TokenClass::Keyword, String::from("#56E1FF"));
        colors.insert(TokenClass::Identifier, String::from("#ffffff"));
        colors.insert(TokenClass::Operator, String::from("#FFA800"));
        colors.insert(TokenClass::Literal, String::from("#23FF55"));
        colors.insert(TokenClass::Separator, String::from("#FF295D"));
        colors.insert(TokenClass::Comment, String::from("#9256FF"));
        colors.insert(TokenClass::Other, String::from("#212529"));

        Palette { colors }
    }
}

impl Palette {
    pub fn color(&self, class: TokenClass) -> &str {
        self.colors.get(&class).map(String::as_str).unwrap_or("inherit")
    }

    pub fn set(&mut self, class: TokenClass, color: &str) {
        self.colors.insert(class, color.to_string());
    }

    /// Returns the palette with every `(class, colour)` override applied.
    pub fn with_overrides(mut self, overrides: &[(TokenClass, String)]) -> Self {
        for (class, color) in overrides {
            self.set(*class, color);
        }
        self
    }
}

/// Parses a `class=colour` override such as `keyword=#ff0000`.
pub fn parse_override(text: &str) -> Result<(TokenClass, String), String> {
    let (class, color) = text
        .split_once('=')
        .ok_or_else(|| format!("expected CLASS=COLOR, got `{}`", text))?;

    let color = color.trim();
    if color.is_empty() || !color.chars().all(|c| c.is_ascii_alphanumeric() || c == '#') {
        return Err(format!("invalid colour `{}`", color));
    }

    Ok((class.parse::<TokenClass>()?, color.to_string()))
}
