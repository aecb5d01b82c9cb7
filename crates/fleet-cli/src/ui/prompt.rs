//! Interactive prompt primitives.

use std::io::IsTerminal;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Completion, Confirm, FuzzySelect, Input};

use super::context::UiContext;

/// Label shown as the first choice in optional selections.
pub const NONE_CHOICE: &str = "(none)";

/// Prefix-completion over a fixed list of suggestions.
pub struct Suggestions<'a> {
    values: &'a [&'a str],
}

impl<'a> Suggestions<'a> {
    pub fn new(values: &'a [&'a str]) -> Self {
        Self { values }
    }
}

impl Completion for Suggestions<'_> {
    fn get(&self, input: &str) -> Option<String> {
        let needle = input.to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.values
            .iter()
            .find(|value| value.to_lowercase().starts_with(&needle))
            .map(|value| value.to_string())
    }
}

fn require_tty() -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive input required. Use flags or run on a TTY."
        ));
    }
    Ok(())
}

/// Prompt for a line of text. Empty input is allowed when `required` is false.
pub fn prompt_input(
    _ctx: &UiContext,
    prompt: &str,
    default: Option<&str>,
    required: bool,
    suggestions: Option<&Suggestions<'_>>,
) -> anyhow::Result<String> {
    require_tty()?;

    let theme = ColorfulTheme::default();
    let mut builder = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(!required);
    if let Some(def) = default.filter(|d| !d.is_empty()) {
        builder = builder.default(def.to_string());
    }
    if let Some(completion) = suggestions {
        builder = builder.completion_with(completion);
    }

    Ok(builder.interact_text()?.trim().to_string())
}

/// Pick one of `options`, or nothing. Returns `None` for the none choice.
pub fn prompt_select_optional(
    _ctx: &UiContext,
    prompt: &str,
    options: &[&str],
    current: Option<&str>,
) -> anyhow::Result<Option<String>> {
    require_tty()?;

    let mut items: Vec<&str> = Vec::with_capacity(options.len() + 2);
    items.push(NONE_CHOICE);
    items.extend_from_slice(options);
    // Keep a stored value that is not in the list selectable.
    if let Some(value) = current {
        if !options.contains(&value) {
            items.push(value);
        }
    }
    let default = current
        .and_then(|value| items.iter().position(|item| *item == value))
        .unwrap_or(0);

    let theme = ColorfulTheme::default();
    let index = FuzzySelect::with_theme(&theme)
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()?;

    Ok(if index == 0 {
        None
    } else {
        Some(items[index].to_string())
    })
}

/// Prompt for confirmation.
pub fn prompt_confirm(_ctx: &UiContext, prompt: &str, default: bool) -> anyhow::Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive confirmation required. Use --yes or run on a TTY."
        ));
    }

    let theme = ColorfulTheme::default();
    Ok(Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_complete_by_prefix() {
        let brands = ["Mercedes-Benz", "Mazda", "Toyota"];
        let completion = Suggestions::new(&brands);
        assert_eq!(completion.get("toy").as_deref(), Some("Toyota"));
        assert_eq!(completion.get("ma").as_deref(), Some("Mazda"));
        assert_eq!(completion.get("zz"), None);
        assert_eq!(completion.get(""), None);
    }
}
