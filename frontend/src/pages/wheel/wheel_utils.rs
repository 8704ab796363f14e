use shared::validation::{validate_option_label, validation_message};
use shared::SpinResult;
use yew::prelude::*;

use crate::styles;

/// One option per non-blank line, trimmed.
pub fn parse_labels(text: &str) -> Result<Vec<String>, String> {
    let labels: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    for label in &labels {
        validate_option_label(label).map_err(|e| format!("\"{}\": {}", label, validation_message(&e)))?;
    }
    Ok(labels)
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub result: Option<SpinResult>,
    pub show_result: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(result) = props.result.as_ref().filter(|_| props.show_result) else {
        return html! {};
    };

    html! {
        <div class="mt-8 mb-4 flex flex-col items-center justify-center">
            <div class={styles::WHEEL_RESULT}>
                <span>{format!("🎉 {}", result.winner_label)}</span>
            </div>
            <div class={styles::WHEEL_RESULT_DETAIL}>
                {format!("{:.0}° of spin", result.total_rotation_degrees)}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin" };
    let is_disabled = props.is_spinning || props.disabled;

    let button_class = if is_disabled { styles::SPIN_DISABLED } else { styles::SPIN_READY };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 bg-transparent"
            >
                <div class="flex items-center justify-center">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels_skips_blank_lines() {
        let labels = parse_labels("Pizza\n\n  Tacos  \n\t\nSushi\n").unwrap();
        assert_eq!(labels, vec!["Pizza", "Tacos", "Sushi"]);
    }

    #[test]
    fn test_parse_labels_rejects_long_label() {
        let text = format!("ok\n{}", "x".repeat(100));
        let err = parse_labels(&text).unwrap_err();
        assert!(err.starts_with("\"xxx"));
    }
}
