//! Preset radios and the custom option checklist.

use dioxus::prelude::*;
use luashade_core::{CUSTOM_PRESET_ID, OptionKey, OptionsState, PresetChoice, PresetSelection};

/// Props for the [`OptionsPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct OptionsPanelProps {
    /// Named presets in display order.
    presets: Vec<PresetChoice>,
    /// Current form state.
    options: OptionsState,
    /// Whether every control is locked.
    disabled: bool,
    /// Called when a preset radio is checked.
    on_preset: EventHandler<PresetSelection>,
    /// Called when a checklist entry is toggled.
    on_option: EventHandler<(OptionKey, bool)>,
}

/// Preset radio group with a "Custom" entry.
///
/// The checklist of individual options is shown only while the custom
/// entry is checked.
#[component]
pub fn OptionsPanel(props: OptionsPanelProps) -> Element {
    let checked_id = props.options.preset.as_ref().map(PresetSelection::id);

    rsx! {
        fieldset { class: "options", disabled: props.disabled,
            legend { "Obfuscation preset" }

            div { class: "preset-list",
                for preset in props.presets.iter() {
                    {render_radio(
                        &preset.id,
                        &preset.label,
                        &preset.description,
                        checked_id == Some(preset.id.as_str()),
                        props.on_preset,
                    )}
                }
                {render_radio(
                    CUSTOM_PRESET_ID,
                    "Custom",
                    "Choose individual transformations.",
                    checked_id == Some(CUSTOM_PRESET_ID),
                    props.on_preset,
                )}
            }

            if props.options.shows_checklist() {
                div { class: "checkbox-grid",
                    for (key, enabled) in props.options.checklist.iter() {
                        {render_toggle(key, enabled, props.on_option)}
                    }
                }
            }
        }
    }
}

/// Render one preset radio with its description.
fn render_radio(
    id: &str,
    label: &str,
    description: &str,
    checked: bool,
    on_preset: EventHandler<PresetSelection>,
) -> Element {
    let input_id = format!("preset-{id}");
    let id = id.to_string();

    rsx! {
        label { class: "preset", r#for: "{input_id}",
            input {
                r#type: "radio",
                id: "{input_id}",
                name: "preset",
                value: "{id}",
                checked: checked,
                onchange: move |_| on_preset.call(PresetSelection::from_id(&id)),
            }
            span { class: "preset-label", "{label}" }
            span { class: "preset-description", "{description}" }
        }
    }
}

/// Render one checklist entry.
fn render_toggle(key: OptionKey, enabled: bool, on_option: EventHandler<(OptionKey, bool)>) -> Element {
    let name = key.field_name();
    let label = key.label();
    let description = key.description();

    rsx! {
        label { class: "option", r#for: "option-{name}", title: "{description}",
            input {
                r#type: "checkbox",
                id: "option-{name}",
                name: "{name}",
                checked: enabled,
                onchange: move |e| on_option.call((key, e.checked())),
            }
            "{label}"
        }
    }
}
