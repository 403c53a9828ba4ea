//! Schema-driven properties panel for the selected widget.
//!
//! Color fields pair a native picker with a text input. The picker only
//! understands `#rrggbb`, so `#rgb` is expanded for it and values it cannot
//! show (such as `transparent`) stay editable in the text input.

#[cfg(test)]
#[path = "properties_panel_test.rs"]
mod properties_panel_test;

use leptos::prelude::*;

use designer::panel::{PanelField, PanelModel};
use designer::schema::InputKind;
use designer::widget::WidgetId;

/// Shown by the picker when the stored color has no `#rrggbb` form.
const PICKER_FALLBACK: &str = "#000000";

/// `(widget, property name, new value)`.
pub type PropertyEdit = (WidgetId, &'static str, String);

#[component]
pub fn PropertiesPanel(
    panel: Memo<Option<PanelModel>>,
    on_label: Callback<(WidgetId, String)>,
    on_property: Callback<PropertyEdit>,
    on_delete: Callback<WidgetId>,
    on_close: Callback<()>,
) -> impl IntoView {
    move || match panel.get() {
        None => view! {
            <aside class="properties properties--empty">
                <p>"Select a widget to edit its properties."</p>
            </aside>
        }
        .into_any(),
        Some(model) => {
            let id = model.id;
            let fields = model.fields.into_iter().map(|field| field_view(id, field, on_property)).collect_view();
            view! {
                <aside class="properties">
                    <header class="properties__header">
                        <h2 class="properties__title">{model.kind.display_name()}</h2>
                        <button class="properties__close" title="Close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </header>
                    <label class="properties__field">
                        <span>"Label"</span>
                        <input
                            type="text"
                            prop:value=model.label
                            on:change=move |ev| on_label.run((id, event_target_value(&ev)))
                        />
                    </label>
                    {fields}
                    <button class="properties__delete" on:click=move |_| on_delete.run(id)>
                        "Delete Widget"
                    </button>
                </aside>
            }
            .into_any()
        }
    }
}

fn field_view(id: WidgetId, field: PanelField, on_property: Callback<PropertyEdit>) -> AnyView {
    let PanelField { definition, value, is_default } = field;
    let name = definition.name;
    let class = if is_default { "properties__field properties__field--default" } else { "properties__field" };
    let on_change = move |ev: leptos::ev::Event| on_property.run((id, name, event_target_value(&ev)));

    let control = match definition.input {
        InputKind::Text => view! { <input type="text" prop:value=value on:change=on_change/> }.into_any(),
        InputKind::Color => {
            let swatch = picker_value(&value).unwrap_or_else(|| PICKER_FALLBACK.to_owned());
            view! {
                <span class="properties__color">
                    <input
                        type="color"
                        prop:value=swatch
                        on:change=on_change
                    />
                    <input type="text" prop:value=value on:change=on_change/>
                </span>
            }
            .into_any()
        }
        InputKind::Select => {
            let options = definition
                .options
                .iter()
                .map(|option| {
                    let selected = *option == value;
                    view! {
                        <option value=*option selected=selected>
                            {*option}
                        </option>
                    }
                })
                .collect_view();
            view! { <select on:change=on_change>{options}</select> }.into_any()
        }
    };

    view! {
        <label class=class>
            <span>{definition.label}</span>
            {control}
        </label>
    }
    .into_any()
}

/// The `#rrggbb` form a native color picker can display, if any.
pub(crate) fn picker_value(value: &str) -> Option<String> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => Some(format!("#{}", hex.to_ascii_lowercase())),
        3 => Some(hex.chars().fold(String::from("#"), |mut out, c| {
            let c = c.to_ascii_lowercase();
            out.push(c);
            out.push(c);
            out
        })),
        _ => None,
    }
}
