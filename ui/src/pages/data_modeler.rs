//! Data modeler: tables, columns and foreign-key relationships.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every successful mutation reloads tables and relationships together, so
//! the lists always mirror the backend. "Sync" asks the backend to apply the
//! selected table's definition to the physical database and shows whatever
//! status text it returns.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::DataColumn;

use crate::components::toast::notify;
use crate::state::auth::AuthState;
use crate::state::datasource::{self, DATA_TYPES, ModalMode, ModelerState};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_unauth_redirect;
use crate::util::browser;

fn load_model(state: RwSignal<ModelerState>, toast: RwSignal<ToastState>) {
    state.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::load_data_model().await {
            Ok((tables, relationships)) => state.update(|s| s.apply_loaded(tables, relationships)),
            Err(e) => {
                leptos::logging::warn!("data model load failed: {e}");
                notify(toast, ToastKind::Error, e.to_string());
            }
        }
        state.update(|s| s.loading = false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toast;
    }
}

/// Report a mutation's outcome and reload on success.
#[cfg(feature = "hydrate")]
fn finish(
    result: Result<(), wire::ApiError>,
    success: &str,
    state: RwSignal<ModelerState>,
    toast: RwSignal<ToastState>,
) -> bool {
    match result {
        Ok(()) => {
            notify(toast, ToastKind::Success, success);
            load_model(state, toast);
            true
        }
        Err(e) => {
            leptos::logging::warn!("data model change failed: {e}");
            notify(toast, ToastKind::Error, e.to_string());
            false
        }
    }
}

#[component]
pub fn DataModelerPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let state = RwSignal::new(ModelerState::default());

    Effect::new(move || {
        if auth.get().is_logged_in() {
            load_model(state, toast);
        }
    });

    let on_sync = move |_| {
        let Some(table_id) = state.get_untracked().selected_table_id else {
            return;
        };
        state.update(|s| s.syncing = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sync_table(table_id).await {
                Ok(message) => {
                    notify(toast, ToastKind::Success, message);
                    load_model(state, toast);
                }
                Err(e) => {
                    leptos::logging::warn!("table sync failed: {e}");
                    notify(toast, ToastKind::Error, e.to_string());
                }
            }
            state.update(|s| s.syncing = false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = table_id;
        }
    };

    let on_delete_column = move |column_id: i64| {
        if !browser::confirm("Are you sure you want to delete this column?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_column(column_id).await;
            finish(result, "Column deleted", state, toast);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = column_id;
        }
    };

    let on_delete_relationship = move |relationship_id: i64| {
        if !browser::confirm("Delete this relationship?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_relationship(relationship_id).await;
            finish(result, "Relationship deleted", state, toast);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = relationship_id;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = state.get_untracked();
        let Some(mode) = snapshot.modal else {
            return;
        };
        match mode {
            ModalMode::Table => {
                let table = match snapshot.new_table() {
                    Ok(table) => table,
                    Err(message) => return notify(toast, ToastKind::Error, message),
                };
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::create_table(&table).await;
                    if finish(result, "Operation successful", state, toast) {
                        state.update(ModelerState::close_modal);
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = table;
                }
            }
            ModalMode::Column => {
                let column = snapshot.column.clone();
                let editing = snapshot.editing_column_id;
                let Some(table_id) = snapshot.selected_table_id else {
                    return notify(toast, ToastKind::Error, "Select a table first");
                };
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let result = match editing {
                        Some(column_id) => crate::net::api::update_column(column_id, &column).await,
                        None => crate::net::api::create_column(table_id, &column).await,
                    };
                    if finish(result, "Operation successful", state, toast) {
                        state.update(ModelerState::close_modal);
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (column, editing, table_id);
                }
            }
            ModalMode::Relation => {
                let relationship = match snapshot.new_relationship() {
                    Ok(relationship) => relationship,
                    Err(message) => return notify(toast, ToastKind::Error, message),
                };
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::create_relationship(&relationship).await;
                    if finish(result, "Relationship mapped successfully", state, toast) {
                        state.update(ModelerState::close_modal);
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = relationship;
                }
            }
        }
    };

    let modal = Memo::new(move |_| state.with(|s| s.modal));
    let tables = Memo::new(move |_| state.with(table_list));
    let selected_table = move || state.with(|s| s.selected_table_id);

    let column_rows = move || {
        let snapshot = state.get();
        let columns: Vec<DataColumn> = snapshot.columns_for(snapshot.selected_table_id).to_vec();
        columns
            .into_iter()
            .map(|column| {
                let edit_copy = column.clone();
                let flags = column_flags(&column);
                view! {
                    <tr>
                        <td>{column.column_name}</td>
                        <td>{column.data_type}</td>
                        <td>{column.length}</td>
                        <td>{flags}</td>
                        <td class="modeler__row-actions">
                            <button on:click=move |_| state.update(|s| s.edit_column(&edit_copy))>"Edit"</button>
                            {column.id.map(|id| view! {
                                <button class="modeler__danger" on:click=move |_| on_delete_column(id)>"Delete"</button>
                            })}
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    let relationship_rows = move || {
        let snapshot = state.get();
        snapshot
            .relationships
            .iter()
            .map(|rel| {
                let source = format!(
                    "{}.{}",
                    snapshot.table_name(Some(rel.source_table_id)),
                    snapshot.column_name(rel.source_table_id, rel.source_column_id)
                );
                let target = format!(
                    "{}.{}",
                    snapshot.table_name(Some(rel.target_table_id)),
                    snapshot.column_name(rel.target_table_id, rel.target_column_id)
                );
                let name = rel.fk_name.clone().unwrap_or_default();
                let id = rel.id;
                view! {
                    <li class="modeler__relationship">
                        <span class="modeler__fk">{name}</span>
                        <span>{source}" → "{target}</span>
                        {id.map(|id| view! {
                            <button class="modeler__danger" on:click=move |_| on_delete_relationship(id)>"Delete"</button>
                        })}
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="modeler">
            <header class="modeler__header">
                <label class="modeler__source">
                    <span>"Data Source"</span>
                    <select on:change=move |ev| {
                        let id = datasource::parse_id(&event_target_value(&ev));
                        state.update(|s| s.selected_table_id = id);
                    }>
                        <option value="">"Select a table..."</option>
                        {id_options(tables, selected_table)}
                    </select>
                </label>
                <button class="modeler__icon" title="New table" on:click=move |_| state.update(|s| s.modal = Some(ModalMode::Table))>
                    "+"
                </button>
                <button
                    class="modeler__icon"
                    title="Sync schema"
                    disabled=move || state.get().selected_table_id.is_none() || state.get().syncing
                    on:click=on_sync
                >
                    {move || if state.get().syncing { "Syncing..." } else { "Sync" }}
                </button>
                <div class="modeler__heading">
                    <h1>"Data Modeler"</h1>
                    {move || state.get().selected_table().and_then(|t| t.description.clone()).map(|d| view! { <p>{d}</p> })}
                </div>
            </header>

            <div class="modeler__grids">
                <section class="modeler__panel">
                    <div class="modeler__panel-header">
                        <h2>"Columns"</h2>
                        <button
                            disabled=move || state.get().selected_table_id.is_none()
                            on:click=move |_| state.update(|s| {
                                s.close_modal();
                                s.modal = Some(ModalMode::Column);
                            })
                        >
                            "Add Column"
                        </button>
                    </div>
                    <table class="modeler__table">
                        <thead>
                            <tr><th>"Name"</th><th>"Type"</th><th>"Length"</th><th>"Flags"</th><th></th></tr>
                        </thead>
                        <tbody>{column_rows}</tbody>
                    </table>
                </section>
                <section class="modeler__panel">
                    <div class="modeler__panel-header">
                        <h2>"Relationships"</h2>
                        <button on:click=move |_| state.update(|s| s.modal = Some(ModalMode::Relation))>"Map"</button>
                    </div>
                    <ul class="modeler__relationships">{relationship_rows}</ul>
                </section>
            </div>

            {move || modal.get().map(|mode| view! {
                <div class="dialog-backdrop">
                    <form class="dialog" on:submit=on_submit>
                        {modal_body(mode, state, tables)}
                        <div class="dialog__actions">
                            <button type="button" class="dialog__button" on:click=move |_| state.update(ModelerState::close_modal)>
                                "Cancel"
                            </button>
                            <button type="submit" class="dialog__button dialog__button--primary">"Save"</button>
                        </div>
                    </form>
                </div>
            })}
        </div>
    }
}

type IdOptions = Vec<(i64, String)>;

fn table_list(state: &ModelerState) -> IdOptions {
    state.tables.iter().map(|t| (t.id, t.table_name.clone())).collect()
}

fn column_list(state: &ModelerState, table_id: Option<i64>) -> IdOptions {
    state.columns_for(table_id).iter().filter_map(|c| c.id.map(|id| (id, c.column_name.clone()))).collect()
}

/// `<option>`s for `items`, marking the one `selected` returns. The list only
/// re-renders when `items` changes, so typing elsewhere keeps the selection.
fn id_options(
    items: Memo<IdOptions>,
    selected: impl Fn() -> Option<i64> + Copy + Send + Sync + 'static,
) -> impl IntoView {
    move || {
        items
            .get()
            .into_iter()
            .map(|(id, name)| view! { <option value=id.to_string() selected=move || selected() == Some(id)>{name}</option> })
            .collect_view()
    }
}

fn column_flags(column: &DataColumn) -> String {
    [
        (column.is_primary_key, "PK"),
        (column.is_identity, "IDENTITY"),
        (column.is_required, "REQUIRED"),
        (column.is_unique, "UNIQUE"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect::<Vec<_>>()
    .join(" ")
}

fn modal_body(mode: ModalMode, state: RwSignal<ModelerState>, tables: Memo<IdOptions>) -> AnyView {
    match mode {
        ModalMode::Table => view! {
            <h2>"New Table"</h2>
            <input
                class="dialog__input"
                type="text"
                required
                placeholder="Table name"
                prop:value=move || state.get().table_name
                on:input=move |ev| state.update(|s| s.table_name = event_target_value(&ev))
            />
            <input
                class="dialog__input"
                type="text"
                placeholder="Description"
                prop:value=move || state.get().table_description
                on:input=move |ev| state.update(|s| s.table_description = event_target_value(&ev))
            />
        }
        .into_any(),
        ModalMode::Column => column_form(state),
        ModalMode::Relation => relation_form(state, tables),
    }
}

fn column_form(state: RwSignal<ModelerState>) -> AnyView {
    let type_options = DATA_TYPES
        .iter()
        .map(|(value, label)| {
            view! {
                <option value=*value selected=move || state.get().column.data_type == *value>
                    {*label}
                </option>
            }
        })
        .collect_view();

    let checkbox = move |label: &'static str, get: fn(&DataColumn) -> bool, set: fn(&mut DataColumn, bool)| {
        view! {
            <label class="dialog__check">
                <input
                    type="checkbox"
                    prop:checked=move || get(&state.get().column)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        state.update(|s| set(&mut s.column, checked));
                    }
                />
                {label}
            </label>
        }
    };

    let number = move |label: &'static str, get: fn(&DataColumn) -> i64, set: fn(&mut DataColumn, i64)| {
        view! {
            <label class="dialog__number">
                <span>{label}</span>
                <input
                    type="number"
                    prop:value=move || get(&state.get().column).to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev).trim().parse::<i64>().unwrap_or(0);
                        state.update(|s| set(&mut s.column, value));
                    }
                />
            </label>
        }
    };

    view! {
        <h2>{move || if state.get().editing_column_id.is_some() { "Edit Column" } else { "New Column" }}</h2>
        <input
            class="dialog__input"
            type="text"
            required
            placeholder="Column name"
            prop:value=move || state.get().column.column_name
            on:input=move |ev| state.update(|s| s.column.column_name = event_target_value(&ev))
        />
        <select on:change=move |ev| state.update(|s| datasource::apply_data_type(&mut s.column, &event_target_value(&ev)))>
            {type_options}
        </select>
        <div class="dialog__checks">
            {checkbox("Primary key", |c| c.is_primary_key, |c, v| c.is_primary_key = v)}
            {checkbox("Identity", |c| c.is_identity, |c, v| c.is_identity = v)}
            {checkbox("Required", |c| c.is_required, |c, v| c.is_required = v)}
            {checkbox("Unique", |c| c.is_unique, |c, v| c.is_unique = v)}
        </div>
        <div class="dialog__numbers">
            {number("Length", |c| c.length, |c, v| c.length = v)}
            {number("Precision", |c| c.precision, |c, v| c.precision = v)}
            {number("Scale", |c| c.scale, |c, v| c.scale = v)}
            {number("Order", |c| c.column_order, |c, v| c.column_order = v)}
        </div>
    }
    .into_any()
}

fn relation_form(state: RwSignal<ModelerState>, tables: Memo<IdOptions>) -> AnyView {
    let source_columns = Memo::new(move |_| state.with(|s| column_list(s, s.relation.source_table_id)));
    let target_columns = Memo::new(move |_| state.with(|s| column_list(s, s.relation.target_table_id)));

    view! {
        <h2>"Map Relationship"</h2>
        <div class="dialog__relation">
            <select on:change=move |ev| state.update(|s| {
                s.relation.source_table_id = datasource::parse_id(&event_target_value(&ev));
                s.relation.source_column_id = None;
            })>
                <option value="">"Source table..."</option>
                {id_options(tables, move || state.with(|s| s.relation.source_table_id))}
            </select>
            <select on:change=move |ev| state.update(|s| s.relation.source_column_id = datasource::parse_id(&event_target_value(&ev)))>
                <option value="">"Source column..."</option>
                {id_options(source_columns, move || state.with(|s| s.relation.source_column_id))}
            </select>
            <select on:change=move |ev| state.update(|s| {
                s.relation.target_table_id = datasource::parse_id(&event_target_value(&ev));
                s.relation.target_column_id = None;
            })>
                <option value="">"Target table..."</option>
                {id_options(tables, move || state.with(|s| s.relation.target_table_id))}
            </select>
            <select on:change=move |ev| state.update(|s| s.relation.target_column_id = datasource::parse_id(&event_target_value(&ev)))>
                <option value="">"Target column..."</option>
                {id_options(target_columns, move || state.with(|s| s.relation.target_column_id))}
            </select>
        </div>
    }
    .into_any()
}
