use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::services::api::{self, Category, PutFile, PutLink, PutText, SubmissionPayload};
use crate::stores::used_ids::UsedRegistry;
use crate::utils::clipboard;
use crate::utils::form_state::{self, compute_form_state, FormPhase};
use crate::utils::id_token;

/// One category's submission pipeline: identifier field, payload fields and
/// the submit action. Three instances of this component make up the page,
/// each owning its own field state.
#[component]
pub fn ShareForm(category: Category) -> Element {
    let registry = use_context::<UsedRegistry>();

    let mut id_input = use_signal(String::new);
    let mut forward = use_signal(String::new);
    let mut contents = use_signal(String::new);
    let mut selected_filename = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let file_input_id = format!("{}-file-input", category.segment());

    // Recomputed on every keystroke; reading the signals here keeps the
    // derived validity in step with the fields.
    let other_required_filled = match category {
        Category::File => vec![selected_filename.read().is_some()],
        Category::Link => vec![!forward.read().is_empty()],
        Category::Text => vec![!contents.read().is_empty()],
    };
    let form = compute_form_state(
        &id_input.read(),
        &registry.ids(category),
        &other_required_filled,
    );
    let validity_hint = match form.phase() {
        FormPhase::Invalid => form_state::id_range_error(&form.id_token),
        _ => None,
    };

    let on_id_input = move |evt: Event<FormData>| {
        let raw = evt.value();
        if id_token::ends_with_reroll(&raw) {
            id_input.set(id_token::random_token());
        } else {
            id_input.set(id_token::canonicalize(&raw));
        }
    };

    let on_file_change = move |evt: Event<FormData>| {
        let name = evt.files().first().map(|file| file.name());
        selected_filename.set(name);
    };

    let on_submit = {
        let file_input_id = file_input_id.clone();
        move |_| {
            if *submitting.read() {
                return;
            }
            let token = id_input.read().clone();
            let state = compute_form_state(
                &token,
                &registry.ids(category),
                &match category {
                    Category::File => vec![selected_filename.read().is_some()],
                    Category::Link => vec![!forward.read().is_empty()],
                    Category::Text => vec![!contents.read().is_empty()],
                },
            );
            if !state.submit_enabled {
                return;
            }

            submitting.set(true);
            let base = api::base_url();
            let url = api::entry_url(&base, category, &token);
            let forward_value = forward.read().clone();
            let contents_value = contents.read().clone();
            let input_id = file_input_id.clone();

            spawn(async move {
                let payload = match category {
                    Category::File => match read_selected_file(&input_id).await {
                        Ok((bytes, filename)) => SubmissionPayload::File(PutFile {
                            base64: STANDARD.encode(&bytes),
                            filename,
                        }),
                        Err(err) => {
                            log::error!("File payload construction failed: {}", err);
                            clipboard::show_alert(&err);
                            submitting.set(false);
                            return;
                        }
                    },
                    Category::Link => SubmissionPayload::Link(PutLink {
                        forward: forward_value,
                    }),
                    Category::Text => SubmissionPayload::Text(PutText {
                        contents: contents_value,
                    }),
                };

                let outcome = match api::create(&url, &payload).await {
                    Ok(response) => response.into_result(),
                    Err(err) => Err(err),
                };

                match outcome {
                    Ok(()) => {
                        log::info!("Created {} entry at {}", category.label(), url);
                        clipboard::notify_url(&url).await;
                        id_input.set(String::new());
                        forward.set(String::new());
                        contents.set(String::new());
                        selected_filename.set(None);
                        reset_file_input(&input_id);
                        registry.refresh(category);
                    }
                    Err(err) => {
                        log::error!("Create failed for {}: {}", url, err);
                        clipboard::show_alert(&err);
                    }
                }
                submitting.set(false);
            });
        }
    };

    let filename_display = selected_filename.read().clone().unwrap_or_default();

    rsx! {
        div {
            class: "space-y-4",

            // Identifier field, shared by every category
            div {
                class: "space-y-2",
                label {
                    class: "text-sm font-medium",
                    "Custom URL"
                }
                input {
                    class: if form.conflict {
                        "w-full px-3 py-2 bg-background border border-amber-500 rounded-lg focus:outline-none focus:ring-2 focus:ring-amber-500"
                    } else {
                        "w-full px-3 py-2 bg-background border border-border rounded-lg focus:outline-none focus:ring-2 focus:ring-primary"
                    },
                    r#type: "text",
                    placeholder: "type a space for a random id",
                    value: "{id_input}",
                    oninput: on_id_input,
                }
                if let Some(message) = validity_hint {
                    p {
                        class: "text-xs text-destructive",
                        "{message}"
                    }
                } else if form.conflict {
                    p {
                        class: "text-xs text-amber-600",
                        "This id is already in use"
                    }
                }
            }

            // Payload fields
            if category == Category::File {
                div {
                    class: "space-y-2",
                    label {
                        class: "text-sm font-medium",
                        "File"
                    }
                    div {
                        class: "flex gap-2",
                        input {
                            class: "flex-1 px-3 py-2 bg-muted border border-border rounded-lg cursor-default",
                            r#type: "text",
                            readonly: true,
                            tabindex: "-1",
                            placeholder: "No file selected",
                            value: "{filename_display}",
                        }
                        label {
                            class: "px-4 py-2 bg-secondary text-secondary-foreground rounded-lg hover:bg-secondary/90 transition cursor-pointer",
                            "Browse"
                            input {
                                id: "{file_input_id}",
                                class: "hidden",
                                r#type: "file",
                                onchange: on_file_change,
                            }
                        }
                    }
                }
            } else if category == Category::Link {
                div {
                    class: "space-y-2",
                    label {
                        class: "text-sm font-medium",
                        "Forward to"
                    }
                    input {
                        class: "w-full px-3 py-2 bg-background border border-border rounded-lg focus:outline-none focus:ring-2 focus:ring-primary",
                        r#type: "text",
                        placeholder: "https://example.com/page",
                        value: "{forward}",
                        oninput: move |evt| forward.set(evt.value()),
                    }
                }
            } else {
                div {
                    class: "space-y-2",
                    label {
                        class: "text-sm font-medium",
                        "Contents"
                    }
                    textarea {
                        class: "w-full px-3 py-2 bg-background border border-border rounded-lg focus:outline-none focus:ring-2 focus:ring-primary resize-y",
                        rows: "6",
                        placeholder: "Paste or type the text to share",
                        value: "{contents}",
                        oninput: move |evt| contents.set(evt.value()),
                    }
                }
            }

            button {
                class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition disabled:opacity-50",
                disabled: !form.submit_enabled || *submitting.read(),
                onclick: on_submit,
                if *submitting.read() {
                    "Submitting..."
                } else {
                    "Submit"
                }
            }
        }
    }
}

/// Read the chosen file out of the hidden input at submit time.
///
/// Errors here abort the submission before any network call.
async fn read_selected_file(input_id: &str) -> Result<(Vec<u8>, String), String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let input = document
        .get_element_by_id(input_id)
        .ok_or("Input not found")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| "Not an input element")?;

    let file = input
        .files()
        .and_then(|list| list.get(0))
        .ok_or("No file selected")?;

    let filename = file.name();

    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Failed to read file")?;
    let array_buffer: ArrayBuffer = array_buffer.dyn_into().map_err(|_| "Not an ArrayBuffer")?;
    let bytes = Uint8Array::new(&array_buffer).to_vec();

    Ok((bytes, filename))
}

/// Clear the native file input so the same file can be picked again.
fn reset_file_input(input_id: &str) {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if let Some(input) = input {
        input.set_value("");
    }
}
