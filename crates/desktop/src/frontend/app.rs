//! The entry form: six labeled inputs, two actions, a session log.

use leptos::*;

use stockpad_inventory::ItemDraft;

use crate::frontend::api;

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

/// One labeled text input bound to a signal.
#[component]
fn FieldRow(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let stock = create_rw_signal(String::new());
    let cp = create_rw_signal(String::new());
    let sp = create_rw_signal(String::new());
    let vendor = create_rw_signal(String::new());
    let vendor_phoneno = create_rw_signal(String::new());

    // Append-only session log; never cleared programmatically.
    let log = create_rw_signal(Vec::<String>::new());
    let is_submitting = create_rw_signal(false);

    // Seed the log with the startup status line.
    spawn_local(async move {
        match api::startup_info().await {
            Ok(info) => log.update(|l| l.push(format!("ID has reached upto: {}", info.max_id))),
            Err(e) => alert(&e),
        }
    });

    let clear_all = move || {
        name.set(String::new());
        stock.set(String::new());
        cp.set(String::new());
        sp.set(String::new());
        vendor.set(String::new());
        vendor_phoneno.set(String::new());
    };

    let submit = move |_| {
        if is_submitting.get() {
            return;
        }
        is_submitting.set(true);

        let draft = ItemDraft {
            name: name.get(),
            stock: stock.get(),
            cp: cp.get(),
            sp: sp.get(),
            vendor: vendor.get(),
            vendor_phoneno: vendor_phoneno.get(),
        };

        spawn_local(async move {
            match api::add_item(&draft).await {
                Ok(inserted) => {
                    log.update(|l| {
                        l.push(format!(
                            "Inserted {} into the database with ID {}",
                            inserted.name, inserted.id
                        ))
                    });
                    alert(&format!("Added {} to the database!", inserted.name));
                    clear_all();
                }
                // Fields stay as entered so the user can correct and retry.
                Err(e) => alert(&e),
            }
            is_submitting.set(false);
        });
    };

    view! {
        <div class="app">
            <header>
                <h1>"Add to the Database"</h1>
            </header>

            <main>
                <div class="entry-form">
                    <FieldRow label="Enter Product Name" value=name/>
                    <FieldRow label="Enter Stocks" value=stock/>
                    <FieldRow label="Enter Cost Price" value=cp/>
                    <FieldRow label="Enter Selling Price" value=sp/>
                    <FieldRow label="Enter Vendor Name" value=vendor/>
                    <FieldRow label="Enter Vendor Phone Number" value=vendor_phoneno/>

                    <div class="form-actions">
                        <button on:click=move |_| clear_all()>
                            "Clear All Fields"
                        </button>
                        <button disabled=move || is_submitting.get() on:click=submit>
                            {move || if is_submitting.get() { "Adding..." } else { "Add To Database" }}
                        </button>
                    </div>
                </div>

                <div class="session-log">
                    {move || {
                        log.get()
                            .into_iter()
                            .map(|line| view! { <p>{line}</p> })
                            .collect_view()
                    }}
                </div>
            </main>
        </div>
    }
}
