//! Commercial-district store browser: district filter over a paginated
//! table of the Incheon registry.

use leptos::prelude::*;

use crate::state::stores::{self, StoresState};

/// Stores page — fetches the registry once, then filters and paginates
/// it entirely client-side.
#[component]
pub fn StoresPage() -> impl IntoView {
    let state = expect_context::<RwSignal<StoresState>>();

    // One fetch per session; the registry is static data.
    Effect::new(move || {
        if state.get_untracked().records.is_some() {
            return;
        }
        state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_stores().await {
                Ok(records) => state.update(|s| {
                    s.loading = false;
                    s.records = Some(records);
                }),
                Err(text) => state.update(|s| {
                    s.loading = false;
                    s.error = Some(text);
                }),
            }
        });
    });

    let district_options = move || {
        let records = state.get().records.unwrap_or_default();
        stores::districts(&records)
    };

    let on_district = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| {
            s.district = if value.is_empty() { None } else { Some(value) };
            s.page = 0;
        });
    };

    let filtered = move || {
        let s = state.get();
        let records = s.records.unwrap_or_default();
        stores::filter_by_district(&records, s.district.as_deref())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    let pages = move || stores::page_count(filtered().len());
    let page = move || state.get().page;

    let on_prev = move |_| {
        state.update(|s| s.page = s.page.saturating_sub(1));
    };
    let on_next = move |_| {
        let last = pages() - 1;
        state.update(|s| s.page = (s.page + 1).min(last));
    };
    let prev_disabled = move || page() == 0;
    let next_disabled = move || page() + 1 >= pages();

    view! {
        <div class="stores-page">
            <header class="stores-page__header">
                <h1>"Stores"</h1>
                <select class="stores-page__filter" on:change=on_district>
                    <option value="">"All districts"</option>
                    {move || {
                        let selected = state.get().district;
                        district_options()
                            .into_iter()
                            .map(|name| {
                                let active = selected.as_deref() == Some(name.as_str());
                                view! {
                                    <option value=name.clone() selected=active>
                                        {name.clone()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </header>

            {move || {
                let s = state.get();
                if s.loading {
                    return view! { <p class="stores-page__hint">"Loading registry..."</p> }
                        .into_any();
                }
                if let Some(error) = s.error {
                    return view! { <p class="stores-page__error">{error}</p> }.into_any();
                }

                let records = filtered();
                if records.is_empty() {
                    return view! { <p class="stores-page__hint">"No stores found."</p> }
                        .into_any();
                }

                let rows = stores::page_slice(&records, page()).to_vec();
                view! {
                    <table class="stores-page__table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Category"</th>
                                <th>"District"</th>
                                <th>"Address"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|r| {
                                    view! {
                                        <tr>
                                            <td>{r.name}</td>
                                            <td>{r.category}</td>
                                            <td>{r.district}</td>
                                            <td>{r.road_address}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}

            <footer class="stores-page__pager">
                <button class="btn" on:click=on_prev disabled=prev_disabled>
                    "Previous"
                </button>
                <span class="stores-page__page">
                    {move || format!("Page {} of {}", page() + 1, pages())}
                </span>
                <button class="btn" on:click=on_next disabled=next_disabled>
                    "Next"
                </button>
            </footer>
        </div>
    }
}
