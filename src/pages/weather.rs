//! Short-term weather forecast view.

use leptos::prelude::*;

use crate::state::weather::{
    CATEGORY_HUMIDITY, CATEGORY_PRECIP_PROBABILITY, CATEGORY_TEMPERATURE, ForecastQuery,
    SeriesPoint, WeatherState, series,
};

/// Weather page — fetches one village-forecast batch on mount and shows
/// the temperature, humidity, and precipitation-probability series.
#[component]
pub fn WeatherPage() -> impl IntoView {
    let state = expect_context::<RwSignal<WeatherState>>();

    Effect::new(move || {
        if !state.get_untracked().items.is_empty() {
            return;
        }
        state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_forecast(&ForecastQuery::default()).await {
                Ok(items) => state.update(|s| {
                    s.loading = false;
                    s.items = items;
                }),
                Err(text) => state.update(|s| {
                    s.loading = false;
                    s.error = Some(text);
                }),
            }
        });
    });

    view! {
        <div class="weather-page">
            <h1>"Weather"</h1>

            {move || {
                let s = state.get();
                if s.loading {
                    return view! { <p class="weather-page__hint">"Loading forecast..."</p> }
                        .into_any();
                }
                if let Some(error) = s.error {
                    return view! { <p class="weather-page__error">{error}</p> }.into_any();
                }
                if s.items.is_empty() {
                    return view! { <p class="weather-page__hint">"No forecast data."</p> }
                        .into_any();
                }

                view! {
                    <div class="weather-page__sections">
                        <ForecastSection
                            title="Temperature (°C)"
                            points=series(&s.items, CATEGORY_TEMPERATURE)
                        />
                        <ForecastSection
                            title="Humidity (%)"
                            points=series(&s.items, CATEGORY_HUMIDITY)
                        />
                        <ForecastSection
                            title="Precipitation probability (%)"
                            points=series(&s.items, CATEGORY_PRECIP_PROBABILITY)
                        />
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

/// One category's series as a card with a time/value list.
#[component]
fn ForecastSection(title: &'static str, points: Vec<SeriesPoint>) -> impl IntoView {
    view! {
        <section class="weather-page__section">
            <h2>{title}</h2>
            {if points.is_empty() {
                view! { <p class="weather-page__hint">"No data for this category."</p> }
                    .into_any()
            } else {
                view! {
                    <ul class="weather-page__series">
                        {points
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <li>
                                        <span class="weather-page__label">{p.label}</span>
                                        <span class="weather-page__value">{p.value}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}
