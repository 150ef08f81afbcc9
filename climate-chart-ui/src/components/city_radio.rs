//! Radio buttons feeding the minimum temperature line.

use crate::state::AppState;
use climate_bindings::dashboard::CITY_RADIO;
use climate_obs::City;
use dioxus::prelude::*;

/// City radio group (`city`). Writes the chosen city to `radio_city`.
#[component]
pub fn CityRadio() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.radio_city)();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            for city in City::ALL {
                label {
                    key: "{city}",
                    input {
                        r#type: "radio",
                        name: CITY_RADIO.as_str(),
                        value: city.name(),
                        checked: city.name() == selected,
                        onchange: move |evt: Event<FormData>| state.radio_city.set(evt.value()),
                    }
                    " {city}"
                }
            }
        }
    }
}
