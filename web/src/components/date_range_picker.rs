use leptos::prelude::*;
use thaw::*;

use crate::dates::{format_iso, parse_iso, presets_for, today, DateRange, RangePreset};

/// The range selector: two bound date inputs plus the quick-select preset
/// buttons. Manual edits and presets both write the same `range` signal, so
/// nothing downstream can tell them apart.
#[component]
pub fn DateRangePicker(range: RwSignal<DateRange>) -> impl IntoView {
    view! {
        <div class="date-range-picker">
            <div class="date-range-picker__inputs">
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=move || range.get().start.map(format_iso).unwrap_or_default()
                    on:change=move |ev| {
                        let parsed = parse_iso(&event_target_value(&ev));
                        range.update(|r| r.start = parsed);
                    }
                />
                <span class="date-range-picker__separator">"to"</span>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=move || range.get().end.map(format_iso).unwrap_or_default()
                    on:change=move |ev| {
                        let parsed = parse_iso(&event_target_value(&ev));
                        range.update(|r| r.end = parsed);
                    }
                />
            </div>

            <div class="date-range-picker__presets">
                {presets_for(today())
                    .into_iter()
                    .map(|RangePreset { label, range: preset }| {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                size=ButtonSize::Small
                                on_click=move |_| range.set(preset)
                            >
                                {label}
                            </Button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
