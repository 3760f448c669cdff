use leptos::prelude::*;

/// Decorative blurred shapes behind a section. No state, no inputs.
#[component]
pub fn BackgroundShapes() -> impl IntoView {
    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop__blob backdrop__blob--one"></div>
            <div class="backdrop__blob backdrop__blob--two"></div>
            <div class="backdrop__blob backdrop__blob--three"></div>
            <svg class="backdrop__arc" width="400" height="400" viewBox="0 0 400 400">
                <circle cx="400" cy="0" r="400" fill="#1E3A8A" />
            </svg>
        </div>
    }
}
