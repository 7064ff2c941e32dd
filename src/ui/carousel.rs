//! Auto-advancing product screen carousel

use leptos::prelude::*;

/// Number of slides in the carousel
const SLIDE_COUNT: usize = 3;

/// Milliseconds between automatic slide advances
#[cfg(not(feature = "ssr"))]
const ADVANCE_INTERVAL_MS: u32 = 3_000;

/// Carousel of product screens, advancing on a fixed interval.
///
/// The track holds all slides side by side and is translated one viewport
/// width per step; the CSS transition does the easing.
#[component]
pub fn ScreenCarousel() -> impl IntoView {
    let active_slide = RwSignal::new(0usize);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(ADVANCE_INTERVAL_MS, move || {
            active_slide.update(|slide| *slide = (*slide + 1) % SLIDE_COUNT);
        });

        on_cleanup(move || drop(interval));
    }

    view! {
        <div class="relative rounded-2xl border border-theme bg-theme-secondary/30 overflow-hidden shadow-2xl">
            <div
                class="flex transition-transform duration-700 ease-out"
                style:transform=move || format!("translateX(-{}%)", active_slide.get() * 100)
            >
                <CarouselSlide title="Boards">
                    <MockScreen
                        heading="Sprint 24"
                        rows=vec![
                            ("Design review", "In progress"),
                            ("API contract", "Done"),
                            ("Mobile layout", "Todo"),
                        ]
                    />
                </CarouselSlide>
                <CarouselSlide title="Timeline">
                    <MockScreen
                        heading="Q3 Roadmap"
                        rows=vec![
                            ("Beta launch", "Aug 18"),
                            ("Partner rollout", "Sep 02"),
                            ("GA release", "Sep 29"),
                        ]
                    />
                </CarouselSlide>
                <CarouselSlide title="Reports">
                    <MockScreen
                        heading="Velocity"
                        rows=vec![
                            ("Completed", "34 tasks"),
                            ("Carried over", "5 tasks"),
                            ("Cycle time", "2.3 days"),
                        ]
                    />
                </CarouselSlide>
            </div>

            // Indicator dots
            <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex items-center gap-2" aria-hidden="true">
                {(0..SLIDE_COUNT).map(|slide| {
                    view! {
                        <div
                            class="w-2 h-2 rounded-full transition-colors duration-300"
                            class=("bg-accent-primary", move || active_slide.get() == slide)
                            class=("bg-theme-tertiary/40", move || active_slide.get() != slide)
                        ></div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// One full-width slide in the carousel track
#[component]
fn CarouselSlide(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="w-full flex-shrink-0 p-8 sm:p-12">
            <p class="text-sm font-medium text-theme-tertiary uppercase tracking-wide mb-4">{title}</p>
            {children()}
        </div>
    }
}

/// Stylized application screen used instead of a screenshot
#[component]
fn MockScreen(heading: &'static str, rows: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <div class="bg-theme-primary rounded-lg border border-theme shadow-xl overflow-hidden">
            <div class="bg-accent-primary/10 px-4 py-2.5 border-b border-theme">
                <span class="font-semibold text-theme-primary">{heading}</span>
            </div>
            <div class="divide-y divide-theme/50">
                {rows.into_iter().map(|(label, value)| {
                    view! {
                        <div class="px-4 py-3 flex items-center justify-between gap-2 text-sm">
                            <span class="text-theme-primary font-medium">{label}</span>
                            <span class="text-theme-tertiary text-xs">{value}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
