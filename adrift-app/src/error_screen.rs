use cfg_if::cfg_if;
use icondata as i;
use leptos::{html::Div, prelude::*};
use leptos_meta::{Style, Title};
use rand::{rngs::SmallRng, SeedableRng};

use crate::components::icon::Icon;
use crate::decor::{star_field, ShapeKind, GEOMETRIC_ELEMENTS};
#[cfg(feature = "csr")]
use crate::pointer::ContainerRect;
use crate::pointer::PointerOffset;
#[cfg(feature = "csr")]
use leptos::ev::mousemove;
#[cfg(feature = "csr")]
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};

/// Depth factors for the parallax layers. Stars sit nearest and move the
/// most, the text block barely shifts.
const STAR_PARALLAX: f64 = 0.1;
const SHAPE_PARALLAX: f64 = 0.05;
const CONTENT_PARALLAX: f64 = 0.02;

/// Entrance state for the staged text animation. Settled exactly once after
/// the first client render and never reverts while the screen is mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loaded,
}

impl LoadState {
    /// Monotonic: once loaded, always loaded.
    pub fn settle(&mut self) {
        *self = LoadState::Loaded;
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }
}

#[component]
pub fn ErrorScreen() -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let (offset, set_offset) = signal(PointerOffset::default());
    let (load_state, set_load_state) = signal(LoadState::Unloaded);

    // Effects run after the first paint, so this settles the entrance
    // animation exactly once per mount.
    Effect::new(move |_| {
        set_load_state.update(|state| state.settle());
    });

    cfg_if! {
        if #[cfg(feature = "csr")] {
            // Scoped acquisition: the listener is torn down when this
            // component's reactive owner is disposed.
            let _ = use_event_listener_with_options(
                use_window(),
                mousemove,
                move |ev| {
                    let Some(el) = container.get_untracked() else {
                        return;
                    };
                    let rect = el.get_bounding_client_rect();
                    let rect = ContainerRect {
                        left: rect.left(),
                        top: rect.top(),
                        width: rect.width(),
                        height: rect.height(),
                    };
                    if let Some(next) = PointerOffset::from_pointer(
                        ev.client_x() as f64,
                        ev.client_y() as f64,
                        rect,
                    ) {
                        set_offset.set(next);
                    }
                },
                UseEventListenerOptions::default()
                    .capture(false)
                    .passive(true),
            );

            let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
        } else {
            let _ = set_offset;
            let mut rng = SmallRng::seed_from_u64(0);
        }
    }

    // Drawn once per mount; pointer movement only translates the layer.
    let stars = star_field(&mut rng)
        .into_iter()
        .map(|star| {
            let style = move || {
                format!(
                    "left: {}%; top: {}%; width: {}px; height: {}px; transform: {}; animation-delay: {}s; animation-duration: {}s;",
                    star.left,
                    star.top,
                    star.size,
                    star.size,
                    offset.get().translate(STAR_PARALLAX),
                    star.delay_seconds,
                    star.duration_seconds,
                )
            };
            view! {
                <div class="absolute animate-twinkle" style=style>
                    <div class="w-full h-full bg-white rounded-full opacity-70"></div>
                </div>
            }
        })
        .collect_view();

    let shapes = GEOMETRIC_ELEMENTS
        .into_iter()
        .map(|element| {
            let style = move || {
                format!(
                    "left: {}%; top: {}%; width: {}px; height: {}px; transform: {} rotate({}deg); animation-delay: {}s; animation-duration: {}s;",
                    element.left,
                    element.top,
                    element.size_px,
                    element.size_px,
                    offset.get().translate(SHAPE_PARALLAX),
                    element.rotation_deg,
                    element.float_delay_seconds(),
                    element.float_duration_seconds(),
                )
            };
            let outline = match element.kind {
                ShapeKind::Circle => {
                    view! { <div class="w-full h-full border-2 border-purple-300 rounded-full"></div> }
                        .into_any()
                }
                ShapeKind::Triangle => {
                    view! { <div class="w-full h-full polygon-triangle"></div> }.into_any()
                }
                ShapeKind::Square => {
                    view! { <div class="w-full h-full border-2 border-pink-300 rotate-45"></div> }
                        .into_any()
                }
                ShapeKind::Pentagon => {
                    view! { <div class="w-full h-full polygon-pentagon"></div> }.into_any()
                }
            };
            view! {
                <div class="absolute animate-float opacity-20" style=style>{outline}</div>
            }
        })
        .collect_view();

    let content_style =
        move || format!("transform: {};", offset.get().translate(CONTENT_PARALLAX));

    let numeral_class = move || {
        format!(
            "text-8xl sm:text-9xl lg:text-[12rem] font-bold text-white mb-8 transition-all duration-1000 ease-out {}",
            if load_state.get().is_loaded() {
                "opacity-100 scale-100"
            } else {
                "opacity-0 scale-95"
            }
        )
    };
    let entrance = move || {
        if load_state.get().is_loaded() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-8"
        }
    };
    let heading_class = move || {
        format!(
            "text-4xl sm:text-5xl lg:text-6xl font-bold text-white mb-6 transition-all duration-1000 ease-out {}",
            entrance()
        )
    };
    let subheading_class = move || {
        format!(
            "text-lg sm:text-xl lg:text-2xl text-purple-300 mb-12 max-w-2xl mx-auto leading-relaxed transition-all duration-1000 ease-out {}",
            entrance()
        )
    };
    let button_class = move || {
        format!(
            "group relative inline-flex items-center gap-3 px-8 py-4 sm:px-10 sm:py-5 bg-gradient-to-r from-purple-600 to-blue-600 text-white font-semibold text-lg rounded-full transition-all duration-300 ease-out transform hover:scale-105 hover:shadow-2xl focus:outline-none focus:ring-4 focus:ring-purple-500 focus:ring-opacity-50 {}",
            entrance()
        )
    };

    // Unconditional full navigation to the site root; the host owns the
    // outcome from here.
    let return_home = move |_| {
        cfg_if! {
            if #[cfg(feature = "csr")] {
                if let Err(err) = window().location().set_href("/") {
                    log::error!("navigation to / failed: {err:?}");
                }
            }
        }
    };

    view! {
        <Title text="Page Not Found" />
        <Style id="error-screen">{SCREEN_STYLE}</Style>
        <div
            node_ref=container
            class="min-h-screen overflow-hidden relative flex items-center justify-center select-none"
            style="background: linear-gradient(135deg, #0B0B2B 0%, #2C1B47 100%);"
        >
            {stars}

            // Shooting star streaks, pure CSS
            <div class="absolute inset-0 pointer-events-none">
                <div class="shooting-star"></div>
                <div class="shooting-star" style="animation-delay: 5s;"></div>
                <div class="shooting-star" style="animation-delay: 12s;"></div>
            </div>

            {shapes}

            <div class="text-center z-10 px-4 sm:px-6 lg:px-8 relative" style=content_style>
                <div
                    class=numeral_class
                    style="text-shadow: 0 0 20px rgba(255, 255, 255, 0.3), 0 0 40px rgba(147, 51, 234, 0.2); letter-spacing: 0.05em;"
                >
                    "404"
                </div>

                <h1
                    class=heading_class
                    style="animation-delay: 0.3s; text-shadow: 0 0 10px rgba(255, 255, 255, 0.2);"
                >
                    "Lost in Space?"
                </h1>

                <p class=subheading_class style="animation-delay: 0.6s;">
                    "Houston, we have a problem. This page doesn't exist in our universe."
                </p>

                <button
                    on:click=return_home
                    class=button_class
                    style="animation-delay: 0.9s; box-shadow: 0 10px 30px rgba(147, 51, 234, 0.3);"
                    aria-label="Return to homepage"
                >
                    <Icon
                        icon=i::AiHomeFilled
                        size_px=24
                        aria_hidden=true
                        attr:class="transition-transform duration-300 group-hover:scale-110"
                    />
                    <span>"Return to Earth"</span>
                    <div class="absolute inset-0 rounded-full bg-gradient-to-r from-purple-400 to-blue-400 opacity-0 group-hover:opacity-20 transition-opacity duration-300"></div>
                </button>

                <div class="absolute -top-4 -left-4 opacity-30 animate-pulse">
                    <Icon icon=i::FaStarSolid size_px=16 aria_hidden=true attr:class="text-yellow-300" />
                </div>
                <div
                    class="absolute -bottom-4 -right-4 opacity-30 animate-pulse"
                    style="animation-delay: 1s;"
                >
                    <Icon icon=i::FaStarSolid size_px=20 aria_hidden=true attr:class="text-blue-300" />
                </div>
            </div>
        </div>
    }
}

const SCREEN_STYLE: &str = r#"
@keyframes twinkle {
    0%, 100% { opacity: 0.3; }
    50% { opacity: 1; }
}

@keyframes float {
    0%, 100% { transform: translateY(0px) rotate(0deg); }
    50% { transform: translateY(-20px) rotate(180deg); }
}

@keyframes shooting-star {
    0% {
        transform: translateX(-100px) translateY(100px);
        opacity: 0;
    }
    5% { opacity: 1; }
    95% { opacity: 1; }
    100% {
        transform: translateX(100vw) translateY(-100px);
        opacity: 0;
    }
}

.animate-twinkle {
    animation: twinkle 2s ease-in-out infinite;
}

.animate-float {
    animation: float 5s ease-in-out infinite;
}

.shooting-star {
    position: absolute;
    top: 20%;
    left: -10px;
    width: 2px;
    height: 2px;
    background: linear-gradient(45deg, #ffffff, #87ceeb);
    border-radius: 50%;
    animation: shooting-star 8s linear infinite;
}

.shooting-star::before {
    content: '';
    position: absolute;
    top: 0;
    left: 0;
    width: 50px;
    height: 2px;
    background: linear-gradient(45deg, transparent, #ffffff, transparent);
    transform-origin: 0 0;
    transform: translateX(-50px);
}

.polygon-triangle {
    clip-path: polygon(50% 0%, 0% 100%, 100% 100%);
    background: linear-gradient(45deg, transparent, rgba(59, 130, 246, 0.3), transparent);
}

.polygon-pentagon {
    clip-path: polygon(50% 0%, 100% 38%, 82% 100%, 18% 100%, 0% 38%);
    background: linear-gradient(45deg, transparent, rgba(6, 182, 212, 0.3), transparent);
}

@media (max-width: 768px) {
    .shooting-star {
        width: 1px;
        height: 1px;
    }

    .shooting-star::before {
        width: 30px;
        height: 1px;
        transform: translateX(-30px);
    }
}

@media (prefers-reduced-motion: reduce) {
    .animate-twinkle,
    .animate-float,
    .animate-pulse,
    .shooting-star {
        animation: none;
    }
}
"#;
