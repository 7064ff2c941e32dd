use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHECK: &str = "check";
    pub const ARROW_UP: &str = "arrow-up";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const USERS: &str = "users";
    pub const SHIELD: &str = "shield";
}
