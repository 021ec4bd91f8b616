use std::time::Duration;

use leptos::*;

use super::use_desktop_runtime;
use crate::launch::nav_link_action;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MenuBarClockSnapshot {
    /// 0 is Sunday.
    weekday: u32,
    /// 1-based.
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl MenuBarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

/// `Fri Oct 16 3:07 PM`
fn format_menubar_clock(now: MenuBarClockSnapshot) -> String {
    let weekday = WEEKDAYS.get(now.weekday as usize).copied().unwrap_or("");
    let month = MONTHS
        .get(now.month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("");
    let meridiem = if now.hour < 12 { "AM" } else { "PM" };
    let hour = match now.hour % 12 {
        0 => 12,
        hour => hour,
    };
    format!(
        "{weekday} {month} {} {hour}:{:02} {meridiem}",
        now.day, now.minute
    )
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let (title, links) = runtime
        .catalog
        .with_value(|catalog| (catalog.title.clone(), catalog.navbar.clone()));
    let clock_now = create_rw_signal(MenuBarClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(MenuBarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let focused_title = Signal::derive(move || {
        runtime.state.with(|manager| {
            manager
                .focused()
                .and_then(|id| manager.registry().descriptor_of(id).ok())
                .map(|descriptor| descriptor.title.clone())
        })
    });

    view! {
        <nav class="menubar" aria-label="Menu bar">
            <div class="menubar-left">
                <span class="menubar-brand">{title}</span>
                <span class="menubar-active-window">
                    {move || focused_title.get().unwrap_or_default()}
                </span>
                <ul class="menubar-links">
                    {links
                        .into_iter()
                        .map(|link| {
                            let action = nav_link_action(&link);
                            let disabled = action.is_none();
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        disabled=disabled
                                        on:click=move |_| {
                                            if let Some(action) = action.clone() {
                                                runtime.dispatch_action(action);
                                            }
                                        }
                                    >
                                        {link.label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <time class="menubar-clock">{move || format_menubar_clock(clock_now.get())}</time>
        </nav>
    }
}
