//! Window bodies, chosen from the narrowed [`FrameContent`] of each window.

use desktop_contract::{FinderItem, ImageFileData, ItemKind, TextFileData, WindowId};
use leptos::*;

use super::use_desktop_runtime;
use crate::{frame::FrameContent, launch::finder_item_action};

const SKILLS: [(&str, &str); 5] = [
    ("Frontend", "Leptos, TypeScript, CSS"),
    ("Backend", "Rust, Axum, PostgreSQL"),
    ("Tooling", "Cargo, Trunk, GitHub Actions"),
    ("Testing", "cargo test, Playwright"),
    ("Design", "Figma"),
];

const ARTICLES: [(&str, &str, &str); 3] = [
    (
        "Building a desktop in the browser",
        "Sep 2, 2025",
        "https://example.com/blog/browser-desktop",
    ),
    (
        "Reducers for UI state",
        "Jun 18, 2025",
        "https://example.com/blog/reducers",
    ),
    (
        "Shipping WebAssembly front ends",
        "Feb 7, 2025",
        "https://example.com/blog/wasm-front-ends",
    ),
];

const RESUME_URL: &str = "/files/resume.pdf";

#[component]
pub(super) fn WindowContent(window_id: WindowId, content: FrameContent) -> impl IntoView {
    match content {
        FrameContent::Static(window_id) => static_body(window_id),
        FrameContent::Text(text) => view! { <TextFileBody text=text /> }.into_view(),
        FrameContent::Image(image) => view! { <ImageFileBody image=image /> }.into_view(),
        FrameContent::Finder(finder) => {
            view! { <FinderBody active_location=Some(finder.active_location) /> }.into_view()
        }
        // Finder without a payload still browses; it starts on the first location.
        FrameContent::Empty if window_id == WindowId::Finder => {
            view! { <FinderBody active_location=None /> }.into_view()
        }
        FrameContent::Empty => view! { <div class="window-empty"></div> }.into_view(),
    }
}

fn static_body(window_id: WindowId) -> View {
    match window_id {
        WindowId::Terminal => view! {
            <div class="terminal-body">
                <p class="terminal-prompt">"@portfolio % show tech stack"</p>
                <dl>
                    {SKILLS
                        .iter()
                        .map(|(category, items)| view! {
                            <dt>{*category}</dt>
                            <dd>{*items}</dd>
                        })
                        .collect_view()}
                </dl>
            </div>
        }
        .into_view(),
        WindowId::Safari => view! {
            <ul class="safari-articles">
                {ARTICLES
                    .iter()
                    .map(|(title, date, href)| view! {
                        <li>
                            <a href=*href target="_blank" rel="noopener noreferrer">{*title}</a>
                            <time>{*date}</time>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_view(),
        WindowId::Resume => view! {
            <div class="resume-body">
                <a class="resume-download" href=RESUME_URL download="resume.pdf">"Download"</a>
                <object data=RESUME_URL type="application/pdf" aria-label="Resume"></object>
            </div>
        }
        .into_view(),
        WindowId::Contact => view! {
            <div class="contact-body">
                <h3>"Let's connect"</h3>
                <p>"Got an idea or a bug to squash? Say hello."</p>
                <a href="mailto:hello@example.com">"hello@example.com"</a>
            </div>
        }
        .into_view(),
        WindowId::Finder | WindowId::TxtFile | WindowId::ImgFile => ().into_view(),
    }
}

#[component]
fn TextFileBody(text: TextFileData) -> impl IntoView {
    let TextFileData {
        name,
        subtitle,
        image,
        description,
    } = text;
    view! {
        <article class="text-file">
            {image.map(|src| view! { <img src=src alt=name.clone() /> })}
            {subtitle.map(|subtitle| view! { <h3>{subtitle}</h3> })}
            {description.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect_view()}
        </article>
    }
}

#[component]
fn ImageFileBody(image: ImageFileData) -> impl IntoView {
    let ImageFileData { name, image_url } = image;
    view! {
        <figure class="image-file">
            {image_url.map(|src| view! { <img src=src alt=name.clone() /> })}
            <figcaption>{name}</figcaption>
        </figure>
    }
}

#[component]
fn FinderBody(active_location: Option<String>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let (locations, active) = runtime.catalog.with_value(|catalog| {
        let active = active_location
            .as_deref()
            .and_then(|id| catalog.finder_item(id))
            .or_else(|| catalog.default_finder_location())
            .cloned();
        (catalog.finder_locations.clone(), active)
    });
    let active_id = active.as_ref().map(|item| item.id.clone());

    let open_item = move |item: &FinderItem| {
        let action = runtime
            .catalog
            .with_value(|catalog| finder_item_action(&catalog.registry, item));
        match action {
            Ok(action) => runtime.dispatch_action(action),
            Err(err) => logging::warn!("finder item `{}` did not resolve: {err}", item.id),
        }
    };

    view! {
        <div class="finder">
            <aside class="finder-sidebar">
                <h3>"Favorites"</h3>
                <ul>
                    {locations
                        .into_iter()
                        .map(|location| {
                            let selected = active_id.as_deref() == Some(location.id.as_str());
                            let label = location.name.clone();
                            view! {
                                <li class:active=selected>
                                    <button type="button" on:click=move |_| open_item(&location)>
                                        {label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </aside>
            <ul class="finder-items">
                {active
                    .map(|item| item.children)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|item| {
                        let class_name = match item.kind {
                            ItemKind::Folder => "finder-item folder",
                            ItemKind::File => "finder-item file",
                        };
                        let icon = item.icon.clone();
                        let name = item.name.clone();
                        view! {
                            <li class=class_name>
                                <button type="button" on:click=move |_| open_item(&item)>
                                    {icon.map(|src| view! { <img src=src alt="" /> })}
                                    <span>{name}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
