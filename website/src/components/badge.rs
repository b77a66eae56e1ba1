use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum BadgeColor {
    #[default]
    Slate,
    Indigo,
    Cyan,
}

impl BadgeColor {
    /// Browser and editor tags get their own colours; everything else is neutral.
    pub fn for_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "chrome" | "firefox" | "edge" | "browser" => BadgeColor::Indigo,
            "vscode" | "vs code" | "editor" => BadgeColor::Cyan,
            _ => BadgeColor::Slate,
        }
    }

    fn class(self) -> &'static str {
        match self {
            BadgeColor::Slate => "px-2 py-0.5 text-xs font-medium rounded-full border bg-slate-100 text-slate-700 border-slate-200 dark:bg-slate-800/60 dark:text-slate-300 dark:border-slate-700",
            BadgeColor::Indigo => "px-2 py-0.5 text-xs font-medium rounded-full border bg-indigo-50 text-indigo-700 border-indigo-200 dark:bg-indigo-900/30 dark:text-indigo-300 dark:border-indigo-800",
            BadgeColor::Cyan => "px-2 py-0.5 text-xs font-medium rounded-full border bg-cyan-50 text-cyan-700 border-cyan-200 dark:bg-cyan-900/30 dark:text-cyan-300 dark:border-cyan-800",
        }
    }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(optional)] color: BadgeColor,
) -> impl IntoView {
    view! {
        <span class=color.class()>
            {children()}
        </span>
    }
}

/// Tags in data order, one badge each.
#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <ul class="flex flex-wrap gap-2" aria-label="Tags">
            {tags.into_iter().map(|tag| {
                let color = BadgeColor::for_tag(&tag);
                view! {
                    <li>
                        <Badge color=color>{tag}</Badge>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
