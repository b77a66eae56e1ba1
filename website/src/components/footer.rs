use leptos::prelude::*;
use showcase_core::Settings;

use crate::data::social_links;

#[component]
pub fn Footer() -> impl IntoView {
    let site = expect_context::<Settings>().site;
    let mailto = format!("mailto:{}", site.contact_email);
    let copyright = copyright_line(js_sys::Date::new_0().get_full_year(), &site.author);

    view! {
        <footer class="border-t border-slate-200 dark:border-slate-800 py-12 mt-auto">
            <div class="max-w-7xl mx-auto px-6 flex flex-col items-center gap-6 text-sm text-slate-500 dark:text-slate-400">
                <div class="text-center">
                    <p class="text-base font-semibold text-slate-800 dark:text-slate-200">
                        "Love it? Hate it? Broke it?"
                    </p>
                    <p class="mt-1">
                        "Your feedback makes these extensions better. Don\u{2019}t hesitate to drop me a line."
                    </p>
                    <a
                        href=mailto
                        aria-label=format!("Email {}", site.contact_email)
                        class="inline-block mt-4 px-6 py-2.5 rounded-full bg-slate-900 text-white font-medium hover:bg-slate-700 dark:bg-white dark:text-black dark:hover:bg-slate-200 transition-colors"
                    >
                        "Email me"
                    </a>
                </div>

                <ul class="flex gap-6" aria-label="Social links">
                    {social_links().into_iter().map(|link| {
                        view! {
                            <li>
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    class="hover:text-slate-900 dark:hover:text-white transition-colors"
                                >
                                    {(link.icon)()}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>

                <p>{copyright}</p>
            </div>
        </footer>
    }
}

fn copyright_line(year: u32, author: &str) -> String {
    format!("\u{00A9} {year} {author}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line_has_year_and_author() {
        assert_eq!(
            copyright_line(2026, "Your Name"),
            "\u{00A9} 2026 Your Name. All rights reserved."
        );
    }
}
