pub mod components;
pub mod data;
pub mod pages;
pub mod theme;

use components::footer::Footer;
use components::header::Header;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use pages::extension_detail::ExtensionDetail;
use pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    theme::provide_theme();

    let settings = data::settings();
    let site_name = settings.site.name.clone();
    provide_context(settings);

    view! {
        <Title text=site_name />
        <Router>
            <ScrollToTop />
            <div class="min-h-screen flex flex-col bg-white text-slate-900 dark:bg-[#0b1020] dark:text-slate-100 font-sans">
                <Header />
                <main class="flex-1">
                    <Routes fallback=|| "Page not found.">
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/extensions/:slug") view=ExtensionDetail />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    ()
}
