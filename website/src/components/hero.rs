use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="pt-16 pb-8 px-6 text-center relative overflow-hidden">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[700px] h-[400px] bg-indigo-500/10 blur-[120px] rounded-full pointer-events-none"></div>

            <div class="relative z-10 max-w-3xl mx-auto">
                <h1 class="text-4xl md:text-6xl font-black tracking-tight mb-6">
                    "Tools that make work feel "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-500 via-purple-500 to-cyan-400">
                        "effortless"
                    </span>
                </h1>
                <p class="text-lg text-slate-600 dark:text-slate-400 font-light leading-relaxed">
                    "Small, focused Chrome & VS Code extensions that save your time and sanity."
                    <br />
                    "Built to fit into your flow."
                </p>
            </div>
        </section>
    }
}
