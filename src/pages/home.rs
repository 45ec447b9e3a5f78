use leptos::*;
use leptos_router::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="container home-page">
            <header>
                <h1>"PiggyBankPC"</h1>
                <p class="tagline">"The budget PC gaming leaderboard"</p>
            </header>

            <section class="intro">
                <h2>"How it works"</h2>
                <p>
                    "Run the benchmark, submit your results, and see how your "
                    "budget build stacks up. Every submission gets a free "
                    "diagnostic report: detected issues, how much performance "
                    "they cost you, and exactly how to fix them."
                </p>
                <p>
                    "Already submitted? Open your "
                    <A href="/submission/1/diagnostics">"diagnostic results"</A>
                    " to see what's holding your frames back."
                </p>
            </section>
        </main>
    }
}
