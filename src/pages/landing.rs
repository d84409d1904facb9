use yew::prelude::*;

use crate::components::counter::RepCounter;
use crate::components::scroll_reveal::use_reveal_on_scroll;
use crate::components::signup::Signup;
use crate::dom;

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <span class="feature-icon">{ props.icon }</span>
            <h3>{ props.title }</h3>
            <p>{ props.description }</p>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    use_reveal_on_scroll(".feature-card");

    let goto_signup = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_selector("#signup");
    });

    let goto_features = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_selector("#features");
    });

    html! {
        <div class="landing-page">
            <style>
                {r#"
                .landing-page {
                    background: #1a1a1a;
                    color: #fff;
                    font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
                }
                .landing-page section {
                    padding: 6rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .landing-page h2 {
                    font-size: 2.2rem;
                    text-align: center;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EFFB2);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .section-lead {
                    text-align: center;
                    color: rgba(255, 255, 255, 0.7);
                    max-width: 600px;
                    margin: 0 auto 3rem;
                }

                /* Hero */
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                    background: radial-gradient(circle at 50% 20%, rgba(46, 204, 113, 0.15), transparent 60%);
                }
                .hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 560px;
                    margin-bottom: 2rem;
                }
                .hero-cta {
                    background: #2ECC71;
                    color: #0b2e1a;
                    font-size: 1.1rem;
                    font-weight: 700;
                    padding: 1rem 2.5rem;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .hero-cta:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 8px 24px rgba(46, 204, 113, 0.35);
                }
                .hero-secondary {
                    display: inline-block;
                    margin-top: 1rem;
                    color: #7EFFB2;
                    text-decoration: none;
                }

                /* Feature cards */
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .feature-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(46, 204, 113, 0.15);
                    border-radius: 16px;
                    padding: 2rem;
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .feature-card.animate-in {
                    opacity: 1;
                    transform: translateY(0);
                }
                .feature-icon {
                    font-size: 2rem;
                    display: block;
                    margin-bottom: 1rem;
                }
                .feature-card h3 {
                    margin-bottom: 0.5rem;
                }
                .feature-card p {
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.5;
                }

                /* Rep counter */
                .counter {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                }
                .counter-display {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    width: 180px;
                    height: 180px;
                    border-radius: 50%;
                    border: 3px solid rgba(46, 204, 113, 0.5);
                    background: rgba(30, 30, 30, 0.7);
                }
                .counter-display.pulse {
                    animation: counter-pulse 0.2s ease-in-out;
                }
                @keyframes counter-pulse {
                    0% { transform: scale(1); }
                    50% { transform: scale(1.08); border-color: #2ECC71; }
                    100% { transform: scale(1); }
                }
                .counter-value {
                    font-size: 3.5rem;
                    font-weight: 700;
                }
                .counter-label {
                    color: rgba(255, 255, 255, 0.6);
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-size: 0.8rem;
                }
                .counter-controls {
                    display: flex;
                    gap: 1rem;
                }
                .counter-button {
                    background: rgba(30, 30, 30, 0.9);
                    color: #fff;
                    border: 1px solid rgba(46, 204, 113, 0.4);
                    border-radius: 8px;
                    font-size: 1.3rem;
                    padding: 0.6rem 1.4rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .counter-button:hover {
                    background: rgba(46, 204, 113, 0.2);
                }
                .counter-reset {
                    font-size: 1rem;
                }

                /* Signup form */
                .signup-box {
                    max-width: 480px;
                    margin: 0 auto;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(46, 204, 113, 0.15);
                    border-radius: 16px;
                    padding: 2.5rem;
                }
                .form-group {
                    margin-bottom: 1.25rem;
                }
                .form-group label {
                    display: block;
                    margin-bottom: 0.4rem;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.9rem;
                }
                .form-group input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: #121212;
                    color: #fff;
                    font-size: 1rem;
                    transition: border-color 0.2s ease;
                }
                .form-group input:focus {
                    outline: none;
                    border-color: #2ECC71;
                }
                .form-group.error input {
                    border-color: #e74c3c;
                }
                .form-group.success input {
                    border-color: #2ECC71;
                }
                .error-text {
                    display: block;
                    margin-top: 0.35rem;
                    color: #e74c3c;
                    font-size: 0.85rem;
                }
                .signup-submit {
                    width: 100%;
                    margin-top: 0.5rem;
                    background: #2ECC71;
                    color: #0b2e1a;
                    font-weight: 700;
                    font-size: 1rem;
                    padding: 0.9rem;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                }
                .signup-submit:hover {
                    filter: brightness(1.1);
                }
                .success-message {
                    text-align: center;
                }
                .success-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    background: rgba(46, 204, 113, 0.2);
                    color: #2ECC71;
                    font-size: 1.6rem;
                    margin-bottom: 1rem;
                }
                .success-message p {
                    color: rgba(255, 255, 255, 0.7);
                }

                /* Footer */
                .footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 2rem;
                    text-align: center;
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.9rem;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.4rem;
                    }
                    .landing-page section {
                        padding: 4rem 1.25rem;
                    }
                }
                "#}
            </style>

            <header class="hero">
                <h1>{"FitTracker Pro"}</h1>
                <p class="hero-subtitle">
                    {"Count every rep, watch your progress and build the habit that sticks. \
                      No gadgets required, your phone is the gym buddy."}
                </p>
                <button class="hero-cta" onclick={goto_signup.clone()}>{"Get Started"}</button>
                <a href="#features" class="hero-secondary" onclick={goto_features}>
                    {"See what's inside ↓"}
                </a>
            </header>

            <section id="features">
                <h2>{"Everything You Need to Keep Moving"}</h2>
                <p class="section-lead">
                    {"FitTracker Pro bundles the essentials of a training log into one clean page."}
                </p>
                <div class="features-grid">
                    <FeatureCard
                        icon="💪"
                        title="Guided Workouts"
                        description="Follow structured strength and cardio plans that scale with your level."
                    />
                    <FeatureCard
                        icon="📊"
                        title="Progress Analytics"
                        description="See weekly volume, streaks and personal records at a glance."
                    />
                    <FeatureCard
                        icon="🥗"
                        title="Nutrition Notes"
                        description="Log meals next to your sessions and spot what fuels your best days."
                    />
                    <FeatureCard
                        icon="⏱️"
                        title="Rest Timers"
                        description="Built-in interval and rest timers keep every set honest."
                    />
                    <FeatureCard
                        icon="😴"
                        title="Recovery Tracking"
                        description="Sleep and soreness check-ins tell you when to push and when to pause."
                    />
                    <FeatureCard
                        icon="🏆"
                        title="Community Challenges"
                        description="Join monthly challenges and climb the board with friends."
                    />
                </div>
            </section>

            <section id="tracker">
                <h2>{"Try the Rep Counter"}</h2>
                <p class="section-lead">
                    {"Tap through a set right here. The counter never drops below zero, \
                      so a stray tap can't wreck your log."}
                </p>
                <RepCounter />
            </section>

            <section id="signup">
                <h2>{"Start Your Free Trial"}</h2>
                <p class="section-lead">
                    {"Four quick fields and you're in. No credit card, no spam."}
                </p>
                <Signup />
            </section>

            <footer class="footer">
                {"© 2026 FitTracker Pro. Train smart, recover smarter."}
            </footer>
        </div>
    }
}
