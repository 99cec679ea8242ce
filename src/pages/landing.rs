use std::rc::Rc;

use log::{debug, info};
use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::behaviors::scroll::{anchor_target, scroll_destination};
use crate::components::contact_form::ContactForm;
use crate::components::counter::Counter;
use crate::components::header::Header;
use crate::components::testimonials::Testimonials;
use crate::config::PageConfig;
use crate::dom::listener::EventListener;
use crate::dom::observer::OneShotObserver;
use crate::dom::query::{event_element, toggle_class};

const REVEAL_SELECTOR: &str = ".fade-in-up";

const SERVICES: &[(&str, &str, &str)] = &[
    ("📦", "التخليص الجمركي", "إنهاء إجراءات الاستيراد والتصدير في جميع المنافذ البرية والبحرية والجوية."),
    ("🚚", "النقل البري", "أسطول شاحنات مبرّدة وجافة لنقل بضائعك من الميناء إلى باب المستودع."),
    ("📑", "استخراج التصاريح", "متابعة شهادات المطابقة والفسح مع الجهات الحكومية نيابةً عنك."),
    ("🏬", "التخزين والتوزيع", "مستودعات مؤمّنة وخدمة توزيع على الفروع حسب جدولك."),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Rc<PageConfig>,
}

/// Sends in-page anchor clicks to their target with a smooth scroll that
/// leaves room for the fixed header.
fn smooth_scroll_listener(header_offset: f64) -> Option<EventListener> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let lookup = document.clone();

    Some(EventListener::new(&document, "click", move |e| {
        let anchor = event_element(&e).and_then(|el| el.closest("a[href^='#']").ok().flatten());
        let Some(anchor) = anchor else {
            return;
        };
        e.prevent_default();

        let href = anchor.get_attribute("href").unwrap_or_default();
        let Some(selector) = anchor_target(&href) else {
            return;
        };
        let Some(target) = lookup.query_selector(selector).ok().flatten() else {
            debug!("Anchor {} has no target", selector);
            return;
        };

        let top = scroll_destination(
            target.get_bounding_client_rect().top(),
            window.page_y_offset().unwrap_or(0.0),
            header_offset,
        );
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }))
}

fn reveal_observer(threshold: f64, root_margin: &str) -> Option<OneShotObserver> {
    let root = web_sys::window()?.document()?.document_element()?;
    let observer = OneShotObserver::new(threshold, root_margin, |element: Element| {
        toggle_class(&element, "visible", true);
    })?;
    let watched = observer.observe_all(&root, REVEAL_SELECTOR);
    debug!("Watching {} elements for reveal", watched);
    Some(observer)
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let config = props.config.clone();

    {
        let config = config.clone();
        use_effect_with_deps(
            move |config| {
                let scroll = smooth_scroll_listener(config.header_offset_px);
                let reveal = reveal_observer(config.reveal_threshold, &config.reveal_root_margin);
                info!("Landing page behaviors attached");
                move || {
                    drop(scroll);
                    drop(reveal);
                }
            },
            config,
        );
    }

    html! {
        <div class="landing-page" dir={if config.rtl { "rtl" } else { "ltr" }}>
            <Header shrink_threshold={config.header_shrink_threshold_px} />

            <main>
                <section id="home" class="hero">
                    <div class="hero-content fade-in-up">
                        <h1>{"شريكك الموثوق في التخليص الجمركي والنقل"}</h1>
                        <p>{"نُنهي إجراءات شحناتك بسرعة ودقة، ونوصلها إلى وجهتها بأمان."}</p>
                        <div class="hero-actions">
                            <a href="#contact" class="btn btn-primary">{"اطلب عرض سعر"}</a>
                            <a href="#services" class="btn btn-ghost">{"تعرّف على خدماتنا"}</a>
                        </div>
                    </div>
                </section>

                <section id="services" class="services">
                    <h2 class="section-title fade-in-up">{"خدماتنا"}</h2>
                    <div class="services-grid">
                        { SERVICES.iter().map(|(icon, title, text)| html! {
                            <article class="service-card fade-in-up">
                                <span class="service-icon" aria-hidden="true">{*icon}</span>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </article>
                        }).collect::<Html>() }
                    </div>
                </section>

                <section id="stats" class="stats">
                    <Counter target={15_u64} suffix="+" label="عاماً من الخبرة"
                        speed={config.counter_speed} step_ms={config.counter_step_ms} threshold={config.counter_threshold} />
                    <Counter target={12000_u64} suffix="+" label="شحنة مُخلّصة"
                        speed={config.counter_speed} step_ms={config.counter_step_ms} threshold={config.counter_threshold} />
                    <Counter target={850_u64} label="عميل دائم"
                        speed={config.counter_speed} step_ms={config.counter_step_ms} threshold={config.counter_threshold} />
                    <Counter target={60_u64} label="شاحنة في أسطولنا"
                        speed={config.counter_speed} step_ms={config.counter_step_ms} threshold={config.counter_threshold} />
                </section>

                <Testimonials interval_ms={config.slide_interval_ms} rtl={config.rtl} />

                <section id="contact" class="contact">
                    <h2 class="section-title fade-in-up">{"تواصل معنا"}</h2>
                    <p class="section-intro fade-in-up">{"أرسل لنا تفاصيل شحنتك وسنعود إليك بعرض سعر مفصّل."}</p>
                    <ContactForm
                        submit_delay_ms={config.submit_delay_ms}
                        success_dismiss_ms={config.success_dismiss_ms}
                    />
                </section>
            </main>

            <footer class="footer">
                <p>{"© أيمن للتخليص الجمركي والنقل. جميع الحقوق محفوظة."}</p>
                <a href="#home">{"العودة للأعلى"}</a>
            </footer>

            <style>
                {r#"
                    :root {
                        --primary: #0b3d91;
                        --accent: #f5a623;
                        --text: #1d2433;
                        --muted: #5b6578;
                        --surface: #f4f6fa;
                    }

                    body {
                        margin: 0;
                        font-family: "Tajawal", "Segoe UI", sans-serif;
                        color: var(--text);
                    }

                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 10;
                        background: #fff;
                        padding: 1.5rem 2rem;
                        transition: padding 0.3s ease, box-shadow 0.3s ease;
                    }

                    .header.shrink {
                        padding: 0.6rem 2rem;
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                    }

                    .header-inner {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .logo {
                        font-weight: 700;
                        color: var(--primary);
                        text-decoration: none;
                    }

                    .nav {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .nav-link {
                        color: var(--text);
                        text-decoration: none;
                    }

                    .nav-cta {
                        color: var(--accent);
                        font-weight: 700;
                    }

                    .mobile-toggle {
                        display: none;
                        background: none;
                        border: 0;
                        cursor: pointer;
                    }

                    .mobile-toggle span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: var(--text);
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }

                    @media (max-width: 768px) {
                        .mobile-toggle {
                            display: block;
                        }

                        .mobile-toggle.active span:nth-child(1) {
                            transform: translateY(7px) rotate(45deg);
                        }

                        .mobile-toggle.active span:nth-child(2) {
                            opacity: 0;
                        }

                        .mobile-toggle.active span:nth-child(3) {
                            transform: translateY(-7px) rotate(-45deg);
                        }

                        .nav {
                            position: fixed;
                            top: 0;
                            right: -100%;
                            width: 75%;
                            height: 100vh;
                            flex-direction: column;
                            padding: 5rem 2rem;
                            background: #fff;
                            box-shadow: -4px 0 20px rgba(0, 0, 0, 0.1);
                            transition: right 0.3s ease;
                        }

                        .nav.active {
                            right: 0;
                        }
                    }

                    .hero {
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background: linear-gradient(135deg, var(--primary), #072a63);
                        color: #fff;
                        padding: 0 1.5rem;
                    }

                    .btn {
                        display: inline-block;
                        padding: 0.8rem 1.8rem;
                        border-radius: 6px;
                        border: 0;
                        font: inherit;
                        text-decoration: none;
                        cursor: pointer;
                    }

                    .btn-primary {
                        background: var(--accent);
                        color: #fff;
                    }

                    .btn-primary:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }

                    .btn-ghost {
                        border: 1px solid #fff;
                        color: #fff;
                    }

                    section {
                        padding: 5rem 1.5rem;
                    }

                    .section-title {
                        text-align: center;
                        color: var(--primary);
                    }

                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .service-card {
                        background: var(--surface);
                        border-radius: 12px;
                        padding: 2rem;
                    }

                    .stats {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 3rem;
                        background: var(--primary);
                        color: #fff;
                        text-align: center;
                    }

                    .stat-number {
                        display: block;
                        font-size: 2.5rem;
                        font-weight: 700;
                    }

                    .testimonial-viewport {
                        overflow: hidden;
                        max-width: 800px;
                        margin: 0 auto;
                    }

                    .testimonial-track {
                        display: flex;
                        transition: transform 0.5s ease;
                    }

                    .testimonial-slide {
                        flex: 0 0 100%;
                        margin: 0;
                        padding: 2rem;
                        text-align: center;
                        opacity: 0.4;
                        transition: opacity 0.5s ease;
                    }

                    .testimonial-slide.active {
                        opacity: 1;
                    }

                    .testimonial-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                    }

                    .dot {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        border: 0;
                        background: #c8cfdc;
                        cursor: pointer;
                    }

                    .dot.active {
                        background: var(--accent);
                    }

                    .contact-form {
                        max-width: 640px;
                        margin: 0 auto;
                        display: grid;
                        gap: 1rem;
                    }

                    .form-group {
                        display: grid;
                        gap: 0.3rem;
                    }

                    .form-group input,
                    .form-group textarea {
                        padding: 0.7rem;
                        border: 1px solid #c8cfdc;
                        border-radius: 6px;
                        font: inherit;
                    }

                    .form-group.invalid input,
                    .form-group.invalid textarea {
                        border-color: #d0342c;
                    }

                    .field-error {
                        color: #d0342c;
                        font-size: 0.85rem;
                    }

                    .form-success {
                        background: #e6f6ec;
                        color: #1d7a3e;
                        padding: 1rem;
                        border-radius: 6px;
                    }

                    .footer {
                        display: flex;
                        justify-content: space-between;
                        padding: 2rem;
                        background: var(--text);
                        color: #fff;
                    }

                    .footer a {
                        color: var(--accent);
                    }

                    .fade-in-up {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }

                    .fade-in-up.visible {
                        opacity: 1;
                        transform: none;
                    }
                "#}
            </style>
        </div>
    }
}

