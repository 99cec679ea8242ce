use std::rc::Rc;

use log::{debug, info};
use web_sys::Element;
use yew::prelude::*;

use crate::behaviors::carousel::Carousel;
use crate::behaviors::timers::GlooTimers;
use crate::dom::listener::EventListener;
use crate::dom::slides::DomSlides;

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "خلّصوا شحنتنا من الميناء في يوم واحد، ومتابعة ممتازة حتى وصلت المستودع.",
        author: "خالد العتيبي",
        role: "مدير مشتريات، شركة مواد بناء",
    },
    Testimonial {
        quote: "أسعار واضحة بدون مفاجآت، وفريق يرد على الاتصال في أي وقت.",
        author: "سارة الحربي",
        role: "صاحبة متجر إلكتروني",
    },
    Testimonial {
        quote: "نتعامل معهم منذ خمس سنوات في التخليص والنقل البري، ولم نتأخر مرة واحدة.",
        author: "محمد القحطاني",
        role: "مدير عمليات، مصنع أغذية",
    },
    Testimonial {
        quote: "ساعدونا في استيفاء متطلبات الفسح لأول شحنة استيراد لنا خطوة بخطوة.",
        author: "نورة الدوسري",
        role: "شريكة مؤسسة، علامة تجارية ناشئة",
    },
];

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub interval_ms: u32,
    pub rtl: bool,
}

/// Auto-rotating slider plus the dots that jump to a slide.
struct Slider {
    _carousel: Rc<Carousel<DomSlides, GlooTimers>>,
    _dot_listeners: Vec<EventListener>,
}

impl Slider {
    fn attach(root: &Element, interval_ms: u32, rtl: bool) -> Option<Self> {
        let view = DomSlides::from_root(root, rtl)?;
        let slide_count = view.slide_count();
        let dots = view.dots().to_vec();

        let carousel = Rc::new(Carousel::initialize(view, GlooTimers, slide_count, interval_ms)?);

        let dot_listeners: Vec<EventListener> = dots
            .iter()
            .enumerate()
            .map(|(index, dot)| {
                let carousel = carousel.clone();
                EventListener::new(dot, "click", move |_| {
                    debug!("Testimonial dot {} selected", index);
                    carousel.go_to(index);
                })
            })
            .collect();

        info!("Testimonial slider running with {} slides", slide_count);
        Some(Self {
            _carousel: carousel,
            _dot_listeners: dot_listeners,
        })
    }
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let root_ref = use_node_ref();

    {
        let root_ref = root_ref.clone();
        let interval_ms = props.interval_ms;
        let rtl = props.rtl;
        use_effect_with_deps(
            move |_| {
                let slider = root_ref
                    .cast::<Element>()
                    .and_then(|root| Slider::attach(&root, interval_ms, rtl));
                if slider.is_none() {
                    debug!("No testimonial slides found, slider disabled");
                }
                move || drop(slider)
            },
            (interval_ms, rtl),
        );
    }

    html! {
        <section id="testimonials" class="testimonials" ref={root_ref}>
            <h2 class="section-title fade-in-up">{"ماذا يقول عملاؤنا"}</h2>
            <div class="testimonial-viewport">
                <div class="testimonial-track">
                    { TESTIMONIALS.iter().map(|t| html! {
                        <figure class="testimonial-slide">
                            <blockquote>{t.quote}</blockquote>
                            <figcaption>
                                <strong>{t.author}</strong>
                                <span>{t.role}</span>
                            </figcaption>
                        </figure>
                    }).collect::<Html>() }
                </div>
            </div>
            <div class="testimonial-dots">
                { (0..TESTIMONIALS.len()).map(|i| html! {
                    <button
                        class="dot"
                        type="button"
                        aria-label={format!("الشهادة {}", i + 1)}
                    ></button>
                }).collect::<Html>() }
            </div>
        </section>
    }
}
