use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::behaviors::counter::{parse_target, CountUp, Step};
use crate::dom::observer::OneShotObserver;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u64,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub speed: u32,
    pub step_ms: u32,
    pub threshold: f64,
}

/// A statistic that counts up from zero the first time it scrolls into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let value = use_state(|| 0u64);
    let value_ref = use_node_ref();

    {
        let value = value.clone();
        let value_ref = value_ref.clone();
        let (speed, step_ms, threshold) = (props.speed, props.step_ms, props.threshold);
        use_effect_with_deps(
            move |_| {
                let observer = value_ref.cast::<Element>().and_then(|element| {
                    let observer = OneShotObserver::new(threshold, "0px", move |target: Element| {
                        let raw = target.get_attribute("data-target");
                        let Some(goal) = parse_target(raw.as_deref()) else {
                            debug!("Counter without a usable data-target, skipping");
                            return;
                        };
                        let count = CountUp::new(goal, speed);
                        let value = value.clone();
                        spawn_local(async move {
                            let mut current = 0;
                            loop {
                                match count.next(current) {
                                    Step::Continue(next) => {
                                        current = next;
                                        value.set(next);
                                        TimeoutFuture::new(step_ms).await;
                                    }
                                    Step::Done(last) => {
                                        value.set(last);
                                        break;
                                    }
                                }
                            }
                        });
                    })?;
                    observer.observe(&element);
                    Some(observer)
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div class="stat fade-in-up">
            <span class="stat-number">
                <span class="counter-value" ref={value_ref} data-target={props.target.to_string()}>
                    {*value}
                </span>
                {props.suffix.clone()}
            </span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}
