//! `ScrollStack` / `ScrollStackItem` components.
//!
//! The server renders plain markup; on hydration a driver collects the card
//! elements, measures their untransformed offsets, starts the smooth-scroll
//! loop and writes the engine's transforms back to the elements. Everything
//! the driver installs (listeners, the raf loop) is torn down on unmount.

use leptos::{html, prelude::*};

use crate::scroll_stack::StackConfig;

#[component]
pub fn ScrollStackItem(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() {
        "scroll-stack-card".to_string()
    } else {
        format!("scroll-stack-card {class}")
    };
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn ScrollStack(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] config: Option<StackConfig>,
    #[prop(optional)] on_stack_complete: Option<Callback<()>>,
) -> impl IntoView {
    let scroller_ref = NodeRef::<html::Div>::new();
    let config = config.unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let active: Rc<RefCell<Option<Rc<driver::StackDriver>>>> = Rc::new(RefCell::new(None));
        let attach_slot = Rc::clone(&active);
        let config = config.clone();
        Effect::new(move |_| {
            if let Some(el) = scroller_ref.get() {
                let driver =
                    driver::StackDriver::attach(el.into(), config.clone(), on_stack_complete);
                *attach_slot.borrow_mut() = Some(driver);
            }
        });
        on_cleanup(move || {
            if let Some(driver) = active.borrow_mut().take() {
                driver.dispose();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (config, on_stack_complete);

    view! {
        <div node_ref=scroller_ref class=format!("scroll-stack-scroller {class}")>
            <div class="scroll-stack-inner">
                {children()}
                // Spacer so the last pin can release cleanly.
                <div class="scroll-stack-end"></div>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod driver {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use gloo::events::{EventListener, EventListenerOptions};
    use gloo::render::{request_animation_frame, AnimationFrame};
    use leptos::prelude::Callback;
    use leptos::prelude::Callable;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, WheelEvent};

    use crate::scroll_stack::{
        CardTransform, ScrollStackEngine, ScrollSource, StackConfig, Viewport,
    };
    use crate::smooth_scroll::{SmoothScrollConfig, VirtualScroll};

    fn window() -> web_sys::Window {
        web_sys::window().expect("window should be available")
    }

    pub struct StackDriver {
        engine: RefCell<ScrollStackEngine>,
        scroll: RefCell<VirtualScroll>,
        cards: RefCell<Vec<HtmlElement>>,
        scroller: HtmlElement,
        on_complete: Option<Callback<()>>,
        raf: RefCell<Option<AnimationFrame>>,
        listeners: RefCell<Vec<EventListener>>,
        last_frame_ms: Cell<Option<f64>>,
        section_bottom: Cell<f64>,
        end_offset: Cell<f64>,
        // Suppresses the scroll-event sync while we write positions ourselves.
        programmatic_scroll: Cell<bool>,
        active: Cell<bool>,
    }

    impl StackDriver {
        pub fn attach(
            scroller: HtmlElement,
            config: StackConfig,
            on_complete: Option<Callback<()>>,
        ) -> Rc<Self> {
            let driver = Rc::new(Self {
                engine: RefCell::new(ScrollStackEngine::new(config)),
                scroll: RefCell::new(VirtualScroll::new(SmoothScrollConfig::default())),
                cards: RefCell::new(Vec::new()),
                scroller,
                on_complete,
                raf: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
                last_frame_ms: Cell::new(None),
                section_bottom: Cell::new(f64::INFINITY),
                end_offset: Cell::new(f64::INFINITY),
                programmatic_scroll: Cell::new(false),
                active: Cell::new(true),
            });
            driver.collect_cards();
            driver.measure_bounds();
            driver
                .scroll
                .borrow_mut()
                .jump_to(driver.current_native_scroll());
            driver.install_listeners();
            driver.schedule();
            driver
        }

        /// Cancel the frame loop and drop every listener. Dropping the
        /// pending `AnimationFrame` also releases the Rc cycle its closure
        /// holds.
        pub fn dispose(&self) {
            self.active.set(false);
            self.raf.borrow_mut().take();
            self.listeners.borrow_mut().clear();
            self.cards.borrow_mut().clear();
        }

        fn use_window_scroll(&self) -> bool {
            self.engine.borrow().config().scroll_source == ScrollSource::Window
        }

        fn container_height(&self) -> f64 {
            if self.use_window_scroll() {
                window()
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0)
            } else {
                f64::from(self.scroller.client_height())
            }
        }

        fn current_native_scroll(&self) -> f64 {
            if self.use_window_scroll() {
                window().scroll_y().unwrap_or(0.0)
            } else {
                f64::from(self.scroller.scroll_top())
            }
        }

        fn window_scroll_y() -> f64 {
            window().scroll_y().unwrap_or(0.0)
        }

        /// Untransformed document offset of an element within the scroll
        /// source.
        fn element_offset(&self, el: &HtmlElement) -> f64 {
            if self.use_window_scroll() {
                el.get_bounding_client_rect().top() + Self::window_scroll_y()
            } else {
                f64::from(el.offset_top())
            }
        }

        /// Collect `.scroll-stack-card` children scoped to this scroller,
        /// apply base card styles and cache natural offsets.
        fn collect_cards(&self) {
            let mut cards = Vec::new();
            if let Ok(list) = self.scroller.query_selector_all(".scroll-stack-card") {
                for i in 0..list.length() {
                    if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                        cards.push(el);
                    }
                }
            }

            let gap = self.engine.borrow().config().card_gap_px;
            let count = cards.len();
            for (i, card) in cards.iter().enumerate() {
                let style = card.style();
                if i + 1 < count {
                    let _ = style.set_property("margin-bottom", &format!("{gap}px"));
                }
                let _ = style.set_property("will-change", "transform, filter");
                let _ = style.set_property("transform-origin", "top center");
                let _ = style.set_property("backface-visibility", "hidden");
            }

            let offsets: Vec<f64> = cards.iter().map(|c| self.element_offset(c)).collect();
            self.engine.borrow_mut().set_card_offsets(&offsets);
            *self.cards.borrow_mut() = cards;
        }

        /// Section bottom, end-marker offset and the scroll limit.
        fn measure_bounds(&self) {
            let section_bottom = if self.use_window_scroll() {
                let section = self
                    .cards
                    .borrow()
                    .first()
                    .and_then(|card| card.closest("section").ok().flatten());
                match section {
                    Some(section) => {
                        let rect = section.get_bounding_client_rect();
                        rect.top() + Self::window_scroll_y() + rect.height()
                    }
                    None => f64::INFINITY,
                }
            } else {
                f64::from(self.scroller.offset_top() + self.scroller.offset_height())
            };
            self.section_bottom.set(section_bottom);

            let end_offset = self
                .scroller
                .query_selector(".scroll-stack-end")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| self.element_offset(&el))
                .unwrap_or(f64::INFINITY);
            self.end_offset.set(end_offset);

            let limit = if self.use_window_scroll() {
                let doc_height = window()
                    .document()
                    .and_then(|d| d.document_element())
                    .map(|e| f64::from(e.scroll_height()))
                    .unwrap_or(0.0);
                doc_height - self.container_height()
            } else {
                f64::from(self.scroller.scroll_height()) - self.container_height()
            };
            self.scroll.borrow_mut().set_limit(limit.max(0.0));
        }

        /// Layout changed: drop applied transforms, re-measure offsets and
        /// bounds, reset slot state.
        fn remeasure(&self) {
            for card in self.cards.borrow().iter() {
                let style = card.style();
                let _ = style.remove_property("transform");
                let _ = style.remove_property("filter");
            }
            let offsets: Vec<f64> = self
                .cards
                .borrow()
                .iter()
                .map(|c| self.element_offset(c))
                .collect();
            self.engine.borrow_mut().set_card_offsets(&offsets);
            self.measure_bounds();
        }

        fn install_listeners(self: &Rc<Self>) {
            let mut listeners = Vec::new();
            let target: web_sys::EventTarget = if self.use_window_scroll() {
                window().into()
            } else {
                self.scroller.clone().into()
            };

            let driver = Rc::clone(self);
            listeners.push(EventListener::new_with_options(
                &target,
                "wheel",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                        wheel.prevent_default();
                        driver.scroll.borrow_mut().add_wheel(wheel.delta_y());
                    }
                },
            ));

            // Native scrolls (scrollbar drag, keyboard, touch) bypass the
            // wheel path; resync the virtual position to them.
            let driver = Rc::clone(self);
            listeners.push(EventListener::new(&target, "scroll", move |_| {
                if driver.programmatic_scroll.replace(false) {
                    return;
                }
                let position = driver.current_native_scroll();
                driver.scroll.borrow_mut().jump_to(position);
            }));

            let driver = Rc::clone(self);
            listeners.push(EventListener::new(&window(), "resize", move |_| {
                driver.remeasure();
            }));

            *self.listeners.borrow_mut() = listeners;
        }

        fn schedule(self: &Rc<Self>) {
            if !self.active.get() {
                return;
            }
            let driver = Rc::clone(self);
            let handle = request_animation_frame(move |timestamp| {
                driver.raf.borrow_mut().take();
                driver.step(timestamp);
                driver.schedule();
            });
            *self.raf.borrow_mut() = Some(handle);
        }

        fn step(&self, timestamp: f64) {
            let dt = match self.last_frame_ms.replace(Some(timestamp)) {
                Some(prev) => (timestamp - prev).clamp(0.0, 50.0),
                None => 1000.0 / 60.0,
            };

            let (position, settled) = {
                let mut scroll = self.scroll.borrow_mut();
                let position = scroll.advance(dt);
                (position, scroll.is_settled())
            };
            if !settled || (position - self.current_native_scroll()).abs() > 0.5 {
                self.apply_scroll(position);
            }

            let view = Viewport {
                scroll_top: position,
                container_height: self.container_height(),
                section_bottom: self.section_bottom.get(),
                end_offset: self.end_offset.get(),
            };
            let out = self.engine.borrow_mut().frame(view);

            if !out.writes.is_empty() {
                let cards = self.cards.borrow();
                for (index, transform) in out.writes {
                    if let Some(card) = cards.get(index) {
                        apply_transform(card, transform);
                    }
                }
            }
            if out.stack_completed {
                if let Some(on_complete) = &self.on_complete {
                    on_complete.run(());
                }
            }
        }

        fn apply_scroll(&self, position: f64) {
            self.programmatic_scroll.set(true);
            if self.use_window_scroll() {
                window().scroll_to_with_x_and_y(0.0, position);
            } else {
                self.scroller.set_scroll_top(position as i32);
            }
        }
    }

    fn apply_transform(card: &HtmlElement, transform: CardTransform) {
        let style = card.style();
        let value = format!(
            "translate3d(0, {}px, 0) scale({}) rotate({}deg)",
            transform.translate_y, transform.scale, transform.rotation_deg
        );
        let _ = style.set_property("transform", &value);
        if transform.blur_px > 0.0 {
            let _ = style.set_property("filter", &format!("blur({}px)", transform.blur_px));
        } else {
            let _ = style.remove_property("filter");
        }
    }
}
