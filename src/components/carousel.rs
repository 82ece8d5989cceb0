//! Home Carousel
//!
//! Native slider over the server-rendered `.slider > .slide` blocks: a fixed
//! number of slides on screen, dot navigation and autoplay.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::CarouselConfig;
use crate::console;
use crate::dom;

const TAG: &str = "CAROUSEL";

const SLIDER_SELECTOR: &str = ".slider";
const SLIDE_SELECTOR: &str = ".slide";
const DOTS_CLASS: &str = "slider-dots";
const ACTIVE_CLASS: &str = "active";

/// Which slides are on screen; wraps around like an infinite slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    slide_count: usize,
    to_show: usize,
    to_scroll: usize,
    stop: usize,
}

impl Carousel {
    pub fn new(slide_count: usize, to_show: usize, to_scroll: usize) -> Self {
        Self {
            slide_count,
            to_show: to_show.max(1),
            to_scroll: to_scroll.max(1),
            stop: 0,
        }
    }

    /// Number of scroll positions, one dot each
    pub fn stop_count(&self) -> usize {
        if self.slide_count <= self.to_show {
            1
        } else {
            self.slide_count.div_ceil(self.to_scroll)
        }
    }

    pub fn current_stop(&self) -> usize {
        self.stop
    }

    /// Nothing to scroll when every slide fits
    pub fn is_scrollable(&self) -> bool {
        self.stop_count() > 1
    }

    pub fn go_to(&mut self, stop: usize) {
        self.stop = stop % self.stop_count();
    }

    pub fn next(&mut self) {
        self.go_to(self.stop + 1);
    }

    /// Slide indices on screen for the current stop, in display order
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.slide_count == 0 {
            return Vec::new();
        }
        let start = (self.stop * self.to_scroll) % self.slide_count;
        (0..self.to_show.min(self.slide_count))
            .map(|offset| (start + offset) % self.slide_count)
            .collect()
    }
}

struct SliderView {
    slides: Vec<HtmlElement>,
    dots: Vec<Element>,
    model: Carousel,
    paused: bool,
}

impl SliderView {
    fn render(&self) {
        let visible = self.model.visible_indices();
        for (index, slide) in self.slides.iter().enumerate() {
            dom::set_visible(slide, visible.contains(&index));
            let order = visible.iter().position(|&i| i == index).unwrap_or(0);
            if let Err(err) = slide.style().set_property("order", &order.to_string()) {
                console::error(TAG, &format!("Failed to order slide {}: {:?}", index, err));
            }
        }
        for (stop, dot) in self.dots.iter().enumerate() {
            let active = stop == self.model.current_stop();
            if let Err(err) = dot.class_list().toggle_with_force(ACTIVE_CLASS, active) {
                console::error(TAG, &format!("Failed to mark dot {}: {:?}", stop, err));
            }
        }
    }
}

/// `ul.slider-dots > li > button`, one per stop
fn build_dots(slider: &Element, view: &Rc<RefCell<SliderView>>) -> Option<Vec<Element>> {
    let doc = dom::document()?;
    let list = doc.create_element("ul").ok()?;
    list.set_class_name(DOTS_CLASS);

    let stops = view.borrow().model.stop_count();
    let mut dots = Vec::new();
    for stop in 0..stops {
        let item = doc.create_element("li").ok()?;
        let button = doc.create_element("button").ok()?;
        if let Err(err) = button.set_attribute("type", "button") {
            console::error(TAG, &format!("Failed to build dot {}: {:?}", stop, err));
        }
        button.set_text_content(Some(&(stop + 1).to_string()));

        let view = view.clone();
        dom::on(&button, "click", move |_| {
            let mut slider = view.borrow_mut();
            slider.model.go_to(stop);
            slider.render();
        });

        item.append_child(&button).ok()?;
        list.append_child(&item).ok()?;
        dots.push(button);
    }
    slider.append_child(&list).ok()?;
    Some(dots)
}

fn mount_slider(slider: &Element, config: &CarouselConfig) {
    let slides = dom::query_all_in::<HtmlElement>(slider, SLIDE_SELECTOR);
    let model = Carousel::new(slides.len(), config.slides_to_show, config.slides_to_scroll);
    let view = Rc::new(RefCell::new(SliderView {
        slides,
        dots: Vec::new(),
        model,
        paused: false,
    }));

    if config.dots && model.is_scrollable() {
        match build_dots(slider, &view) {
            Some(dots) => view.borrow_mut().dots = dots,
            None => console::warn(TAG, "Failed to build slider dots"),
        }
    }
    view.borrow().render();

    if !model.is_scrollable() || config.autoplay_ms == 0 {
        return;
    }

    // Pause while hovered
    {
        let view = view.clone();
        dom::on(slider, "mouseenter", move |_| view.borrow_mut().paused = true);
    }
    {
        let view = view.clone();
        dom::on(slider, "mouseleave", move |_| view.borrow_mut().paused = false);
    }

    Interval::new(config.autoplay_ms, move || {
        let mut slider = view.borrow_mut();
        if slider.paused {
            return;
        }
        slider.model.next();
        slider.render();
    })
    .forget();
}

/// Start every `.slider` on the page; returns how many were found
pub fn mount(config: &CarouselConfig) -> usize {
    let sliders = dom::query_all::<Element>(SLIDER_SELECTOR);
    for slider in &sliders {
        if let Some(el) = slider.dyn_ref::<HtmlElement>() {
            if let Err(err) = el.style().set_property("display", "flex") {
                console::error(TAG, &format!("Failed to show slider: {:?}", err));
            }
        }
        mount_slider(slider, config);
    }
    sliders.len()
}
