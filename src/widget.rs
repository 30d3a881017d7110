use crate::core::config::GaugeConfig;
use crate::core::markup::{self, CHART_CLASS, CONTAINER_CLASS, TEXT_SELECTOR};
use crate::core::{ChartAttributes, ClipState, GaugeValues};
use crate::dom;
use crate::frame::{self, TransitionContext};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use wasm_bindgen::JsCast;
use web_sys as web;

// Distinguishes clip-path ids when several gauges share a document.
static MOUNTS: AtomicU32 = AtomicU32::new(0);

/// One mounted gauge. Exists only between `create` and `destroy`.
pub struct GaugeWidget {
    document: web::Document,
    container: web::HtmlElement,
    chart_element: web::HtmlElement,
    text_element: web::HtmlElement,
    clip: Rc<RefCell<ClipState>>,
    clip_id: String,
}

impl GaugeWidget {
    pub fn create(element: &web::HtmlElement, config: &GaugeConfig) -> anyhow::Result<Self> {
        let document = element
            .owner_document()
            .or_else(dom::window_document)
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let container = dom::append_div(&document, element, Some(CONTAINER_CLASS))?;
        container.set_inner_html(&markup::container_html(config.font_size));
        let chart_element = dom::select_html(&container, &format!(".{}", CHART_CLASS))?;
        let text_element = dom::select_html(&container, TEXT_SELECTOR)?;

        let mount = MOUNTS.fetch_add(1, Ordering::Relaxed) + 1;
        let widget = Self {
            document,
            container,
            chart_element,
            text_element,
            clip: Rc::new(RefCell::new(ClipState::default())),
            clip_id: markup::clip_id(mount),
        };
        widget.apply_automation_id(config);
        log::info!("[widget] mounted gauge #{}", mount);
        Ok(widget)
    }

    /// Rewrite the label, rebuild the SVG and start the clip transition
    /// towards `values.percentage`.
    pub fn update(&mut self, values: &GaugeValues, config: &GaugeConfig) -> anyhow::Result<()> {
        self.apply_automation_id(config);
        self.text_element
            .set_class_name(markup::text_class(config.font_size));
        self.text_element
            .set_inner_html(&markup::label_html(values, config));

        let attrs = ChartAttributes::new(self.chart_element.offset_width() as f64, config);
        let target = attrs.angle_for(values.percentage);
        let (datum, generation, transition) = {
            let mut clip = self.clip.borrow_mut();
            let datum = clip.anchor(attrs.angles.start, attrs.angle_for(0.0));
            let (generation, transition) = clip.begin(target, attrs.duration);
            (datum, generation, transition)
        };
        log::debug!(
            "[widget] {:.1}% -> end angle {:.4} (from {:.4}, {:?})",
            values.percentage,
            target,
            datum.end_angle,
            attrs.duration
        );

        let clip_path = render::draw_chart(
            &self.document,
            &self.chart_element,
            &attrs,
            &self.clip_id,
            &datum,
        )?;
        frame::run_transition(TransitionContext {
            clip_path,
            arc: attrs.gauge_arc(),
            clip: self.clip.clone(),
            generation,
            transition,
            started: Instant::now(),
        });
        Ok(())
    }

    /// Stop any running transition and detach the widget's markup, styles
    /// included.
    pub fn destroy(self) {
        self.clip.borrow_mut().reset();
        self.container.remove();
        log::info!("[widget] destroyed {}", self.clip_id);
    }

    fn apply_automation_id(&self, config: &GaugeConfig) {
        let result = match &config.automation_id {
            Some(id) => self.container.set_attribute("automationId", id),
            None => self.container.remove_attribute("automationId"),
        };
        if let Err(e) = result {
            log::warn!("[widget] automationId: {:?}", e);
        }
    }
}

/// Convert the host's mount node, which arrives untyped.
pub fn as_html_element(value: wasm_bindgen::JsValue) -> anyhow::Result<web::HtmlElement> {
    value
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("mount node is not an HtmlElement: {:?}", e))
}
