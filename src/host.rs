//! Glue between the Looker visualization registry and [`GaugeWidget`].

use crate::core::constants::{VIS_ID, VIS_LABEL};
use crate::core::options::gauge_options_json;
use crate::core::{GaugeConfig, GaugeError, GaugeValues, QueryFields, Row};
use crate::dom::js_err;
use crate::widget::{self, GaugeWidget};
use anyhow::Context;
use js_sys::{Array, Function, Object, Reflect, JSON};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// The object handed to `looker.plugins.visualizations.add`. The host installs
/// `addError`/`clearErrors` on it after registration, so they are looked up on
/// every call.
pub struct Visualization {
    object: Object,
}

impl Visualization {
    fn new() -> anyhow::Result<Self> {
        let object = Object::new();
        set(&object, "id", &VIS_ID.into())?;
        set(&object, "label", &VIS_LABEL.into())?;
        let options = gauge_options_json().context("serializing options")?;
        set(&object, "options", &JSON::parse(&options).map_err(js_err)?)?;
        Ok(Self { object })
    }

    pub fn clear_errors(&self) {
        if let Err(e) = self.call("clearErrors", &Array::new()) {
            log::error!("clearErrors failed: {:?}", e);
        }
    }

    pub fn add_error(&self, error: &GaugeError) {
        log::warn!("[host] update refused: {}", error);
        let payload = Object::new();
        let filled = set(&payload, "title", &error.title().into())
            .and_then(|_| set(&payload, "message", &error.message().into()));
        if let Err(e) = filled.and_then(|_| self.call("addError", &Array::of1(&payload))) {
            log::error!("addError failed: {:?}", e);
        }
    }

    fn call(&self, method: &str, args: &Array) -> anyhow::Result<()> {
        let f = Reflect::get(&self.object, &method.into()).map_err(js_err)?;
        match f.dyn_ref::<Function>() {
            Some(f) => f.apply(&self.object, args).map(|_| ()).map_err(js_err),
            None => {
                log::debug!("[host] no {} on visualization", method);
                Ok(())
            }
        }
    }
}

type WidgetSlot = Rc<RefCell<Option<GaugeWidget>>>;

/// Build the visualization object and add it to the host registry.
pub fn register() -> anyhow::Result<()> {
    let vis = Rc::new(Visualization::new()?);
    let slot: WidgetSlot = Rc::new(RefCell::new(None));

    let create = {
        let slot = slot.clone();
        Closure::wrap(Box::new(move |element: JsValue, config: JsValue| {
            if let Err(e) = handle_create(&slot, element, &config) {
                log::error!("create error: {:?}", e);
            }
        }) as Box<dyn FnMut(JsValue, JsValue)>)
    };

    let update = {
        let slot = slot.clone();
        let vis = vis.clone();
        Closure::wrap(Box::new(
            move |data: JsValue, _element: JsValue, config: JsValue, query: JsValue, _details: JsValue| {
                if let Err(e) = handle_update(&slot, &vis, &data, &config, &query) {
                    log::error!("update error: {:?}", e);
                }
            },
        ) as Box<dyn FnMut(JsValue, JsValue, JsValue, JsValue, JsValue)>)
    };

    let update_async = {
        let slot = slot.clone();
        let vis = vis.clone();
        Closure::wrap(Box::new(
            move |data: JsValue,
                  _element: JsValue,
                  config: JsValue,
                  query: JsValue,
                  _details: JsValue,
                  done: JsValue| {
                if let Err(e) = handle_update(&slot, &vis, &data, &config, &query) {
                    log::error!("update error: {:?}", e);
                }
                // The host waits for this even when the update was refused.
                if let Some(done) = done.dyn_ref::<Function>() {
                    if let Err(e) = done.call0(&JsValue::NULL) {
                        log::error!("updateComplete failed: {:?}", e);
                    }
                }
            },
        )
            as Box<dyn FnMut(JsValue, JsValue, JsValue, JsValue, JsValue, JsValue)>)
    };

    let destroy = {
        let slot = slot.clone();
        Closure::wrap(Box::new(move || {
            if let Some(widget) = slot.borrow_mut().take() {
                widget.destroy();
            }
        }) as Box<dyn FnMut()>)
    };

    set(&vis.object, "create", create.as_ref())?;
    set(&vis.object, "update", update.as_ref())?;
    set(&vis.object, "updateAsync", update_async.as_ref())?;
    set(&vis.object, "destroy", destroy.as_ref())?;
    // The host keeps calling these for the life of the page.
    create.forget();
    update.forget();
    update_async.forget();
    destroy.forget();

    let (registry, add) = registry()?;
    add.call1(&registry, &vis.object).map_err(js_err)?;
    log::info!("[host] registered visualization {}", VIS_ID);
    Ok(())
}

fn handle_create(slot: &WidgetSlot, element: JsValue, config: &JsValue) -> anyhow::Result<()> {
    let element = widget::as_html_element(element)?;
    let config = read_config(config);
    let widget = GaugeWidget::create(&element, &config)?;
    if let Some(previous) = slot.borrow_mut().replace(widget) {
        log::warn!("[host] create called twice; replacing previous gauge");
        previous.destroy();
    }
    Ok(())
}

fn handle_update(
    slot: &WidgetSlot,
    vis: &Visualization,
    data: &JsValue,
    config: &JsValue,
    query: &JsValue,
) -> anyhow::Result<()> {
    let config = read_config(config);
    vis.clear_errors();

    let rows: Vec<Row> = from_js(data).context("reading rows")?;
    let fields_js = Reflect::get(query, &"fields".into()).map_err(js_err)?;
    let fields: QueryFields = from_js(&fields_js).context("reading query fields")?;
    let values = match GaugeValues::from_query(&rows, &fields) {
        Ok(values) => values,
        Err(e) => {
            vis.add_error(&e);
            return Ok(());
        }
    };

    let mut slot = slot.borrow_mut();
    let Some(widget) = slot.as_mut() else {
        log::warn!("[host] update before create; ignoring");
        return Ok(());
    };
    widget.update(&values, &config)
}

fn read_config(config: &JsValue) -> GaugeConfig {
    let parsed = to_json(config).and_then(|json| {
        GaugeConfig::from_json(&json).context("parsing config")
    });
    parsed.unwrap_or_else(|e| {
        log::warn!("[host] unreadable config ({:?}); using defaults", e);
        GaugeConfig::default()
    })
}

fn from_js<T: DeserializeOwned + Default>(value: &JsValue) -> anyhow::Result<T> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    let json = to_json(value)?;
    Ok(serde_json::from_str(&json)?)
}

fn to_json(value: &JsValue) -> anyhow::Result<String> {
    if value.is_undefined() {
        return Ok("null".to_string());
    }
    JSON::stringify(value)
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("value has no JSON form"))
}

fn registry() -> anyhow::Result<(JsValue, Function)> {
    let looker = Reflect::get(&js_sys::global(), &"looker".into()).map_err(js_err)?;
    if looker.is_undefined() {
        anyhow::bail!("no `looker` global; not running inside the host");
    }
    let plugins = Reflect::get(&looker, &"plugins".into()).map_err(js_err)?;
    let registry = Reflect::get(&plugins, &"visualizations".into()).map_err(js_err)?;
    let add = Reflect::get(&registry, &"add".into())
        .map_err(js_err)?
        .dyn_into::<Function>()
        .map_err(|_| anyhow::anyhow!("looker.plugins.visualizations.add is not a function"))?;
    Ok((registry, add))
}

fn set(target: &Object, key: &str, value: &JsValue) -> anyhow::Result<()> {
    Reflect::set(target, &key.into(), value).map_err(js_err)?;
    Ok(())
}
