//! Collapsible slider panel bound to the simulation's parameters.

use crate::constants::{
    COLLAPSED_CLASS, PANEL_CONTAINER_CLASS, PANEL_ID, PANEL_ROW_CLASS, PANEL_TITLE,
    PANEL_TOGGLE_ID,
};
use crate::dom;
use comet_core::{toggle_label, ControlDef, Simulation, Viewport, PANEL_CONTROLS};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub struct PanelWiring {
    pub container: web::Element,
    pub sim: Rc<RefCell<Simulation>>,
    pub viewport: Rc<Cell<Viewport>>,
}

pub fn mount(document: &web::Document, wiring: PanelWiring) -> anyhow::Result<()> {
    let PanelWiring {
        container,
        sim,
        viewport,
    } = wiring;
    container
        .class_list()
        .add_1(PANEL_CONTAINER_CLASS)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let toggle: web::HtmlElement = dom::create(document, "button")?;
    toggle.set_id(PANEL_TOGGLE_ID);
    dom::set_attr(&toggle, "type", "button")?;
    dom::set_attr(&toggle, "aria-expanded", "true")?;
    toggle.set_text_content(Some(toggle_label(false)));
    dom::append(&container, &toggle)?;

    let panel: web::HtmlElement = dom::create(document, "div")?;
    panel.set_id(PANEL_ID);
    let title: web::HtmlElement = dom::create(document, "h2")?;
    title.set_text_content(Some(PANEL_TITLE));
    dom::append(&panel, &title)?;

    for def in PANEL_CONTROLS {
        let row = build_row(document, def, &sim, &viewport)?;
        dom::append(&panel, &row)?;
    }
    dom::append(&container, &panel)?;

    let container_toggle = container.clone();
    let toggle_btn = toggle.clone();
    dom::add_listener(&toggle, "click", move |_| {
        let collapsed = container_toggle
            .class_list()
            .toggle(COLLAPSED_CLASS)
            .unwrap_or(false);
        _ = toggle_btn.set_attribute("aria-expanded", if collapsed { "false" } else { "true" });
        toggle_btn.set_text_content(Some(toggle_label(collapsed)));
        log::debug!("[panel] collapsed={}", collapsed);
    })?;

    log::info!("[panel] mounted {} controls", PANEL_CONTROLS.len());
    Ok(())
}

fn build_row(
    document: &web::Document,
    def: ControlDef,
    sim: &Rc<RefCell<Simulation>>,
    viewport: &Rc<Cell<Viewport>>,
) -> anyhow::Result<web::HtmlElement> {
    let bounds = def.bounds();
    let current = sim.borrow().params.get(def.key);

    let row: web::HtmlElement = dom::create(document, "label")?;
    row.set_class_name(PANEL_ROW_CLASS);

    let label: web::HtmlElement = dom::create(document, "span")?;
    label.set_text_content(Some(def.label));

    let input: web::HtmlInputElement = dom::create(document, "input")?;
    input.set_type("range");
    input.set_min(&bounds.min.to_string());
    input.set_max(&bounds.max.to_string());
    input.set_step(&bounds.step.to_string());
    input.set_value(&current.to_string());

    let readout: web::HtmlElement = dom::create(document, "em")?;
    readout.set_text_content(Some(&def.format_value(current)));

    let sim_input = sim.clone();
    let viewport_input = viewport.clone();
    let input_read = input.clone();
    let readout_input = readout.clone();
    dom::add_listener(&input, "input", move |_| {
        let raw = input_read.value();
        let value = match raw.parse::<f32>() {
            Ok(v) => v,
            Err(_) => {
                log::warn!("[panel] ignoring non-numeric {} input {:?}", def.key, raw);
                return;
            }
        };
        let width = viewport_input.get().width;
        let stored = sim_input.borrow_mut().apply_edit(def.key, value, width);
        readout_input.set_text_content(Some(&def.format_value(stored)));
    })?;

    dom::append(&row, &label)?;
    dom::append(&row, &input)?;
    dom::append(&row, &readout)?;
    Ok(row)
}
