use crate::constants::PANEL_ID;
use crate::core::{GroupKind, SceneContext};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Groups exposed as visibility toggles, in display order.
pub const PANEL_TOGGLES: [GroupKind; 2] = [GroupKind::Toruses, GroupKind::Boxes];

const PANEL_STYLE: &str = "position:fixed;top:12px;right:12px;padding:8px 12px;\
     color:#cfe7ff;font:13px system-ui;background:rgba(10,14,24,0.8);\
     border:1px solid rgba(80,110,150,0.35);border-radius:6px;";

/// Fill `#debug-panel` with one checkbox per toggled group.
pub fn build(document: &web::Document, scene: &Rc<RefCell<SceneContext>>) -> anyhow::Result<()> {
    let panel = match document.get_element_by_id(PANEL_ID) {
        Some(el) => el,
        None => {
            let el = create(document, "div")?;
            el.set_id(PANEL_ID);
            document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no body"))?
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el
        }
    };
    _ = panel.set_attribute("style", PANEL_STYLE);
    panel.set_inner_html("");

    for kind in PANEL_TOGGLES {
        let row: web::HtmlLabelElement = create(document, "label")?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = row.set_attribute("style", "display:block;cursor:pointer;");
        let input: web::HtmlInputElement = create(document, "input")?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        input.set_type("checkbox");
        input.set_id(&format!("toggle-{}", kind.label()));
        input.set_checked(scene.borrow().is_visible(kind));

        let scene_toggle = scene.clone();
        dom::add_checkbox_listener(&input, move |checked| {
            scene_toggle.borrow_mut().set_visible(kind, checked);
            log::info!("[panel] {} visible={}", kind.label(), checked);
        });

        row.append_child(&input)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        row.append_child(&document.create_text_node(&format!(" {}", kind.label())))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        panel
            .append_child(&row)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    log::info!("[panel] ready");
    Ok(())
}

fn create(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {:?}", e))
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", PANEL_STYLE);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for pages without the .hidden rule
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}
