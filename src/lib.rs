#![cfg(target_arch = "wasm32")]
use crate::core::{
    build_text_block, Animator, GroupKind, OrbitControls, Placement, PlacementRequest,
    SceneContext, TextStyle, TEXT_ANCHOR, TEXT_LINES, TEXT_LINE_SPACING,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod render;

use constants::{
    CAMERA_EYE, CAMERA_TARGET, CANVAS_ID, CONTROLS_MAX_DISTANCE, CONTROLS_MIN_DISTANCE, FONT_URL,
    NORMAL_MAP_URL,
};

type SharedFrame = Rc<RefCell<frame::FrameContext<'static>>>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Seed from `?seed=<u64>` when given, otherwise a fresh random one.
fn scene_seed() -> u64 {
    dom::query_param("seed")
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or_else(|| (js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Everything that waits on the typeface: text, scattered primitives,
/// looping rotations and the debug panel.
fn build_scene(
    document: &web::Document,
    font_bytes: &[u8],
    frame_ctx: &SharedFrame,
    scene: &Rc<RefCell<SceneContext>>,
) -> anyhow::Result<()> {
    let text = build_text_block(font_bytes, &TEXT_LINES, &TextStyle::default(), TEXT_LINE_SPACING)?;
    log::info!(
        "[scene] text block: {} vertices, {} triangles",
        text.vertex_count(),
        text.triangle_count()
    );

    let seed = scene_seed();
    let mut rng = StdRng::seed_from_u64(seed);
    let req = PlacementRequest::default();
    {
        let mut s = scene.borrow_mut();
        s.add_node(
            GroupKind::Text,
            Placement {
                position: TEXT_ANCHOR,
                ..Placement::IDENTITY
            },
        );
        let toruses = s.populate(GroupKind::Toruses, &mut rng, &req);
        let boxes = s.populate(GroupKind::Boxes, &mut rng, &req);
        log::info!(
            "[scene] seed={} toruses={}/{} boxes={}/{} nodes={}",
            seed,
            toruses,
            req.count,
            boxes,
            req.count,
            s.node_count()
        );
    }

    {
        let mut f = frame_ctx.borrow_mut();
        if let Some(g) = &mut f.gpu {
            g.set_text_mesh(&text);
        }
        f.animator = Animator::default();
    }

    panel::build(document, scene)?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-scene starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;

    // Groups exist from startup; they are filled once the typeface arrives
    let scene = Rc::new(RefCell::new(SceneContext::new()));
    let controls = Rc::new(RefCell::new(OrbitControls::new(
        Vec3::from_array(CAMERA_EYE),
        Vec3::from_array(CAMERA_TARGET),
        CONTROLS_MIN_DISTANCE,
        CONTROLS_MAX_DISTANCE,
    )));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        controls: controls.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });
    events::wire_panel_toggle_h(&document);

    let frame_ctx: SharedFrame = Rc::new(RefCell::new(frame::FrameContext::new(
        canvas.clone(),
        gpu,
        scene.clone(),
        controls,
    )));
    frame::start_loop(frame_ctx.clone());

    // Normal map: optional, the flat default stays bound on failure
    let frame_for_texture = frame_ctx.clone();
    spawn_local(async move {
        match assets::load_image_rgba(NORMAL_MAP_URL).await {
            Ok(img) => {
                if let Some(g) = &mut frame_for_texture.borrow_mut().gpu {
                    g.set_normal_map(img.width, img.height, &img.pixels);
                }
            }
            Err(e) => log::error!("[assets] normal map: {:?}", e),
        }
    });

    let font_bytes = assets::load_font(FONT_URL).await?;
    build_scene(&document, &font_bytes, &frame_ctx, &scene)?;

    Ok(())
}
