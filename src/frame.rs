use crate::constants::{
    CAMERA_EYE, CAMERA_FAR, CAMERA_FOVY_DEG, CAMERA_NEAR, CAMERA_TARGET, MAX_FRAME_DT_SEC,
};
use crate::core::{Animator, Camera, OrbitControls, SceneContext};
use crate::render;
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneContext>>,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub animator: Animator,
    pub camera: Camera,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
        scene: Rc<RefCell<SceneContext>>,
        controls: Rc<RefCell<OrbitControls>>,
    ) -> Self {
        let camera = initial_camera(canvas.width(), canvas.height());
        Self {
            scene,
            controls,
            animator: Animator::empty(),
            camera,
            canvas,
            gpu,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);

        self.animator.tick(dt_sec, &mut self.scene.borrow_mut());

        self.camera.eye = self.controls.borrow_mut().update();
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.set_aspect(w, h);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            let scene = self.scene.borrow();
            if let Err(e) = g.render(&self.camera, &scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub fn initial_camera(width: u32, height: u32) -> Camera {
    let mut camera = Camera {
        eye: Vec3::from_array(CAMERA_EYE),
        target: Vec3::from_array(CAMERA_TARGET),
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: CAMERA_FOVY_DEG.to_radians(),
        znear: CAMERA_NEAR,
        zfar: CAMERA_FAR,
    };
    camera.set_aspect(width, height);
    camera
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
