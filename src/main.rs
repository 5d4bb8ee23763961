//! Echo Orbit entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, PointerEvent};

    use echo_orbit::audio::{AudioRack, Cue};
    use echo_orbit::config::{Config, VariantPreset};
    use echo_orbit::renderer::{RenderState, build_scene};
    use echo_orbit::sim::{SceneEvent, SceneState, tick};
    use echo_orbit::ui::{UiAction, UiState};

    const TOOLTIP_TEXT: &str = "Hold the pointer down to speed up the \
        sonar pulses. Rings that cross the orbit flare the scene and \
        scatter debris. The speaker button mutes all sound.";

    /// App instance holding all state
    struct App {
        state: SceneState,
        ui: UiState,
        config: Config,
        audio: AudioRack,
        render_state: Option<RenderState>,
    }

    impl App {
        fn new(seed: u64, width: f32, height: f32, config: Config) -> Self {
            Self {
                state: SceneState::new(seed, width, height, &config),
                ui: UiState::default(),
                config,
                audio: AudioRack::new(),
                render_state: None,
            }
        }

        /// One simulation step plus the audio cues it raised
        fn update(&mut self) {
            let input = self.ui.tick_input();
            for event in tick(&mut self.state, &input, &self.config) {
                match event {
                    SceneEvent::Heartbeat => self.audio.play(Cue::Heartbeat),
                    // Hits are visual-only; the flash and debris carry them
                    SceneEvent::RippleHit | SceneEvent::BubbleStruck => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.state, &self.ui, &self.config.tuning);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.logical_size;
                        render_state.resize(render_state.config.width, render_state.config.height, w, h);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Position the DOM tooltip next to the pointer while the info
        /// button is hovered
        fn update_tooltip(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(el) = document.get_element_by_id("tooltip") else {
                return;
            };

            let width = self.state.viewport.width;
            match self.ui.tooltip_rect(width) {
                Some(rect) => {
                    let style = format!(
                        "position:fixed;left:{}px;top:{}px;width:{}px;height:{}px;\
                         box-sizing:border-box;padding:10px;border-radius:5px;\
                         background:rgba(0,0,0,0.86);border:1px solid rgba(255,255,255,0.4);\
                         color:#c8c8c8;font:11px/18px Arial,sans-serif;pointer-events:none;",
                        rect.x, rect.y, rect.w, rect.h
                    );
                    let _ = el.set_attribute("style", &style);
                }
                None => {
                    let _ = el.set_attribute("style", "display:none;");
                }
            }
        }
    }

    /// Create the hidden tooltip element the frame loop positions
    fn create_tooltip(document: &web_sys::Document) {
        if document.get_element_by_id("tooltip").is_some() {
            return;
        }
        if let Ok(el) = document.create_element("div") {
            el.set_id("tooltip");
            el.set_text_content(Some(TOOLTIP_TEXT));
            let _ = el.set_attribute("style", "display:none;");
            if let Some(body) = document.body() {
                let _ = body.append_child(&el);
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Echo Orbit starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the backing store to the CSS size times the pixel ratio
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width() as f32;
        let client_h = canvas.client_height() as f32;
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        create_tooltip(&document);

        // A preset override in the URL sticks for future sessions
        let mut config = Config::load();
        if let Ok(search) = window.location().search() {
            if let Some(preset) = VariantPreset::from_query(&search) {
                config = Config::for_preset(preset);
                config.save();
                log::info!("Preset override from URL: {}", preset.as_str());
            }
        }

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed, client_w, client_h, config)));

        log::info!("Scene initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, width, height, client_w, client_h).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, app.clone());
        setup_resize_handler(canvas.clone(), app.clone());

        // Start frame loop
        request_animation_frame(app);

        log::info!("Echo Orbit running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Pointer move - hover state and tooltip tracking
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                app.borrow_mut().ui.pointer_moved(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer down - buttons, audio start, spawn-rate boost
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                let mut a = app.borrow_mut();
                match a.ui.pointer_down(pos) {
                    UiAction::ToggleMute => {
                        let muted = a.ui.muted;
                        a.audio.set_muted(muted);
                        a.audio.play(Cue::ButtonClick);
                        log::info!("Muted: {}", muted);
                    }
                    UiAction::Info => {}
                    UiAction::Canvas => {
                        a.audio.ensure_started();
                        a.audio.play(Cue::Interaction);
                    }
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer up anywhere ends the press
        {
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                app.borrow_mut().ui.pointer_up();
            });
            let _ = window
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(win) = web_sys::window() else { return };
            let dpr = win.device_pixel_ratio();
            let client_w = canvas.client_width() as f32;
            let client_h = canvas.client_height() as f32;
            let width = (client_w as f64 * dpr) as u32;
            let height = (client_h as f64 * dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            let mut a = app.borrow_mut();
            let config = a.config.clone();
            a.state.resize(client_w, client_h, &config);
            if let Some(ref mut rs) = a.render_state {
                rs.resize(width, height, client_w, client_h);
            }
            log::info!("Resized to {}x{}", client_w, client_h);
        });
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            a.update();
            a.render();
            a.update_tooltip();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use echo_orbit::config::Config;
    use echo_orbit::sim::{SceneState, tick};

    env_logger::init();
    log::info!("Echo Orbit (native) starting...");
    log::info!("Rendering requires a browser - run with `trunk serve` for the web version");

    // Headless smoke run: a few seconds of simulation
    let config = Config::default();
    let mut state = SceneState::new(42, 1280.0, 720.0, &config);
    let input = Default::default();
    for _ in 0..300 {
        tick(&mut state, &input, &config);
    }
    log::info!(
        "After 300 frames: {} ripples, {} debris, flash {:.1}",
        state.ripples.len(),
        state.debris.len(),
        state.flash_intensity
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
