use anyhow::Context;
use winit::event::WindowEvent;

use prism_engine::coords::Viewport;
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::Gpu;
use prism_engine::input::Key;
use prism_engine::render::shapes::rect::RectRenderer;
use prism_engine::render::shapes::text::TextRenderer;
use prism_engine::render::triangle::TriangleRenderer;
use prism_engine::scene::DrawList;
use prism_engine::text::{FontId, FontSystem};
use prism_ui::{Painter, PointerInput};

use crate::config::DemoConfig;
use crate::controls::ControlPanel;
use crate::driver::FrameDriver;
use crate::fonts::load_readout_font;

pub struct DemoApp {
    config: DemoConfig,
    driver: FrameDriver,
    controls: ControlPanel,

    fonts: FontSystem,
    font: Option<FontId>,

    triangle: Option<TriangleRenderer>,
    rects: RectRenderer,
    text: TextRenderer,
    draw_list: DrawList,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        let mut fonts = FontSystem::new();
        let font = load_readout_font(&mut fonts, config.font_path.as_deref());

        Self {
            driver: FrameDriver::new(config.rotation_speed, config.brightness),
            controls: ControlPanel::new(&config),
            config,
            fonts,
            font,
            triangle: None,
            rects: RectRenderer::new(),
            text: TextRenderer::new(),
            draw_list: DrawList::new(),
        }
    }
}

impl App for DemoApp {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> anyhow::Result<()> {
        let triangle =
            TriangleRenderer::new(gpu.device(), gpu.surface_format(), gpu.depth_format())
                .context("failed to build triangle renderer")?;
        self.triangle = Some(triangle);

        let size = gpu.size();
        self.driver.on_resize(size.width, size.height);
        Ok(())
    }

    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        if let WindowEvent::Resized(size) = event {
            self.driver.on_resize(size.width, size.height);
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_pressed(Key::Escape) {
            log::info!("escape pressed, exiting");
            return AppControl::Exit;
        }

        let Some(triangle) = self.triangle.as_ref() else {
            return AppControl::Continue;
        };

        // UI first so slider changes apply to this frame.
        let pointer = PointerInput::from_input(ctx.input, ctx.input_frame);
        let (w, h) = ctx.window.logical_size();
        self.draw_list.clear();
        {
            let mut painter = Painter::new(&mut self.draw_list, &self.fonts, self.font, pointer);
            self.controls
                .show(Viewport::new(w, h), &pointer, &mut painter);
        }

        self.driver.set_rotation_speed(self.controls.rotation_speed());
        self.driver.set_brightness(self.controls.brightness());
        let input = self.driver.tick(ctx.time.dt);

        let (rects, text, draw_list, fonts) =
            (&mut self.rects, &mut self.text, &mut self.draw_list, &self.fonts);

        ctx.render(self.config.clear_color, |rctx, target| {
            triangle.render(rctx, target, &input);
            rects.render(rctx, target, draw_list);
            text.render(rctx, target, draw_list, fonts);
        })
    }
}
