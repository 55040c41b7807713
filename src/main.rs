mod assets;
mod config;
mod draw;
mod gui;
mod input_system;
mod navigation;
mod palette;
mod screens;
mod surface;
mod text;

use assets::Artwork;
use assets::loader::load_artwork;
use config::UiConfig;
use input_system::{FrameInput, poll_events};
use navigation::{InputEvent, Navigator, Transition};
use sdl2::pixels::Color;
use std::time::Instant;
use surface::{CANVAS_HEIGHT, CANVAS_WIDTH, CanvasSurface, Recorder};

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / CANVAS_WIDTH as i32;
            let max_scale_h = usable_h / CANVAS_HEIGHT as i32;

            // Use smaller scale to ensure both dimensions fit
            let scale = max_scale_w.min(max_scale_h);

            // Clamp to reasonable range (2x minimum, 6x maximum)
            scale.clamp(2, 6) as u32
        }
        Err(_) => {
            // Fallback to 3x if monitor detection fails
            println!("Warning: Could not detect monitor size, using 3x scale");
            3
        }
    }
}

/// Render every screen headlessly with no art and print the draw-call counts
///
/// Walks the same input path a player would, so it doubles as a smoke test
/// of navigation and rendering without opening a window.
fn dump_screens(config: &UiConfig) -> Result<(), String> {
    use InputEvent::*;

    let artwork = Artwork::new();
    let mut nav = Navigator::new();
    // Title, Credits, Settings, CharacterSelect, NameEntry, NextPagePlaceholder
    let walk = [
        vec![],
        vec![Right, Confirm],
        vec![Confirm, Right, Confirm],
        vec![Confirm, Right, Confirm],
        vec![Right, Confirm, Char('A')],
        vec![Confirm],
    ];

    for step in walk {
        nav.handle_all(step);
        let mut recorder = Recorder::new();
        screens::render(&mut recorder, &nav, &artwork, &config.content)?;
        println!(
            "{:?}: {} draw calls",
            nav.screen(),
            recorder.commands().len()
        );
    }

    Ok(())
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let dump = args.iter().any(|a| a == "--dump");
    let config_path = args.iter().find(|a| !a.starts_with("--")).map(String::as_str);

    let config = config::load_or_default(config_path);

    if dump {
        return dump_screens(&config);
    }

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    // Nearest-neighbour upscaling keeps the pixel look at any window size
    sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "0");

    let window_scale = config
        .window_scale
        .unwrap_or_else(|| calculate_window_scale(&video_subsystem));
    let window_width = CANVAS_WIDTH * window_scale;
    let window_height = CANVAS_HEIGHT * window_scale;

    println!("Monitor scale: {}x (window: {}x{})", window_scale, window_width, window_height);

    let window = video_subsystem
        .window(&config.window_title, window_width, window_height)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size for automatic pixel-perfect scaling
    canvas
        .set_logical_size(CANVAS_WIDTH, CANVAS_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;
    video_subsystem.text_input().start();

    println!("Loading art:");
    let (artwork, textures) = load_artwork(&texture_creator, &config.assets);

    let mut navigator = Navigator::new();
    let frame_duration = config.frame_duration();

    println!("Controls:");
    println!("W/A/S/D or arrows - Navigate / adjust sliders");
    println!("SPACE or ENTER - Select");
    println!("Typing / BACKSPACE - Edit name (name entry screen)");
    println!("ESC - Quit");

    'running: loop {
        let frame_start = Instant::now();

        // Fold every pending event in arrival order
        for input in poll_events(&mut event_pump) {
            match input {
                FrameInput::Quit => break 'running,
                FrameInput::Nav(event) => {
                    if let Transition::Moved { from, to } = navigator.handle(event) {
                        println!("Screen: {:?} -> {:?}", from, to);
                    }
                }
            }
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        {
            let mut surface = CanvasSurface::new(&mut canvas, &textures);
            screens::render(&mut surface, &navigator, &artwork, &config.content)?;
        }
        canvas.present();

        // Cap framerate to the configured FPS
        if let Some(remaining) = frame_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    let settings = navigator.settings();
    let name = navigator.name();
    println!(
        "Exiting (volume {:.2}, brightness {:.2}, name {})",
        settings.volume().value(),
        settings.brightness().value(),
        if name.is_empty() {
            "<none>".to_string()
        } else {
            format!("\"{}\"", name.as_str())
        }
    );

    Ok(())
}
