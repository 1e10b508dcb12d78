//! Grass preview: scatters a field, animates it on the CPU and reports
//! per-frame timing plus lighting statistics.
//!
//! Usage: cargo run --release -- [--config grass.json] [--time 0.0] [--frames 60] [--seed 0]

use std::time::Instant;

use rayon::prelude::*;

use verdant::core::{logging, Camera, Result, Vec3};
use verdant::grass::{GrassConfig, GrassSystem};
use verdant::render::DeformedVertex;

/// Frame step of the preview clock.
const FRAME_DT: f32 = 1.0 / 60.0;

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match arg_value(args, flag) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {} value '{}'", flag, raw);
            default
        }),
        None => default,
    }
}

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = match arg_value(&args, "--config") {
        Some(path) => GrassConfig::load(path)?,
        None => GrassConfig::default(),
    };
    if arg_value(&args, "--seed").is_some() {
        config.field.seed = parse_arg(&args, "--seed", config.field.seed);
    }
    let start_time: f32 = parse_arg(&args, "--time", 0.0);
    let frames: u32 = parse_arg(&args, "--frames", 60).max(1);

    let system = GrassSystem::new(config)?;
    let camera = Camera::default();

    println!("=== Grass preview: {} blades, {} frames ===", system.blade_count(), frames);

    let start = Instant::now();
    let mut last: Vec<DeformedVertex> = Vec::new();
    for frame_index in 0..frames {
        let frame = camera.frame_uniforms(start_time + frame_index as f32 * FRAME_DT);
        last = system.deform_frame(&frame);
    }
    let elapsed = start.elapsed().as_secs_f64();
    log::info!(
        "Deformed {} frames in {:.1}ms ({:.2}ms/frame)",
        frames,
        elapsed * 1000.0,
        elapsed * 1000.0 / frames as f64
    );

    let frame = camera.frame_uniforms(start_time + (frames - 1) as f32 * FRAME_DT);
    let mut fragments: Vec<_> = last.par_iter().map(DeformedVertex::fragment).collect();
    fragments.extend(system.ground_vertices(&frame).iter().map(DeformedVertex::fragment));

    let shade_start = Instant::now();
    let colors = system.shade_fragments(&fragments, &frame);
    log::info!(
        "Shaded {} fragments in {:.2}ms",
        colors.len(),
        shade_start.elapsed().as_secs_f64() * 1000.0
    );

    let tip_lean = last
        .chunks_exact(3)
        .zip(system.instances())
        .map(|(blade, inst)| {
            let rest = inst.model.transform_point3(Vec3::Y);
            (blade[0].world_position - rest).length()
        })
        .fold(0.0f32, f32::max);
    let luminance: f32 = colors
        .par_iter()
        .map(|c| 0.2126 * c.x + 0.7152 * c.y + 0.0722 * c.z)
        .sum::<f32>()
        / colors.len().max(1) as f32;

    println!("Max tip displacement: {:.4}", tip_lean);
    println!("Mean shaded luminance: {:.4}", luminance);
    Ok(())
}
