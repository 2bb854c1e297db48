use anyhow::{Context, Result};
use clap::Parser;
use fly_camera::cli::Cli;
use fly_camera::{Camera, CameraConfig, Script};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut script = Script::load(&cli.script)?;
    if let Some(path) = &cli.config {
        script.config = Some(CameraConfig::load(path)?);
    }

    log::info!("Replaying {} commands", script.commands.len());
    let camera = script.run();

    if cli.json {
        let json = serde_json::to_string_pretty(&camera.to_config()).context("Failed to serialize camera state")?;
        println!("{}", json);
    } else {
        print_state(&camera);
    }

    Ok(())
}

fn print_state(camera: &Camera) {
    println!("position: {:?}", camera.position());
    println!("yaw: {:.3}  pitch: {:.3}  zoom: {:.3}", camera.yaw(), camera.pitch(), camera.zoom());
    println!("front: {:?}", camera.front());
    println!("right: {:?}", camera.right());
    println!("up:    {:?}", camera.up());
    println!("view:");
    for row in camera.view_matrix().transpose().to_cols_array_2d() {
        println!("  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]", row[0], row[1], row[2], row[3]);
    }
}
