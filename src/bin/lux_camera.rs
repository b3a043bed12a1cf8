// std
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
// command line options
use clap::Parser;
// lux
use lux_camera::cameras::snapshot::CameraSnapshot;
use lux_camera::core::error::ExportError;
use lux_camera::core::export::{CameraExport, ExportModule, SceneBuffer};
use lux_camera::core::settings::ExportSettings;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Export a camera snapshot (JSON) as a LuxCore camera block.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// output width in pixels
    #[arg(short = 'x', long = "width", default_value_t = 640)]
    width: i32,
    /// output height in pixels
    #[arg(short = 'y', long = "height", default_value_t = 480)]
    height: i32,
    /// export settings (JSON), defaults are used otherwise
    #[arg(short = 's', long = "settings")]
    settings: Option<PathBuf>,
    /// write the camera block to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
    /// The path to the camera snapshot to read
    camera: PathBuf,
}

fn run(args: &Cli) -> Result<(), ExportError> {
    let settings: ExportSettings = match args.settings {
        Some(ref path) => ExportSettings::from_file(path)?,
        None => ExportSettings::default(),
    };
    let camera: CameraSnapshot = CameraSnapshot::from_file(&args.camera)?;
    let mut out = SceneBuffer::new();
    CameraExport::new(&camera, args.width, args.height, &settings)?.get_output(&mut out)?;
    match args.output {
        Some(ref path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            out.write_to(&mut writer)?;
            writer.flush()?;
            log::info!("camera \"{}\" written to {:?}", camera.name, path);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            out.write_to(&mut handle)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Cli::parse();
    let git_describe = option_env!("GIT_DESCRIBE").unwrap_or("unknown");
    log::info!("lux_camera version {} ({})", VERSION, git_describe);
    if let Err(err) = run(&args) {
        log::error!("{}", err);
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
